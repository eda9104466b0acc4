//! Single-slot user notification.
//!
//! # Invariants
//! - At most one message exists; showing a new one replaces the old.
//! - `shown_count` increases by one per `show`, including hidden overwrites.

/// Current notification message and visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    message: String,
    visible: bool,
    shown_count: u64,
}

impl Notification {
    /// Replaces the current message and makes it visible.
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
        self.shown_count += 1;
    }

    /// Hides the dialog. The last message is kept for inspection.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of messages shown since start.
    pub fn shown_count(&self) -> u64 {
        self.shown_count
    }
}

#[cfg(test)]
mod tests {
    use super::Notification;

    #[test]
    fn show_replaces_previous_message() {
        let mut notification = Notification::default();
        notification.show("first");
        notification.show("second");

        assert_eq!(notification.message(), "second");
        assert!(notification.is_visible());
        assert_eq!(notification.shown_count(), 2);
    }

    #[test]
    fn dismiss_hides_but_keeps_text() {
        let mut notification = Notification::default();
        notification.show("hello");
        notification.dismiss();

        assert!(!notification.is_visible());
        assert_eq!(notification.message(), "hello");
    }
}
