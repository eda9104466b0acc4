//! Headless note-taking controller.
//!
//! # Responsibility
//! - Hold transient form, edit-session, focus and notification state.
//! - Translate user intents into `NotesStore` calls.
//! - Keep every user-visible text in one place for renderers.
//!
//! # Invariants
//! - Errors never escape this layer; they become notifications.
//! - Form state is process-local and never persisted.

pub mod form;
pub mod notes_ui;
pub mod notification;

/// Application heading.
pub const APP_TITLE: &str = "Student Notes";
/// Placeholder shown in an empty title field.
pub const TITLE_PLACEHOLDER: &str = "Enter Title";
/// Placeholder shown in an empty description field.
pub const DESCRIPTION_PLACEHOLDER: &str = "Write your description...";
/// Muted message shown instead of an empty list.
pub const EMPTY_LIST_PLACEHOLDER: &str = "No notes added";
/// Heading of the notification dialog.
pub const NOTIFICATION_TITLE: &str = "Notification";
/// Label of the bulk-delete control.
pub const CLEAR_ALL_LABEL: &str = "Clear All";

pub const MSG_MISSING_FIELDS: &str = "Please enter title and description!";
pub const MSG_NOTE_DELETED: &str = "Note deleted successfully!";
pub const MSG_ALL_DELETED: &str = "All notes deleted!";
pub const MSG_SAVE_FAILED: &str = "Failed to save notes!";

/// Notification shown before a note is removed. `index` is zero-based.
pub fn deleting_note_message(index: usize) -> String {
    format!("Deleting note {}", index + 1)
}

/// Notification for a note position that no longer exists. `index` is zero-based.
pub fn missing_note_message(index: usize) -> String {
    format!("Note {} no longer exists!", index + 1)
}
