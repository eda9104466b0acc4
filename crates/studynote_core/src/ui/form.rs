//! Edit form state.
//!
//! # Responsibility
//! - Hold working copies of title and description.
//! - Track the edit session (which note position, if any, is being edited).
//! - Provide cursor-free text editing on the focused field.
//!
//! # Invariants
//! - `edit_index == None` means add mode; `Some(i)` means update of position `i`.
//! - Only `clear` and `start_edit` change the edit session.

/// Input focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Description,
    Notes,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Notes,
            Self::Notes => Self::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Title => Self::Notes,
            Self::Description => Self::Title,
            Self::Notes => Self::Description,
        }
    }
}

/// Form mode derived from the edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(usize),
}

/// Working copy of the note being written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub description: String,
    edit_index: Option<usize>,
}

impl NoteForm {
    pub fn mode(&self) -> FormMode {
        match self.edit_index {
            Some(index) => FormMode::Editing(index),
            None => FormMode::Creating,
        }
    }

    pub fn edit_index(&self) -> Option<usize> {
        self.edit_index
    }

    /// Loads a note into the form and opens an edit session for `index`.
    pub fn start_edit(&mut self, index: usize, title: &str, description: &str) {
        self.title = title.to_string();
        self.description = description.to_string();
        self.edit_index = Some(index);
    }

    /// Ends the edit session and keeps the typed text.
    pub fn end_edit(&mut self) {
        self.edit_index = None;
    }

    /// Empties both fields and returns to add mode.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.edit_index = None;
    }

    /// Appends a character to the field under `focus`.
    pub fn insert_char(&mut self, focus: Focus, ch: char) {
        if let Some(field) = self.field_mut(focus) {
            field.push(ch);
        }
    }

    /// Removes the last character of the field under `focus`.
    pub fn backspace(&mut self, focus: Focus) {
        if let Some(field) = self.field_mut(focus) {
            field.pop();
        }
    }

    fn field_mut(&mut self, focus: Focus) -> Option<&mut String> {
        match focus {
            Focus::Title => Some(&mut self.title),
            Focus::Description => Some(&mut self.description),
            Focus::Notes => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Focus, FormMode, NoteForm};

    #[test]
    fn focus_cycles_through_all_targets() {
        assert_eq!(Focus::Title.next().next().next(), Focus::Title);
        assert_eq!(Focus::Title.previous(), Focus::Notes);
    }

    #[test]
    fn editing_text_targets_focused_field_only() {
        let mut form = NoteForm::default();
        form.insert_char(Focus::Title, 'a');
        form.insert_char(Focus::Description, 'b');
        form.insert_char(Focus::Notes, 'c');
        form.backspace(Focus::Title);

        assert_eq!(form.title, "");
        assert_eq!(form.description, "b");
    }

    #[test]
    fn clear_returns_to_creating_mode() {
        let mut form = NoteForm::default();
        form.start_edit(2, "t", "d");
        assert_eq!(form.mode(), FormMode::Editing(2));

        form.clear();
        assert_eq!(form.mode(), FormMode::Creating);
        assert!(form.title.is_empty() && form.description.is_empty());
    }
}
