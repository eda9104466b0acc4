//! Note-taking controller.
//!
//! # Responsibility
//! - Dispatch submit/edit/delete/clear intents to `NotesStore`.
//! - Own form, focus and notification state for renderers to read.
//!
//! # Invariants
//! - A rejected submit (missing field) never touches the store or the form.
//! - A successful submit clears the form and returns focus to the title.
//! - Delete always shows two notifications; the second overwrites the first.

use super::form::{Focus, FormMode, NoteForm};
use super::notification::Notification;
use super::{
    deleting_note_message, missing_note_message, EMPTY_LIST_PLACEHOLDER, MSG_ALL_DELETED,
    MSG_MISSING_FIELDS, MSG_NOTE_DELETED, MSG_SAVE_FAILED,
};
use crate::model::note::Note;
use crate::repo::kv_repo::KeyValueRepository;
use crate::service::notes_store::{NotesStore, StoreError};
use log::{debug, error, warn};

/// Result of a submit intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new note was prepended.
    Added,
    /// The note at the edit position was replaced.
    Updated(usize),
    /// Title or description was empty.
    Rejected,
    /// The edited position no longer exists; the edit session was closed.
    StaleEdit(usize),
    /// Persistence failed; the form is unchanged.
    Failed,
}

/// Controller state for one note-taking session.
pub struct NotesUi<R: KeyValueRepository> {
    store: NotesStore<R>,
    form: NoteForm,
    focus: Focus,
    notification: Notification,
}

impl<R: KeyValueRepository> NotesUi<R> {
    pub fn new(store: NotesStore<R>) -> Self {
        Self {
            store,
            form: NoteForm::default(),
            focus: Focus::Title,
            notification: Notification::default(),
        }
    }

    /// Loads persisted notes and focuses the title field.
    pub fn start(&mut self) {
        let count = self.store.load().len();
        self.focus = Focus::Title;
        debug!("event=ui_start module=ui status=ok count={count}");
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Whether the list view should show the placeholder instead of notes.
    pub fn is_empty(&self) -> bool {
        self.store.notes().is_empty()
    }

    /// Muted text rendered in place of an empty list.
    pub fn placeholder(&self) -> &'static str {
        EMPTY_LIST_PLACEHOLDER
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn mode(&self) -> FormMode {
        self.form.mode()
    }

    /// Submit control label: "Update" while editing, "Add" otherwise.
    pub fn submit_label(&self) -> &'static str {
        match self.form.mode() {
            FormMode::Editing(_) => "Update",
            FormMode::Creating => "Add",
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    /// Types one character into the focused field.
    pub fn insert_char(&mut self, ch: char) {
        self.form.insert_char(self.focus, ch);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.form.backspace(self.focus);
    }

    /// Adds a new note or updates the one under edit.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !Note::has_required_fields(&self.form.title, &self.form.description) {
            debug!("event=ui_submit module=ui status=rejected reason=missing_fields");
            self.notification.show(MSG_MISSING_FIELDS);
            return SubmitOutcome::Rejected;
        }

        let title = self.form.title.clone();
        let description = self.form.description.clone();
        let result = match self.form.edit_index() {
            Some(index) => self
                .store
                .update(index, title, description)
                .map(|_| SubmitOutcome::Updated(index)),
            None => self
                .store
                .add(title, description)
                .map(|_| SubmitOutcome::Added),
        };

        match result {
            Ok(outcome) => {
                self.form.clear();
                self.focus = Focus::Title;
                outcome
            }
            Err(StoreError::IndexOutOfRange { index, .. }) => {
                warn!("event=ui_submit module=ui status=stale_edit index={index}");
                self.form.end_edit();
                self.focus = Focus::Title;
                self.notification.show(missing_note_message(index));
                SubmitOutcome::StaleEdit(index)
            }
            Err(err) => {
                error!("event=ui_submit module=ui status=error error={err}");
                self.notification.show(MSG_SAVE_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    /// Copies the note at `index` into the form and enters edit mode.
    pub fn edit(&mut self, index: usize) {
        let Some(note) = self.store.notes().get(index) else {
            warn!(
                "event=ui_edit module=ui status=ignored index={index} len={}",
                self.store.notes().len()
            );
            return;
        };
        self.form.start_edit(index, &note.title, &note.description);
        self.focus = Focus::Title;
    }

    /// Deletes the note at `index`.
    pub fn delete(&mut self, index: usize) {
        self.notification.show(deleting_note_message(index));
        match self.store.delete_one(index) {
            Ok(_) => self.notification.show(MSG_NOTE_DELETED),
            Err(StoreError::IndexOutOfRange { index, .. }) => {
                self.notification.show(missing_note_message(index));
            }
            Err(err) => {
                error!("event=ui_delete module=ui status=error index={index} error={err}");
                self.notification.show(MSG_SAVE_FAILED);
            }
        }
    }

    /// Deletes every note.
    pub fn clear_all(&mut self) {
        match self.store.clear_all() {
            Ok(_) => self.notification.show(MSG_ALL_DELETED),
            Err(err) => {
                error!("event=ui_clear_all module=ui status=error error={err}");
                self.notification.show(MSG_SAVE_FAILED);
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }
}
