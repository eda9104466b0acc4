//! Core domain logic for StudyNote.
//! This crate is the single source of truth for note-list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod ui;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteList};
pub use repo::kv_repo::{KeyValueRepository, RepoError, RepoResult, SqliteKeyValueRepository};
pub use service::notes_store::{NotesStore, StoreError, StoreResult, NOTES_STORAGE_KEY};
pub use ui::form::{Focus, FormMode, NoteForm};
pub use ui::notes_ui::{NotesUi, SubmitOutcome};
pub use ui::notification::Notification;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
