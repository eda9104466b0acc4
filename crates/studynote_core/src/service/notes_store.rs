//! Note list store with write-through persistence.
//!
//! # Responsibility
//! - Own the in-memory note list and its persisted mirror.
//! - Apply add/update/delete-one/clear-all and persist the whole list.
//!
//! # Invariants
//! - After every successful mutation the stored JSON equals the in-memory list.
//! - A failed write leaves the in-memory list untouched.
//! - Order only changes by prepend-on-add; indices are note identities.
//! - Load never fails: missing or malformed storage yields an empty list.

use crate::model::note::{Note, NoteList};
use crate::repo::kv_repo::{KeyValueRepository, RepoError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the JSON-encoded note list.
pub const NOTES_STORAGE_KEY: &str = "notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for note store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Index does not address a note in the current list.
    IndexOutOfRange { index: usize, len: usize },
    /// Note list could not be encoded.
    Serialize(serde_json::Error),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note index {index} out of range for {len} notes")
            }
            Self::Serialize(err) => write!(f, "failed to encode notes: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IndexOutOfRange { .. } => None,
            Self::Serialize(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Note list owner over a key-value repository.
pub struct NotesStore<R: KeyValueRepository> {
    repo: R,
    notes: NoteList,
}

impl<R: KeyValueRepository> NotesStore<R> {
    /// Creates a store with an empty list. Call [`NotesStore::load`] to read storage.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            notes: NoteList::new(),
        }
    }

    /// Current in-memory list, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// Absent, unreadable or malformed data is treated as "no notes".
    pub fn load(&mut self) -> &[Note] {
        self.notes = match self.repo.get_item(NOTES_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<NoteList>(&raw) {
                Ok(notes) => {
                    info!(
                        "event=notes_load module=store status=ok count={}",
                        notes.len()
                    );
                    notes
                }
                Err(err) => {
                    warn!(
                        "event=notes_load module=store status=fallback reason=malformed error={err}"
                    );
                    NoteList::new()
                }
            },
            Ok(None) => {
                info!("event=notes_load module=store status=ok count=0 reason=absent");
                NoteList::new()
            }
            Err(err) => {
                error!(
                    "event=notes_load module=store status=fallback reason=storage_error error={err}"
                );
                NoteList::new()
            }
        };
        &self.notes
    }

    /// Prepends a new note and persists.
    ///
    /// Field presence is the caller's responsibility.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<&[Note]> {
        let mut next = NoteList::with_capacity(self.notes.len() + 1);
        next.push(Note::new(title, description));
        next.extend(self.notes.iter().cloned());
        self.commit("notes_add", next)
    }

    /// Replaces the note at `index`, keeping every other position.
    pub fn update(
        &mut self,
        index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> StoreResult<&[Note]> {
        self.check_index(index)?;
        let mut next = self.notes.clone();
        next[index] = Note::new(title, description);
        self.commit("notes_update", next)
    }

    /// Removes the note at `index`; later notes shift up by one.
    pub fn delete_one(&mut self, index: usize) -> StoreResult<&[Note]> {
        self.check_index(index)?;
        let mut next = self.notes.clone();
        next.remove(index);
        self.commit("notes_delete_one", next)
    }

    /// Empties the list and persists.
    pub fn clear_all(&mut self) -> StoreResult<&[Note]> {
        self.commit("notes_clear_all", NoteList::new())
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.notes.len() {
            warn!(
                "event=index_check module=store status=error index={index} len={}",
                self.notes.len()
            );
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, event: &'static str, next: NoteList) -> StoreResult<&[Note]> {
        let encoded = serde_json::to_string(&next)?;
        if let Err(err) = self.repo.set_item(NOTES_STORAGE_KEY, &encoded) {
            error!("event={event} module=store status=error error={err}");
            return Err(err.into());
        }

        self.notes = next;
        info!(
            "event={event} module=store status=ok count={}",
            self.notes.len()
        );
        Ok(&self.notes)
    }
}
