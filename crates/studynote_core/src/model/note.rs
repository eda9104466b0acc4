//! Note domain model.
//!
//! # Responsibility
//! - Define the title/description pair that is the unit of user content.
//! - Define the JSON shape of the persisted note list.
//!
//! # Invariants
//! - A note is only ever replaced as a whole, never patched field by field.
//! - Serialized form is exactly `{"title": "...", "description": "..."}`.

use serde::{Deserialize, Serialize};

/// Ordered note collection, newest first. Positions are note identities.
pub type NoteList = Vec<Note>;

/// One student note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub description: String,
}

impl Note {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns whether both fields are present.
    ///
    /// Presence is checked, not content: whitespace-only text counts.
    pub fn has_required_fields(title: &str, description: &str) -> bool {
        !title.is_empty() && !description.is_empty()
    }
}
