//! Domain model for student notes.
//!
//! # Responsibility
//! - Define the note record and the ordered list persisted as one unit.
//!
//! # Invariants
//! - Notes carry no identifier; identity is the position in the list.
//! - The list is ordered newest-first.

pub mod note;
