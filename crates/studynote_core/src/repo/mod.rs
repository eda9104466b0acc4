//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value storage contract used by the note store.
//! - Isolate SQLite query details from store/controller orchestration.
//!
//! # Invariants
//! - Repositories only operate on migrated connections.

pub mod kv_repo;
