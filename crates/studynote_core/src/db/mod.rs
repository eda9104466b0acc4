//! SQLite storage bootstrap for the local note storage file.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write `local_storage` before migrations succeed.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory, DbError, DbResult};
