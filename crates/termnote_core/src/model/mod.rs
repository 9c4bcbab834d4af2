//! Note domain model.
//!
//! # Responsibility
//! - Define the data structures shared by storage, service and shell.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Notes are never deleted; the model has no tombstone state.

pub mod note;
