//! Core logic for the termnote notes shell.
//! Storage format, note use-cases and the menu state machine live here; the
//! binary crate only wires them to the real terminal.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod shell;
pub mod store;

pub use clock::{Clock, SequenceClock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging};
pub use model::note::{Note, NoteEdit, NoteId};
pub use search::keyword::{search_notes, KeywordQuery};
pub use service::note_service::{NoteService, NoteServiceError};
pub use shell::{InputSource, LineInput, ScriptedInput, Shell, ShellError, ShellState};
pub use store::{FileNoteStore, NoteStore, RecordFormat, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
