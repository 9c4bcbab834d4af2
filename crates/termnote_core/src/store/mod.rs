//! Flat-file persistence for the notes collection.
//!
//! # Responsibility
//! - Map an ordered sequence of notes to one record per line and back.
//! - Keep file-format details out of service and shell code.
//!
//! # Invariants
//! - `save` always rewrites the whole file; there is no append path.
//! - Malformed records are dropped on load, never surfaced as errors.
//! - I/O failures are returned, never swallowed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod codec;
mod file_store;

pub use codec::{decode_record, encode_record, RecordFormat, FIELD_DELIMITER};
pub use file_store::{FileNoteStore, NoteStore, DEFAULT_NOTES_FILE};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the storage file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A field cannot be represented in the delimited layout.
    UnencodableField { field: &'static str },
    /// JSON record encoding failed.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "notes file `{}`: {source}", path.display())
            }
            Self::UnencodableField { field } => write!(
                f,
                "note {field} cannot contain `{FIELD_DELIMITER}`, a `|` next to a separator or line breaks in delimited format"
            ),
            Self::Encode(err) => write!(f, "failed to encode note record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::UnencodableField { .. } => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
