//! File-backed note store.
//!
//! # Responsibility
//! - Load the whole notes collection from one flat file.
//! - Rewrite the whole file on every save.
//!
//! # Invariants
//! - A missing file loads as an empty collection.
//! - Load order equals file order.
//! - Save encodes every note before touching the file, so an unencodable
//!   note leaves the previous contents intact.
//!
//! # See also
//! - `store::codec` for the record layouts.

use super::codec::{decode_record, encode_record, RecordFormat};
use super::{StoreError, StoreResult};
use crate::model::note::Note;
use log::{debug, error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name used when no path is configured.
pub const DEFAULT_NOTES_FILE: &str = "notes.txt";

/// Persistence contract used by the note service.
pub trait NoteStore {
    /// Loads every well-formed note in storage order.
    fn load(&self) -> StoreResult<Vec<Note>>;
    /// Replaces the stored collection with `notes`.
    fn save(&self, notes: &[Note]) -> StoreResult<()>;
}

impl<S: NoteStore + ?Sized> NoteStore for &S {
    fn load(&self) -> StoreResult<Vec<Note>> {
        (**self).load()
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        (**self).save(notes)
    }
}

/// Note store over a single line-oriented text file.
#[derive(Debug, Clone)]
pub struct FileNoteStore {
    path: PathBuf,
    format: RecordFormat,
}

impl FileNoteStore {
    /// Creates a store for `path` writing records in `format`.
    ///
    /// No I/O happens until the first load/save.
    pub fn new(path: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl NoteStore for FileNoteStore {
    fn load(&self) -> StoreResult<Vec<Note>> {
        let started_at = Instant::now();
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=notes_load module=store status=ok count=0 reason=missing_file");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=notes_load module=store status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let mut notes = Vec::new();
        let mut skipped = 0usize;
        for (position, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match decode_record(line, position) {
                Some(note) => notes.push(note),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            debug!(
                "event=notes_load module=store status=partial skipped_records={}",
                skipped
            );
        }
        info!(
            "event=notes_load module=store status=ok count={} duration_ms={}",
            notes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        let started_at = Instant::now();
        let mut buffer = String::new();
        for note in notes {
            buffer.push_str(&encode_record(note, self.format)?);
            buffer.push('\n');
        }

        if let Err(err) = fs::write(&self.path, buffer) {
            error!(
                "event=notes_save module=store status=error format={} error_code=write_failed error={}",
                self.format, err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=notes_save module=store status=ok format={} count={} duration_ms={}",
            self.format,
            notes.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileNoteStore, NoteStore};
    use crate::model::note::Note;
    use crate::store::{RecordFormat, StoreError};
    use std::fs;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileNoteStore::new(dir.path().join("absent.txt"), RecordFormat::Delimited);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn failed_encode_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "keep||me||now\n").unwrap();
        let store = FileNoteStore::new(&path, RecordFormat::Delimited);

        let err = store
            .save(&[Note::new("bad||title", "", "now")])
            .unwrap_err();
        assert!(matches!(err, StoreError::UnencodableField { field: "title" }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep||me||now\n");
    }

    #[test]
    fn save_into_missing_directory_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileNoteStore::new(
            dir.path().join("no-such-dir").join("notes.txt"),
            RecordFormat::JsonLines,
        );
        let err = store.save(&[Note::new("a", "b", "c")]).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
