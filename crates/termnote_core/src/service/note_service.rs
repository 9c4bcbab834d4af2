//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/list/get/search/edit APIs over a `NoteStore`.
//! - Stamp modification times from an injected `Clock`.
//!
//! # Invariants
//! - Every operation starts from a fresh `load()`.
//! - Every mutation ends with a full `save()` of the freshly loaded list.
//! - Edits resolve their target by stable ID, never by list position.

use crate::clock::Clock;
use crate::model::note::{Note, NoteEdit, NoteId};
use crate::search::keyword::{search_notes, KeywordQuery};
use crate::store::{NoteStore, StoreError, StoreResult};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Target note is not present in the current collection.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoteNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Note service facade over a store and a clock.
pub struct NoteService<S: NoteStore, C: Clock> {
    store: S,
    clock: C,
}

impl<S: NoteStore, C: Clock> NoteService<S, C> {
    /// Creates a service using the provided store and clock.
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a new note to the stored collection and returns it.
    ///
    /// Empty title/content are accepted as-is.
    pub fn create_note(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let note = Note::new(title, content, self.clock.now());
        let mut notes = self.store.load()?;
        notes.push(note.clone());
        self.store.save(&notes)?;
        info!(
            "event=note_create module=service status=ok note_id={} total={}",
            note.id,
            notes.len()
        );
        Ok(note)
    }

    /// Lists all notes in storage order.
    pub fn list_notes(&self) -> StoreResult<Vec<Note>> {
        self.store.load()
    }

    /// Gets one note by stable ID.
    pub fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        Ok(self.store.load()?.into_iter().find(|note| note.id == id))
    }

    /// Returns notes whose title or content contains `keyword`, ignoring case.
    pub fn search_notes(&self, keyword: &str) -> StoreResult<Vec<Note>> {
        let notes = self.store.load()?;
        let hits = search_notes(&notes, &KeywordQuery::new(keyword));
        info!(
            "event=note_search module=service status=ok scanned={} hits={}",
            notes.len(),
            hits.len()
        );
        Ok(hits)
    }

    /// Applies `edit` to the note with `id` in a fresh load and saves it.
    ///
    /// The timestamp is refreshed even when `edit` changes nothing.
    ///
    /// # Errors
    /// - `NoteNotFound` when `id` is absent from the fresh load; storage is
    ///   left untouched in that case.
    pub fn edit_note(&self, id: NoteId, edit: NoteEdit) -> Result<Note, NoteServiceError> {
        let mut notes = self.store.load()?;
        let Some(note) = notes.iter_mut().find(|note| note.id == id) else {
            warn!(
                "event=note_edit module=service status=skipped reason=not_found note_id={}",
                id
            );
            return Err(NoteServiceError::NoteNotFound(id));
        };

        let touch_only = edit.is_touch_only();
        note.apply_edit(edit, self.clock.now());
        let updated = note.clone();
        self.store.save(&notes)?;
        info!(
            "event=note_edit module=service status=ok note_id={} touch_only={}",
            id, touch_only
        );
        Ok(updated)
    }
}
