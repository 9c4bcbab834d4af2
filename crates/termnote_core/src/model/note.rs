//! Note domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the notes collection.
//! - Provide in-place edit semantics shared by every shell flow.
//!
//! # Invariants
//! - `id` is generated once at creation and never reassigned by edits.
//! - Every edit refreshes `last_modified`, even when no field changed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a note.
///
/// Kept as a type alias so signatures read as note identity, not raw UUIDs.
pub type NoteId = Uuid;

/// One user note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID used to resolve edit targets against a fresh load.
    pub id: NoteId,
    /// Free-form title. Empty titles are allowed.
    pub title: String,
    /// Free-form body. May be empty.
    pub content: String,
    /// Human-readable local time of the last create/edit.
    pub last_modified: String,
}

/// Partial replacement applied by [`Note::apply_edit`].
///
/// `None` and blank values keep the existing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteEdit {
    /// Builds an edit from raw prompt answers, trimming whitespace.
    pub fn from_input(title: &str, content: &str) -> Self {
        Self {
            title: non_blank(title),
            content: non_blank(content),
        }
    }

    /// Returns whether this edit only refreshes the timestamp.
    pub fn is_touch_only(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl Note {
    /// Creates a note with a freshly generated ID.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, last_modified)
    }

    /// Creates a note with a caller-provided ID.
    ///
    /// Used by decoders that recover identity from storage.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        last_modified: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            last_modified: last_modified.into(),
        }
    }

    /// Applies an edit in place and stamps `now` as the modification time.
    pub fn apply_edit(&mut self, edit: NoteEdit, now: String) {
        if let Some(title) = edit.title.filter(|value| !value.trim().is_empty()) {
            self.title = title;
        }
        if let Some(content) = edit.content.filter(|value| !value.trim().is_empty()) {
            self.content = content;
        }
        self.last_modified = now;
    }

    /// Case-insensitive substring match over title and content.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
