//! Keyword search over the in-memory notes collection.
//!
//! # Responsibility
//! - Filter notes by case-insensitive substring over title and content.
//!
//! # Invariants
//! - Hits keep collection order.
//! - Hits are copies; edits must be resolved by ID against a fresh load.

use crate::model::note::Note;

/// Search options for keyword filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordQuery {
    needle: String,
}

impl KeywordQuery {
    /// Creates a query; matching ignores case.
    ///
    /// An empty keyword matches every note.
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: keyword.to_lowercase(),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        note.contains_lowercase(&self.needle)
    }
}

/// Returns the notes matching `query`, in collection order.
pub fn search_notes(notes: &[Note], query: &KeywordQuery) -> Vec<Note> {
    notes
        .iter()
        .filter(|note| query.matches(note))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{search_notes, KeywordQuery};
    use crate::model::note::Note;

    fn sample() -> Vec<Note> {
        vec![
            Note::new("Grocery List", "milk, eggs", "t1"),
            Note::new("Trip", "Pack sunscreen", "t2"),
            Note::new("Ideas", "grow tomatoes", "t3"),
        ]
    }

    #[test]
    fn matches_title_ignoring_case() {
        let notes = sample();
        let by_prefix = search_notes(&notes, &KeywordQuery::new("gro"));
        assert_eq!(by_prefix.len(), 2);
        assert_eq!(by_prefix[0].title, "Grocery List");
        assert_eq!(by_prefix[1].title, "Ideas");

        let by_upper = search_notes(&notes, &KeywordQuery::new("LIST"));
        assert_eq!(by_upper.len(), 1);
        assert_eq!(by_upper[0].title, "Grocery List");
    }

    #[test]
    fn matches_content_and_empty_keyword() {
        let notes = sample();
        assert_eq!(search_notes(&notes, &KeywordQuery::new("SUNSCREEN")).len(), 1);
        assert_eq!(search_notes(&notes, &KeywordQuery::new("")).len(), 3);
        assert!(search_notes(&notes, &KeywordQuery::new("passport")).is_empty());
    }
}
