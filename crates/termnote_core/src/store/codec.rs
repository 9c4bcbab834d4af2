//! Line codecs for note records.
//!
//! # Responsibility
//! - Encode one note as one storage line in the configured format.
//! - Decode any supported line layout back into a note.
//!
//! # Invariants
//! - Encoded records never contain a line break.
//! - Decoding is format-tolerant: `{`-prefixed lines are tried as JSON
//!   first, and anything that is not a JSON note is treated as a delimited
//!   record.
//! - A delimited record is only written when it decodes back to the same
//!   fields.
//! - Delimited records carry no ID; one is derived from the line position and
//!   text, so an unchanged file always yields the same IDs and duplicate lines
//!   still get distinct ones.

use crate::model::note::{Note, NoteId};
use crate::store::{StoreError, StoreResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Field separator of the delimited layout.
pub const FIELD_DELIMITER: &str = "||";

const DELIMITED_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a7e_93d4_4b0e_8a55_1d2c_7e90_b3f4);

/// Record layout written by `save`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordFormat {
    /// One JSON object per line. Any field text round-trips.
    #[default]
    JsonLines,
    /// `title||content||timestamp`, no escaping.
    Delimited,
}

impl RecordFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JsonLines => "json",
            Self::Delimited => "delimited",
        }
    }
}

impl Display for RecordFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" | "jsonl" | "json-lines" => Ok(Self::JsonLines),
            "delimited" | "legacy" => Ok(Self::Delimited),
            other => Err(format!(
                "unsupported record format `{other}`; expected json|delimited"
            )),
        }
    }
}

/// Encodes one note as a storage line without the trailing newline.
///
/// # Errors
/// - `UnencodableField` when a delimited record would not decode back to the
///   same fields (`||` inside a field, a `|` next to a separator, line breaks).
/// - `Encode` when JSON serialization fails.
pub fn encode_record(note: &Note, format: RecordFormat) -> StoreResult<String> {
    match format {
        RecordFormat::JsonLines => Ok(serde_json::to_string(note)?),
        RecordFormat::Delimited => encode_delimited(note),
    }
}

/// Decodes one storage line, returning `None` for malformed records.
///
/// `position` is the zero-based line number in the file; it only feeds the
/// derived ID of delimited records. Only the line terminator is stripped, so
/// field whitespace survives.
pub fn decode_record(line: &str, position: usize) -> Option<Note> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return None;
    }
    if line.trim_start().starts_with('{') {
        if let Ok(note) = serde_json::from_str::<Note>(line) {
            return Some(note);
        }
    }

    let [title, content, timestamp] = split_delimited(line)?;
    Some(Note::with_id(
        delimited_record_id(line, position),
        title,
        content,
        timestamp,
    ))
}

fn encode_delimited(note: &Note) -> StoreResult<String> {
    let fields = [
        ("title", note.title.as_str()),
        ("content", note.content.as_str()),
        ("timestamp", note.last_modified.as_str()),
    ];
    if let Some((field, _)) = fields
        .iter()
        .find(|(_, value)| value.contains(['\n', '\r']))
    {
        return Err(StoreError::UnencodableField { field: *field });
    }

    let line = format!(
        "{}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
        note.title, note.content, note.last_modified
    );
    let decodes_back = serde_json::from_str::<Note>(&line).is_err()
        && split_delimited(&line)
            .is_some_and(|parts| parts == fields.map(|(_, value)| value));
    if !decodes_back {
        let field = fields
            .iter()
            .find(|(_, value)| value.contains('|'))
            .map_or("title", |(field, _)| *field);
        return Err(StoreError::UnencodableField { field });
    }
    Ok(line)
}

fn split_delimited(line: &str) -> Option<[&str; 3]> {
    let mut parts = line.split(FIELD_DELIMITER);
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    Some(fields)
}

fn delimited_record_id(line: &str, position: usize) -> NoteId {
    let key = format!("{position}:{line}");
    Uuid::new_v5(&DELIMITED_ID_NAMESPACE, key.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::{decode_record, encode_record, RecordFormat};
    use crate::model::note::Note;
    use crate::store::StoreError;

    fn delimited_round_trip(note: &Note) -> Option<(String, String, String)> {
        let line = encode_record(note, RecordFormat::Delimited).ok()?;
        let decoded = decode_record(&line, 0)?;
        Some((decoded.title, decoded.content, decoded.last_modified))
    }

    #[test]
    fn delimited_line_matches_legacy_layout() {
        let note = Note::new("Trip", "Pack sunscreen", "Sat Oct 17 09:05:01 2026");
        let line = encode_record(&note, RecordFormat::Delimited).unwrap();
        assert_eq!(line, "Trip||Pack sunscreen||Sat Oct 17 09:05:01 2026");
    }

    #[test]
    fn delimited_encode_rejects_separator_in_content() {
        let note = Note::new("a", "x || y", "now");
        let err = encode_record(&note, RecordFormat::Delimited).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnencodableField { field: "content" }
        ));
    }

    #[test]
    fn delimited_encode_rejects_pipe_at_field_edge() {
        for (title, content) in [("a|", "b"), ("a", "b|")] {
            let note = Note::new(title, content, "t1");
            let err = encode_record(&note, RecordFormat::Delimited).unwrap_err();
            assert!(
                matches!(err, StoreError::UnencodableField { .. }),
                "{title:?}/{content:?} should be rejected"
            );
        }

        let inner_pipe = Note::new("a|b", "c | d", "t1");
        assert_eq!(
            delimited_round_trip(&inner_pipe),
            Some(("a|b".to_string(), "c | d".to_string(), "t1".to_string()))
        );
    }

    #[test]
    fn delimited_encode_rejects_line_breaks() {
        let note = Note::new("a", "two\nlines", "t1");
        let err = encode_record(&note, RecordFormat::Delimited).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnencodableField { field: "content" }
        ));
    }

    #[test]
    fn brace_prefixed_delimited_record_is_not_mistaken_for_json() {
        let note = Note::new("{todo}", "buy milk", "t1");
        assert_eq!(
            delimited_round_trip(&note),
            Some(("{todo}".to_string(), "buy milk".to_string(), "t1".to_string()))
        );
    }

    #[test]
    fn delimited_fields_keep_surrounding_whitespace() {
        let note = Note::new("  Trip", "Pack  ", " t1 ");
        assert_eq!(
            delimited_round_trip(&note),
            Some(("  Trip".to_string(), "Pack  ".to_string(), " t1 ".to_string()))
        );
    }

    #[test]
    fn decode_rejects_wrong_field_counts() {
        assert!(decode_record("only||two", 0).is_none());
        assert!(decode_record("a||b||c||d", 0).is_none());
        assert!(decode_record("   ", 0).is_none());
        assert!(decode_record("{not json", 0).is_none());
    }

    #[test]
    fn delimited_ids_are_stable_per_line_and_position() {
        let first = decode_record("a||b||c", 0).unwrap();
        let again = decode_record("a||b||c\r", 0).unwrap();
        let duplicate = decode_record("a||b||c", 1).unwrap();
        let other = decode_record("a||b||d", 0).unwrap();
        assert_eq!(first.id, again.id);
        assert_ne!(first.id, duplicate.id);
        assert_ne!(first.id, other.id);
    }

    #[test]
    fn json_record_keeps_separator_text() {
        let note = Note::new("a||b", "c||d", "now");
        let line = encode_record(&note, RecordFormat::JsonLines).unwrap();
        assert_eq!(decode_record(&line, 3), Some(note));
    }

    #[test]
    fn format_parses_aliases() {
        assert_eq!("JSON".parse::<RecordFormat>(), Ok(RecordFormat::JsonLines));
        assert_eq!(" legacy ".parse::<RecordFormat>(), Ok(RecordFormat::Delimited));
        assert!("xml".parse::<RecordFormat>().is_err());
    }
}
