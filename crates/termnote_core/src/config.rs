//! Runtime configuration for the notes shell.
//!
//! # Responsibility
//! - Carry the storage path and format into `FileNoteStore` explicitly.
//! - Carry logging options into `init_logging`.
//!
//! # Invariants
//! - Defaults never depend on process-global state other than build mode.

use crate::logging::{default_log_level, normalize_level};
use crate::store::{FileNoteStore, RecordFormat, DEFAULT_NOTES_FILE};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidFormat(String),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat(message) | Self::InvalidLogLevel(message) => {
                write!(f, "{message}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for one shell run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Storage file location.
    pub notes_path: PathBuf,
    /// Record layout used when saving.
    pub format: RecordFormat,
    /// Normalized log level.
    pub log_level: &'static str,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notes_path: PathBuf::from(DEFAULT_NOTES_FILE),
            format: RecordFormat::default(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Builds a config from raw option values, falling back to defaults.
    ///
    /// # Errors
    /// - `InvalidFormat` for an unknown record format name.
    /// - `InvalidLogLevel` for an unknown level name.
    pub fn from_options(
        notes_path: Option<PathBuf>,
        format: Option<&str>,
        log_level: Option<&str>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let format = match format {
            Some(value) => value
                .parse::<RecordFormat>()
                .map_err(ConfigError::InvalidFormat)?,
            None => defaults.format,
        };
        let log_level = match log_level {
            Some(value) => normalize_level(value).map_err(ConfigError::InvalidLogLevel)?,
            None => defaults.log_level,
        };

        Ok(Self {
            notes_path: notes_path.unwrap_or(defaults.notes_path),
            format,
            log_level,
            log_dir,
        })
    }

    /// Builds the store described by this config.
    pub fn open_store(&self) -> FileNoteStore {
        FileNoteStore::new(self.notes_path.clone(), self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use crate::store::RecordFormat;
    use std::path::{Path, PathBuf};

    #[test]
    fn defaults_point_at_notes_txt_in_json() {
        let config = AppConfig::from_options(None, None, None, None).unwrap();
        assert_eq!(config.notes_path, PathBuf::from("notes.txt"));
        assert_eq!(config.format, RecordFormat::JsonLines);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn options_override_and_validate() {
        let config = AppConfig::from_options(
            Some(PathBuf::from("/tmp/other.txt")),
            Some("delimited"),
            Some("WARNING"),
            None,
        )
        .unwrap();
        assert_eq!(config.format, RecordFormat::Delimited);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.open_store().path(), Path::new("/tmp/other.txt"));

        let err = AppConfig::from_options(None, Some("yaml"), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
        let err = AppConfig::from_options(None, None, Some("loud"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }
}
