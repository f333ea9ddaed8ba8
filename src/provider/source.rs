//! provider::source
//!
//! Flat key/value properties text source.
//!
//! # Format
//!
//! One `key=value` entry per line. Lines whose first non-blank character
//! is `#` or `!` are comments; blank lines are skipped. The key is
//! trimmed; the value is everything after the first `=` with leading
//! whitespace removed (trailing text belongs to the value's own grammar).
//! A duplicate key keeps its first position but takes the last value.
//!
//! ```text
//! # checkout flags
//! FEATURE_ONE=My Feature;true;Group1
//! FEATURE_TWO=
//! ```
//!
//! # Example
//!
//! ```
//! use flagstone::provider::PropertiesSource;
//!
//! let source = PropertiesSource::parse("F1=My Feature;true\nF2=\n").unwrap();
//! assert_eq!(source.len(), 2);
//! assert_eq!(source.get("F1"), Some("My Feature;true"));
//! assert_eq!(source.get("F2"), Some(""));
//! ```

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors from reading or parsing a properties source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read properties file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid properties line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// An ordered, flat mapping of string keys to string values.
///
/// This is the persisted configuration boundary the properties-backed
/// provider consumes. Entries keep the order of their first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesSource {
    entries: IndexMap<String, String>,
}

impl PropertiesSource {
    /// Parse properties text.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` for a non-comment, non-blank line
    /// without a `=` separator or with an empty key. Line numbers are
    /// 1-based.
    pub fn parse(text: &str) -> Result<Self, SourceError> {
        let mut entries = IndexMap::new();

        for (index, raw) in text.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let Some((key, value)) = raw.split_once('=') else {
                return Err(SourceError::Parse {
                    line: index + 1,
                    message: "expected 'key=value'".into(),
                });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(SourceError::Parse {
                    line: index + 1,
                    message: "empty key".into(),
                });
            }

            entries.insert(key.to_string(), value.trim_start().to_string());
        }

        Ok(Self { entries })
    }

    /// Read and parse a properties file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Read` if the file cannot be read, or any
    /// error from [`parse`](Self::parse).
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let contents = fs::read_to_string(path).map_err(|e| SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let source = Self::parse(&contents)?;
        debug!(path = %path.display(), entries = source.len(), "loaded properties source");
        Ok(source)
    }

    /// Build a source from in-memory entries.
    ///
    /// Later entries for the same key overwrite earlier values.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Iterate entries in source order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
