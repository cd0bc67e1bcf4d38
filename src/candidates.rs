//! Autocomplete candidate data
//!
//! The candidate list is the static, read-only source of suggestions. It is
//! loaded once at startup, either from a JSON file or from the list bundled
//! with the binary, and never mutated afterwards.
//!
//! # Format
//!
//! ```json
//! [
//!   { "text": "alice@example.com", "isValid": true },
//!   { "text": "bob@example.com" }
//! ]
//! ```
//!
//! `isValid` is optional; when missing it is computed with the same format
//! check used for committed tags.

use crate::email::Email;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const BUNDLED_CANDIDATES: &str = include_str!("../data/emails.json");

/// Errors that can occur while loading candidate data
#[derive(Debug, Error)]
pub enum CandidateError {
    /// The candidate file could not be read
    #[error("Failed to read candidate file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The candidate data is not valid JSON in the expected shape
    #[error("Failed to parse candidate data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for candidate operations
pub type Result<T> = std::result::Result<T, CandidateError>;

/// Candidate record as it appears on disk
#[derive(Debug, Deserialize)]
struct CandidateRecord {
    text: String,
    #[serde(rename = "isValid", default)]
    is_valid: Option<bool>,
}

impl From<CandidateRecord> for Email {
    fn from(record: CandidateRecord) -> Self {
        match record.is_valid {
            Some(is_valid) => Self::with_validity(record.text, is_valid),
            None => Self::new(record.text),
        }
    }
}

/// Read-only list of suggestion candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    entries: Vec<Email>,
}

impl CandidateList {
    /// Create a candidate list from entries
    ///
    /// Entries with empty text are dropped since they can never become a tag.
    #[must_use]
    pub fn new(entries: Vec<Email>) -> Self {
        let before = entries.len();
        let entries: Vec<Email> = entries.into_iter().filter(|e| !e.text.is_empty()).collect();
        if entries.len() != before {
            warn!(dropped = before - entries.len(), "dropped empty candidates");
        }
        Self { entries }
    }

    /// Parse a candidate list from JSON text
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::ParseError` if `json` is not an array of
    /// `{ "text": ..., "isValid": ... }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CandidateRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records.into_iter().map(Email::from).collect()))
    }

    /// Load a candidate list from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CandidateError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::from_json(&contents)?;
        debug!(path = %path.display(), count = list.len(), "loaded candidates");
        Ok(list)
    }

    /// The candidate list shipped with the binary
    ///
    /// # Errors
    ///
    /// Returns `CandidateError::ParseError` if the bundled data is malformed.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CANDIDATES)
    }

    /// Load from `path` when given, otherwise fall back to the bundled list
    ///
    /// # Errors
    ///
    /// Returns `CandidateError` if the selected source cannot be read or parsed.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Email] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Email> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Email> for CandidateList {
    fn from_iter<I: IntoIterator<Item = Email>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
