//! Recipients - an email recipient field with autocomplete
//!
//! This library provides the pieces of a recipient input: committed tags
//! with per-entry validation, a draft with suggestions drawn from a static
//! candidate list, and the collapsed/expanded input lifecycle. The
//! [`ui::ratatui_adapter`] module renders it in a terminal.
//!
//! ```
//! use recipients::candidates::CandidateList;
//! use recipients::composer::{Composer, Outcome};
//!
//! let candidates = CandidateList::from_json(
//!     r#"[{"text": "alice@x.com"}, {"text": "bob@x.com"}, {"text": "carol@x.com"}]"#,
//! )?;
//! let mut field = Composer::new(candidates);
//!
//! field.activate();
//! field.input_char('a');
//! let shown: Vec<_> = field.suggestions().iter().map(|e| e.text.as_str()).collect();
//! assert_eq!(shown, ["alice@x.com", "carol@x.com"]);
//!
//! assert!(matches!(field.select_suggestion(1), Outcome::Committed(_)));
//! assert_eq!(field.tags().texts(), ["carol@x.com"]);
//! # Ok::<(), recipients::candidates::CandidateError>(())
//! ```

use thiserror::Error;

pub mod candidates;
pub mod cli;
pub mod composer;
pub mod config;
pub mod email;
pub mod suggest;
pub mod tags;
pub mod ui;
pub mod validation;

pub use email::Email;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RecipientsError {
    /// Candidate list could not be loaded
    #[error("Candidate error: {0}")]
    CandidateError(#[from] candidates::CandidateError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Some addresses failed validation
    #[error("{0} invalid address(es)")]
    InvalidAddresses(usize),
}

/// Result type for the application
pub type Result<T> = std::result::Result<T, RecipientsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: RecipientsError = ::config::ConfigError::NotFound("theme".into()).into();
        assert!(matches!(err, RecipientsError::ConfigError(_)));

        let err: RecipientsError = std::io::Error::other("disk").into();
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_invalid_addresses_message() {
        assert_eq!(
            RecipientsError::InvalidAddresses(2).to_string(),
            "2 invalid address(es)"
        );
    }
}
