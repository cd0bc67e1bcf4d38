//! Email entry model
//!
//! An [`Email`] is what a recipient tag holds: the raw text the user typed
//! (or picked) together with the validity flag computed when it was committed.

use crate::validation::validate_email;
use serde::{Deserialize, Serialize};

/// A recipient entry, either committed as a tag or offered as a candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email {
    /// Raw address text, never normalized
    pub text: String,
    /// Result of the format check at the time the entry was created
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

impl Email {
    /// Create an entry, running the format check on `text`
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_valid = validate_email(&text);
        Self { text, is_valid }
    }

    /// Create an entry with a known validity flag (e.g. from candidate data)
    #[must_use]
    pub fn with_validity(text: impl Into<String>, is_valid: bool) -> Self {
        Self {
            text: text.into(),
            is_valid,
        }
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(Email::new("user@test.com").is_valid);
        assert!(!Email::new("not-an-email").is_valid);
    }

    #[test]
    fn test_text_is_kept_raw() {
        let email = Email::new("Alice@X.com");
        assert_eq!(email.text, "Alice@X.com");
        assert_eq!(email.to_string(), "Alice@X.com");
    }

    #[test]
    fn test_serde_uses_is_valid_key() {
        let email = Email::with_validity("bob@x.com", true);
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, r#"{"text":"bob@x.com","isValid":true}"#);

        let back: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(back, email);
    }
}
