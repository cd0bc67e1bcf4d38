//! Email address format check
//!
//! A single pure predicate used when a recipient is committed. The result is
//! frozen onto the entry and never recomputed; it only marks a tag, it never
//! blocks the commit.

use regex::Regex;
use std::sync::LazyLock;

/// One address: `local@domain.tld`, no whitespace, exactly one `@`,
/// and at least one dot in the domain with labels on both sides of it.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@(?:[^\s@.]+\.)+[^\s@.]+$").expect("email regex is valid")
});

/// Check whether `text` looks like a single email address
///
/// # Examples
///
/// ```
/// use recipients::validation::validate_email;
///
/// assert!(validate_email("user@test.com"));
/// assert!(!validate_email("not-an-email"));
/// ```
#[must_use]
pub fn validate_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}
