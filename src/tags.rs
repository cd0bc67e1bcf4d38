//! Committed recipient tags
//!
//! The tag store is the ordered list of entries the user has committed.
//! It only changes through [`TagStore::commit`] and [`TagStore::remove`],
//! and it never holds two entries with the same text or an empty entry.

use crate::email::Email;
use tracing::{debug, info};

/// Ordered, duplicate-free sequence of committed recipients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStore {
    entries: Vec<Email>,
}

impl TagStore {
    /// Create an empty tag store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Validate `text` and append it as a new tag
    ///
    /// Empty text and text already present (exact, case-sensitive match)
    /// are ignored. Returns `true` if the store changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipients::tags::TagStore;
    ///
    /// let mut tags = TagStore::new();
    /// assert!(tags.commit("user@test.com"));
    /// assert!(!tags.commit("user@test.com"));
    /// assert!(!tags.commit(""));
    /// assert_eq!(tags.len(), 1);
    /// ```
    pub fn commit(&mut self, text: &str) -> bool {
        if text.is_empty() {
            debug!("ignoring empty commit");
            return false;
        }
        if self.contains(text) {
            debug!(text, "ignoring duplicate commit");
            return false;
        }

        let email = Email::new(text);
        info!(text = %email.text, is_valid = email.is_valid, "recipient committed");
        self.entries.push(email);
        true
    }

    /// Remove the first entry whose text equals `text`
    ///
    /// Returns the removed entry, or `None` if no entry matched.
    pub fn remove(&mut self, text: &str) -> Option<Email> {
        let index = self.entries.iter().position(|e| e.text == text)?;
        let removed = self.entries.remove(index);
        info!(text = %removed.text, "recipient removed");
        Some(removed)
    }

    /// Remove the most recently committed entry
    pub fn pop(&mut self) -> Option<Email> {
        let removed = self.entries.pop()?;
        info!(text = %removed.text, "recipient removed");
        Some(removed)
    }

    /// Whether an entry with exactly this text exists
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e.text == text)
    }

    /// Entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[Email] {
        &self.entries
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Email> {
        self.entries.iter()
    }

    /// Texts of all entries in insertion order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that failed the format check
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_valid).count()
    }
}

impl<'a> IntoIterator for &'a TagStore {
    type Item = &'a Email;
    type IntoIter = std::slice::Iter<'a, Email>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
