//! Suggestion derivation
//!
//! Suggestions are never stored as a source of truth. They are a pure
//! function of the draft, the committed tags, the candidate list and the
//! input visibility, recomputed whenever any of those change.

use crate::composer::Visibility;
use crate::email::Email;
use crate::tags::TagStore;

/// Maximum number of suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 20;

/// Compute the suggestion list
///
/// Keeps candidates whose text contains `draft` (case-sensitive substring)
/// and is not already a tag, sorts them by upper-cased text, and returns at
/// most [`MAX_SUGGESTIONS`]. A collapsed input has no suggestions.
///
/// # Examples
///
/// ```
/// use recipients::composer::Visibility;
/// use recipients::email::Email;
/// use recipients::suggest::suggest;
/// use recipients::tags::TagStore;
///
/// let candidates = vec![
///     Email::new("alice@x.com"),
///     Email::new("bob@x.com"),
///     Email::new("carol@x.com"),
/// ];
/// let found = suggest("a", &TagStore::new(), &candidates, Visibility::Expanded);
/// let texts: Vec<_> = found.iter().map(|e| e.text.as_str()).collect();
/// assert_eq!(texts, ["alice@x.com", "carol@x.com"]);
/// ```
#[must_use]
pub fn suggest(
    draft: &str,
    tags: &TagStore,
    candidates: &[Email],
    visibility: Visibility,
) -> Vec<Email> {
    if visibility == Visibility::Collapsed {
        return Vec::new();
    }

    let mut matches: Vec<Email> = candidates
        .iter()
        .filter(|candidate| candidate.text.contains(draft))
        .filter(|candidate| !tags.contains(&candidate.text))
        .cloned()
        .collect();

    matches.sort_by_cached_key(|candidate| candidate.text.to_uppercase());
    matches.truncate(MAX_SUGGESTIONS);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emails(texts: &[&str]) -> Vec<Email> {
        texts.iter().map(|t| Email::new(*t)).collect()
    }

    fn texts(found: &[Email]) -> Vec<&str> {
        found.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_substring_filter_and_sort() {
        let candidates = emails(&["carol@x.com", "bob@x.com", "alice@x.com"]);
        let found = suggest("a", &TagStore::new(), &candidates, Visibility::Expanded);
        assert_eq!(texts(&found), vec!["alice@x.com", "carol@x.com"]);
    }

    #[test]
    fn test_excludes_committed_tags() {
        let candidates = emails(&["a@x.com", "ab@x.com"]);
        let mut tags = TagStore::new();
        tags.commit("a@x.com");

        let found = suggest("a", &tags, &candidates, Visibility::Expanded);
        assert_eq!(texts(&found), vec!["ab@x.com"]);
    }

    #[test]
    fn test_collapsed_has_no_suggestions() {
        let candidates = emails(&["alice@x.com"]);
        let found = suggest("", &TagStore::new(), &candidates, Visibility::Collapsed);
        assert!(found.is_empty());
    }

    #[test]
    fn test_empty_draft_matches_everything() {
        let candidates = emails(&["b@x.com", "a@x.com"]);
        let found = suggest("", &TagStore::new(), &candidates, Visibility::Expanded);
        assert_eq!(texts(&found), vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let candidates = emails(&["Alice@x.com", "alice@y.com"]);
        let found = suggest("Ali", &TagStore::new(), &candidates, Visibility::Expanded);
        assert_eq!(texts(&found), vec!["Alice@x.com"]);
    }

    #[test]
    fn test_sort_ignores_case() {
        let candidates = emails(&["bob@x.com", "Carol@x.com", "alice@x.com", "Bea@x.com"]);
        let found = suggest("@", &TagStore::new(), &candidates, Visibility::Expanded);
        assert_eq!(
            texts(&found),
            vec!["alice@x.com", "Bea@x.com", "bob@x.com", "Carol@x.com"]
        );
        for pair in found.windows(2) {
            assert!(pair[0].text.to_uppercase() <= pair[1].text.to_uppercase());
        }
    }

    #[test]
    fn test_truncates_to_max() {
        let candidates: Vec<Email> = (0..50)
            .map(|i| Email::new(format!("user{i:02}@x.com")))
            .collect();
        let found = suggest("user", &TagStore::new(), &candidates, Visibility::Expanded);

        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(found[0].text, "user00@x.com");
        assert_eq!(found[MAX_SUGGESTIONS - 1].text, "user19@x.com");
    }

    #[test]
    fn test_truncation_happens_after_exclusion() {
        let candidates: Vec<Email> = (0..25)
            .map(|i| Email::new(format!("user{i:02}@x.com")))
            .collect();
        let mut tags = TagStore::new();
        for i in 0..5 {
            tags.commit(&format!("user{i:02}@x.com"));
        }

        let found = suggest("user", &tags, &candidates, Visibility::Expanded);
        assert_eq!(found.len(), MAX_SUGGESTIONS);
        assert_eq!(found[0].text, "user05@x.com");
        assert!(found.iter().all(|e| !tags.contains(&e.text)));
    }
}
