//! Draft and suggestion controller
//!
//! [`Composer`] owns everything the recipient field shows: the committed
//! tags, the draft being typed, the derived suggestion list, and the
//! transient visibility, focus and hover flags.
//!
//! The input is either [`Visibility::Collapsed`] (only the tags are shown) or
//! [`Visibility::Expanded`] (the input line and suggestion panel are shown
//! and the input has focus):
//!
//! ```text
//!             activate
//!  Collapsed ──────────▶ Expanded ──┐ blur while hovering
//!      ▲                    │  ▲────┘ the suggestion panel
//!      └────────────────────┘
//!   commit (key or suggestion click),
//!   blur while not hovering
//! ```
//!
//! Leaving `Expanded` always clears the draft. Suggestions are recomputed
//! eagerly after every draft change, tag change, or expansion.
//!
//! The controller knows nothing about terminals; the ratatui adapter turns
//! key, mouse and focus events into calls on this type.

use crate::candidates::CandidateList;
use crate::email::Email;
use crate::suggest::suggest;
use crate::tags::TagStore;
use tracing::debug;

/// Whether the input line and suggestion panel are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Input hidden, only tags (or the empty-state hint) are shown
    #[default]
    Collapsed,
    /// Input and suggestion panel shown, input focused
    Expanded,
}

/// What an event did to the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// The input was revealed and focused
    Expanded,
    /// The input was hidden and the draft cleared
    Collapsed,
    /// Blur arrived while the pointer was over the suggestion panel
    BlurSuppressed,
    /// The draft text changed
    DraftChanged,
    /// The draft cursor moved without changing the text
    CursorMoved,
    /// The keyboard highlight over the suggestions moved
    HighlightChanged,
    /// The hover flag over the suggestion panel changed
    HoverChanged(bool),
    /// A new tag was committed (the input collapsed)
    Committed(Email),
    /// A commit was attempted with empty or duplicate text (the input collapsed)
    Rejected(String),
    /// A tag was removed
    Removed(Email),
}

/// Recipient field state
#[derive(Debug, Clone)]
pub struct Composer {
    tags: TagStore,
    candidates: CandidateList,
    draft: String,
    /// Cursor position in the draft (character index, not byte)
    cursor: usize,
    visibility: Visibility,
    focused: bool,
    hovering_suggestions: bool,
    suggestions: Vec<Email>,
    /// Keyboard highlight; `None` means the draft itself is selected
    highlighted: Option<usize>,
}

impl Composer {
    /// Create a collapsed composer with no tags
    #[must_use]
    pub fn new(candidates: CandidateList) -> Self {
        Self {
            tags: TagStore::new(),
            candidates,
            draft: String::new(),
            cursor: 0,
            visibility: Visibility::Collapsed,
            focused: false,
            hovering_suggestions: false,
            suggestions: Vec::new(),
            highlighted: None,
        }
    }

    /// Commit initial tags before the field is shown
    #[must_use]
    pub fn with_tags<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.tags.commit(text.as_ref());
        }
        self.recompute();
        self
    }

    #[must_use]
    pub const fn tags(&self) -> &TagStore {
        &self.tags
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Cursor position in the draft, in characters
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.visibility == Visibility::Expanded
    }

    /// Whether the input currently holds keyboard focus
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub const fn is_hovering_suggestions(&self) -> bool {
        self.hovering_suggestions
    }

    /// Current suggestions (always empty while collapsed)
    #[must_use]
    pub fn suggestions(&self) -> &[Email] {
        &self.suggestions
    }

    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Consume the composer, returning the committed tags
    #[must_use]
    pub fn into_tags(self) -> TagStore {
        self.tags
    }

    /// Container activation: reveal and focus the input
    pub fn activate(&mut self) -> Outcome {
        if self.is_expanded() {
            self.focused = true;
            return Outcome::Ignored;
        }
        self.visibility = Visibility::Expanded;
        self.focused = true;
        self.recompute();
        debug!(suggestions = self.suggestions.len(), "input expanded");
        Outcome::Expanded
    }

    /// The input lost focus
    ///
    /// Ignored while the pointer is over the suggestion panel so that a click
    /// on a suggestion is not pre-empted by the blur it causes.
    pub fn blur(&mut self) -> Outcome {
        if !self.is_expanded() {
            return Outcome::Ignored;
        }
        if self.hovering_suggestions {
            debug!("blur suppressed while hovering suggestions");
            return Outcome::BlurSuppressed;
        }
        self.collapse();
        Outcome::Collapsed
    }

    /// Commit the draft as a tag (Enter / Tab)
    pub fn commit_draft(&mut self) -> Outcome {
        if !self.is_expanded() {
            return Outcome::Ignored;
        }
        let text = std::mem::take(&mut self.draft);
        self.commit_text(text)
    }

    /// Commit the suggestion at `index` as a tag (suggestion click)
    pub fn select_suggestion(&mut self, index: usize) -> Outcome {
        if !self.is_expanded() {
            return Outcome::Ignored;
        }
        let Some(selected) = self.suggestions.get(index) else {
            return Outcome::Ignored;
        };
        let text = selected.text.clone();
        self.commit_text(text)
    }

    /// Enter: commit the highlighted suggestion if any, otherwise the draft
    pub fn commit_highlighted_or_draft(&mut self) -> Outcome {
        match self.highlighted {
            Some(index) => self.select_suggestion(index),
            None => self.commit_draft(),
        }
    }

    /// Remove the tag with this text (tag delete affordance)
    pub fn remove_tag(&mut self, text: &str) -> Outcome {
        match self.tags.remove(text) {
            Some(removed) => {
                self.recompute();
                Outcome::Removed(removed)
            }
            None => Outcome::Ignored,
        }
    }

    /// Remove the most recently committed tag
    pub fn remove_last_tag(&mut self) -> Outcome {
        match self.tags.pop() {
            Some(removed) => {
                self.recompute();
                Outcome::Removed(removed)
            }
            None => Outcome::Ignored,
        }
    }

    /// The pointer entered the suggestion panel
    pub fn pointer_enter_suggestions(&mut self) -> Outcome {
        self.set_hover(true)
    }

    /// The pointer left the suggestion panel
    pub fn pointer_leave_suggestions(&mut self) -> Outcome {
        self.set_hover(false)
    }

    fn set_hover(&mut self, hovering: bool) -> Outcome {
        if self.hovering_suggestions == hovering {
            return Outcome::Ignored;
        }
        self.hovering_suggestions = hovering;
        Outcome::HoverChanged(hovering)
    }

    /// Replace the whole draft, placing the cursor at the end
    pub fn set_draft(&mut self, text: impl Into<String>) -> Outcome {
        if !self.is_expanded() {
            return Outcome::Ignored;
        }
        self.draft = text.into();
        self.cursor = self.draft.chars().count();
        self.draft_changed()
    }

    /// Insert a character at the cursor
    pub fn input_char(&mut self, c: char) -> Outcome {
        if !self.is_expanded() {
            return Outcome::Ignored;
        }
        let byte_idx = self.byte_index();
        self.draft.insert(byte_idx, c);
        self.cursor += 1;
        self.draft_changed()
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> Outcome {
        if !self.is_expanded() || self.cursor == 0 {
            return Outcome::Ignored;
        }
        let byte_idx = self.byte_index();
        let prev_byte_idx = self.draft[..byte_idx]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.draft.remove(prev_byte_idx);
        self.cursor -= 1;
        self.draft_changed()
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) -> Outcome {
        if !self.is_expanded() {
            return Outcome::Ignored;
        }
        let byte_idx = self.byte_index();
        if byte_idx >= self.draft.len() {
            return Outcome::Ignored;
        }
        self.draft.remove(byte_idx);
        self.draft_changed()
    }

    /// Delete the word before the cursor (Ctrl+W)
    pub fn delete_word_backwards(&mut self) -> Outcome {
        if !self.is_expanded() || self.cursor == 0 {
            return Outcome::Ignored;
        }
        let byte_idx = self.byte_index();
        let trimmed = self.draft[..byte_idx].trim_end();
        let new_end = trimmed
            .char_indices()
            .rev()
            .find(|&(_, c)| c.is_whitespace() || c == ',' || c == ';')
            .map_or(0, |(i, c)| i + c.len_utf8());

        self.draft.drain(new_end..byte_idx);
        self.cursor = self.draft[..new_end].chars().count();
        self.draft_changed()
    }

    /// Clear the whole draft (Ctrl+U)
    pub fn clear_line(&mut self) -> Outcome {
        if !self.is_expanded() || self.draft.is_empty() {
            return Outcome::Ignored;
        }
        self.draft.clear();
        self.cursor = 0;
        self.draft_changed()
    }

    pub fn cursor_left(&mut self) -> Outcome {
        if self.cursor == 0 {
            return Outcome::Ignored;
        }
        self.cursor -= 1;
        Outcome::CursorMoved
    }

    pub fn cursor_right(&mut self) -> Outcome {
        if self.cursor >= self.draft.chars().count() {
            return Outcome::Ignored;
        }
        self.cursor += 1;
        Outcome::CursorMoved
    }

    pub fn cursor_home(&mut self) -> Outcome {
        if self.cursor == 0 {
            return Outcome::Ignored;
        }
        self.cursor = 0;
        Outcome::CursorMoved
    }

    pub fn cursor_end(&mut self) -> Outcome {
        let end = self.draft.chars().count();
        if self.cursor == end {
            return Outcome::Ignored;
        }
        self.cursor = end;
        Outcome::CursorMoved
    }

    /// Move the highlight up; above the first suggestion it returns to the draft
    pub fn suggestion_up(&mut self) -> Outcome {
        if self.suggestions.is_empty() {
            return Outcome::Ignored;
        }
        self.highlighted = match self.highlighted {
            None => Some(self.suggestions.len() - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        };
        Outcome::HighlightChanged
    }

    /// Move the highlight down; past the last suggestion it returns to the draft
    pub fn suggestion_down(&mut self) -> Outcome {
        if self.suggestions.is_empty() {
            return Outcome::Ignored;
        }
        self.highlighted = match self.highlighted {
            None => Some(0),
            Some(i) if i + 1 < self.suggestions.len() => Some(i + 1),
            Some(_) => None,
        };
        Outcome::HighlightChanged
    }

    fn commit_text(&mut self, text: String) -> Outcome {
        let committed = self.tags.commit(&text);
        self.collapse();
        if committed {
            self.tags
                .entries()
                .last()
                .cloned()
                .map_or(Outcome::Rejected(text), Outcome::Committed)
        } else {
            Outcome::Rejected(text)
        }
    }

    fn collapse(&mut self) {
        self.visibility = Visibility::Collapsed;
        self.focused = false;
        self.draft.clear();
        self.cursor = 0;
        self.highlighted = None;
        // the suggestion panel is gone, so the pointer cannot be over it
        self.hovering_suggestions = false;
        self.recompute();
        debug!("input collapsed");
    }

    fn draft_changed(&mut self) -> Outcome {
        self.highlighted = None;
        self.recompute();
        Outcome::DraftChanged
    }

    fn recompute(&mut self) {
        self.suggestions = suggest(
            &self.draft,
            &self.tags,
            self.candidates.as_slice(),
            self.visibility,
        );
        if self.highlighted.is_some_and(|i| i >= self.suggestions.len()) {
            self.highlighted = None;
        }
    }

    /// Byte index of the cursor in the draft
    fn byte_index(&self) -> usize {
        self.draft
            .char_indices()
            .nth(self.cursor)
            .map_or(self.draft.len(), |(i, _)| i)
    }
}
