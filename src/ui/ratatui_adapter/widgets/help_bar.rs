//! Help bar widget for displaying keybind hints

use crate::composer::Visibility;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key combination (e.g., "Enter", "ctrl+w")
    pub key: &'static str,
    /// Action description (e.g., "add", "remove last")
    pub action: &'static str,
}

impl KeyHint {
    #[must_use]
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Hints for the current input visibility
#[must_use]
pub fn hints_for(visibility: Visibility) -> &'static [KeyHint] {
    const COLLAPSED: &[KeyHint] = &[
        KeyHint::new("Enter", "add"),
        KeyHint::new("Bksp", "remove last"),
        KeyHint::new("click ×", "remove"),
        KeyHint::new("?", "help"),
        KeyHint::new("q", "done"),
    ];
    const EXPANDED: &[KeyHint] = &[
        KeyHint::new("Enter", "commit"),
        KeyHint::new("↑↓", "suggestions"),
        KeyHint::new("Tab", "commit typed"),
        KeyHint::new("Esc", "cancel"),
    ];
    match visibility {
        Visibility::Collapsed => COLLAPSED,
        Visibility::Expanded => EXPANDED,
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key, self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
