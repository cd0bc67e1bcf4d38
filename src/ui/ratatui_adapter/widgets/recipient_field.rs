//! Recipient field widget
//!
//! Draws the bordered field: committed tags as chips, the empty-state
//! placeholder, and while expanded the input line with its suggestion panel.
//! Positions come from the precomputed [`FieldLayout`].

use crate::composer::Composer;
use crate::ui::ratatui_adapter::layout::{FieldLayout, PLACEHOLDER, chip_label};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

const PROMPT: &str = "> ";

/// The recipient field widget
pub struct RecipientField<'a> {
    composer: &'a Composer,
    layout: &'a FieldLayout,
    theme: &'a Theme,
}

impl<'a> RecipientField<'a> {
    #[must_use]
    pub const fn new(composer: &'a Composer, layout: &'a FieldLayout, theme: &'a Theme) -> Self {
        Self {
            composer,
            layout,
            theme,
        }
    }

    fn render_chips(&self, buf: &mut Buffer) {
        for chip in &self.layout.chips {
            buf.set_stringn(
                chip.area.x,
                chip.area.y,
                chip_label(&chip.text, chip.is_valid),
                usize::from(chip.area.width),
                self.theme.chip_style(chip.is_valid),
            );
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let draft: Vec<char> = self.composer.draft().chars().collect();
        let cursor = self.composer.cursor().min(draft.len());

        // Scroll so the cursor cell stays visible, measuring display columns
        let at = draft.get(cursor).map_or_else(|| " ".to_string(), char::to_string);
        let room = usize::from(area.width).saturating_sub(Span::raw(PROMPT).width());
        let mut used = Span::raw(at.as_str()).width();
        let mut skip = cursor;
        while skip > 0 {
            let width = Span::raw(draft[skip - 1].to_string()).width();
            if used + width > room {
                break;
            }
            used += width;
            skip -= 1;
        }

        let before: String = draft[skip..cursor].iter().collect();
        let after: String = draft.get(cursor + 1..).unwrap_or_default().iter().collect();

        Line::from(vec![
            Span::styled(PROMPT, self.theme.cursor_style()),
            Span::raw(before),
            Span::styled(at, self.theme.text_cursor_style()),
            Span::raw(after),
        ])
        .render(area, buf);
    }

    fn render_panel(&self, panel: Rect, buf: &mut Buffer) {
        let suggestions = self.composer.suggestions();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.composer.is_hovering_suggestions()))
            .title(format!(" Suggestions ({}) ", suggestions.len()));
        let inner = block.inner(panel);
        block.render(panel, buf);

        if suggestions.is_empty() {
            Line::styled("No matching addresses", self.theme.dimmed_style()).render(inner, buf);
            return;
        }

        for (row, index) in &self.layout.suggestion_rows {
            let Some(email) = suggestions.get(*index) else {
                continue;
            };
            let mut spans = vec![Span::raw(format!(" {}", email.text))];
            if !email.is_valid {
                spans.push(Span::styled(" !", self.theme.error_style()));
            }
            let line = Line::from(spans);
            if self.composer.highlighted() == Some(*index) {
                line.style(self.theme.selected_style()).render(*row, buf);
            } else {
                line.render(*row, buf);
            }
        }
    }
}

impl Widget for RecipientField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.composer.is_focused()))
            .title(" To ")
            .render(area, buf);

        self.render_chips(buf);

        if let Some(placeholder) = self.layout.placeholder {
            Line::styled(PLACEHOLDER, self.theme.placeholder_style()).render(placeholder, buf);
        }
        if let Some(input) = self.layout.input {
            self.render_input(input, buf);
        }
        if let Some(panel) = self.layout.panel {
            self.render_panel(panel, buf);
        }
    }
}
