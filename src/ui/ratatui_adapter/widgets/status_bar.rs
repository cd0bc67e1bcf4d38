//! Status bar widget for displaying messages

use crate::ui::output::{MessageLevel, StatusMessage};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing the latest message and a recipient count
pub struct StatusBar<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
    total: usize,
    invalid: usize,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self {
            message,
            theme,
            total: 0,
            invalid: 0,
        }
    }

    /// Show the number of recipients and how many failed validation
    #[must_use]
    pub const fn with_counts(mut self, total: usize, invalid: usize) -> Self {
        self.total = total;
        self.invalid = invalid;
        self
    }

    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => Style::default(),
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }

    fn counts_line(&self) -> Line<'static> {
        let noun = if self.total == 1 { "recipient" } else { "recipients" };
        let mut spans = vec![Span::styled(
            format!("{} {noun}", self.total),
            self.theme.dimmed_style(),
        )];
        if self.invalid > 0 {
            spans.push(Span::styled(
                format!(", {} invalid", self.invalid),
                self.theme.error_style(),
            ));
        }
        Line::from(spans).right_aligned()
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false))
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let counts = self.counts_line();
        let counts_width = u16::try_from(counts.width()).unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(counts_width)])
                .spacing(1)
                .areas(inner);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(counts).render(right, buf);
    }
}
