//! Help overlay widget for displaying the full keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let [_, middle, _] = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .areas(area);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .areas(middle);
        center
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            title,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.section("  Recipients"),
            Line::default(),
            help_line("  Enter / click", "Open the input"),
            help_line("  Type", "Start a new recipient"),
            help_line("  Bksp / Del", "Remove the last recipient"),
            help_line("  Click chip", "Remove that recipient"),
            help_line("  q / Esc", "Finish"),
            Line::default(),
            self.section("  Input"),
            Line::default(),
            help_line("  Enter", "Add highlighted or typed"),
            help_line("  Tab", "Add typed text"),
            help_line("  ↑/↓ / wheel", "Move through suggestions"),
            help_line("  Click", "Add a suggestion"),
            help_line("  ←/→ Home/End", "Move cursor"),
            help_line("  Ctrl+W", "Delete word"),
            help_line("  Ctrl+U", "Clear input"),
            help_line("  Esc", "Close input, drop draft"),
            Line::default(),
            Line::styled("  Invalid addresses are marked with !", self.theme.error_style()),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
            Line::default(),
        ]
    }
}

fn help_line(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<16}"), Style::default().fg(Color::Cyan)),
        Span::raw(desc),
    ])
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(70, 80, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content())
            .block(block)
            .render(popup_area, buf);
    }
}
