//! Color theme definitions for the recipient field

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Background color for the highlighted suggestion
    pub selection_bg: Color,
    /// Foreground color for the highlighted suggestion
    pub selection_fg: Color,
    /// Color for the input prompt
    pub cursor: Color,
    /// Chip background for valid addresses
    pub chip_bg: Color,
    /// Chip foreground for valid addresses
    pub chip_fg: Color,
    /// Chip background for addresses that failed validation
    pub invalid_chip_bg: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Border color while the input is focused
    pub focus_border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            chip_bg: Color::DarkGray,
            chip_fg: Color::White,
            invalid_chip_bg: Color::Red,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            focus_border: Color::Cyan,
            dimmed: Color::DarkGray,
        }
    }

    /// Create a light theme for bright terminal backgrounds
    #[must_use]
    pub const fn light() -> Self {
        Self {
            selection_bg: Color::LightBlue,
            selection_fg: Color::Black,
            cursor: Color::Blue,
            chip_bg: Color::Gray,
            chip_fg: Color::Black,
            invalid_chip_bg: Color::LightRed,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Magenta,
            info: Color::Blue,
            border: Color::Gray,
            focus_border: Color::Blue,
            dimmed: Color::Gray,
        }
    }

    /// Style for the highlighted suggestion
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the input prompt (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the character under the text cursor
    #[must_use]
    pub fn text_cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Style for a committed tag, marked when the address is invalid
    #[must_use]
    pub fn chip_style(&self, is_valid: bool) -> Style {
        if is_valid {
            Style::default().bg(self.chip_bg).fg(self.chip_fg)
        } else {
            Style::default()
                .bg(self.invalid_chip_bg)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Style for the empty-state placeholder
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.dimmed)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus_border)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
