//! Application state for the recipient field TUI
//!
//! Wraps the [`Composer`] with the pieces that only exist on screen: the
//! UI mode, the status bar messages and the layout of the last frame.

use crate::composer::{Composer, Outcome};
use crate::ui::output::{OutputWriter, StatusBarWriter};
use crate::ui::ratatui_adapter::layout::FieldLayout;
use std::time::Duration;
use tracing::debug;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Editing recipients
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub composer: Composer,
    pub mode: Mode,
    /// Status bar messages
    pub status: StatusBarWriter,
    /// Layout of the last rendered frame, used for mouse hit-testing
    pub layout: FieldLayout,
    /// Last known mouse position
    pub pointer: Option<(u16, u16)>,
    pub should_exit: bool,
}

impl AppState {
    /// Create state with the default message TTL (5 seconds)
    #[must_use]
    pub fn new(composer: Composer) -> Self {
        Self::with_message_ttl(composer, Duration::from_secs(5))
    }

    #[must_use]
    pub fn with_message_ttl(composer: Composer, ttl: Duration) -> Self {
        Self {
            composer,
            mode: Mode::Normal,
            status: StatusBarWriter::with_ttl(ttl),
            layout: FieldLayout::default(),
            pointer: None,
            should_exit: false,
        }
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    /// Store the layout of a new frame
    ///
    /// The suggestion panel can shrink or move without the mouse moving, so
    /// the hover flag is cleared when the last pointer position is no longer
    /// over it.
    pub fn set_layout(&mut self, layout: FieldLayout) {
        self.layout = layout;
        let over_panel = self
            .pointer
            .is_some_and(|(column, row)| self.layout.is_over_panel(column, row));
        if !over_panel {
            self.composer.pointer_leave_suggestions();
        }
    }

    /// Report what an event did on the status bar
    pub fn record(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Committed(email) if email.is_valid => {
                self.status.success(&format!("Added {email}"));
            }
            Outcome::Committed(email) => {
                self.status
                    .warning(&format!("Added {email} (not a valid email address)"));
            }
            Outcome::Rejected(text) if !text.is_empty() => {
                self.status.info(&format!("Already added: {text}"));
            }
            Outcome::Removed(email) => {
                self.status.info(&format!("Removed {email}"));
            }
            Outcome::BlurSuppressed => {
                debug!("blur ignored, pointer over suggestions");
            }
            _ => {}
        }
    }

    /// Number of committed recipients that failed validation
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.composer.tags().invalid_count()
    }
}
