//! Interactive session: terminal setup, the draw/event loop and rendering
//!
//! The terminal is drawn on stderr so that stdout stays free for the
//! recipients printed when the session ends.

use super::events::{EventResult, poll_and_handle};
use super::layout::{FieldLayout, MIN_HEIGHT, MIN_WIDTH, ScreenLayout};
use super::state::{AppState, Mode};
use super::theme::Theme;
use super::widgets::{HelpBar, HelpOverlay, RecipientField, StatusBar, hints_for};
use crate::composer::Composer;
use crate::tags::TagStore;
use crate::ui::error::{Result, UiError};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        size as terminal_size,
    },
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stderr};
use std::time::Duration;
use tracing::{debug, info};

/// Restores the terminal when dropped, including on panic
struct TerminalGuard {
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, enable mouse and focus reporting
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            raw_mode_enabled: true,
            alternate_screen_enabled: false,
        };
        execute!(
            io::stderr(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        guard.alternate_screen_enabled = true;
        Ok(guard)
    }

    /// Restore terminal state; the guard does nothing on drop afterwards
    fn restore(&mut self) -> Result<()> {
        if self.alternate_screen_enabled {
            execute!(
                io::stderr(),
                DisableFocusChange,
                DisableMouseCapture,
                LeaveAlternateScreen
            )?;
            self.alternate_screen_enabled = false;
        }
        if self.raw_mode_enabled {
            disable_raw_mode()?;
            self.raw_mode_enabled = false;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored, we're already in a cleanup path
        if self.alternate_screen_enabled {
            let _ = execute!(
                io::stderr(),
                DisableFocusChange,
                DisableMouseCapture,
                LeaveAlternateScreen
            );
        }
        if self.raw_mode_enabled {
            let _ = disable_raw_mode();
        }
    }
}

/// Runs the recipient field full-screen until the user finishes
#[derive(Debug, Clone)]
pub struct RecipientSession {
    theme: Theme,
    message_ttl: Duration,
    tick: Duration,
}

impl Default for RecipientSession {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl RecipientSession {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self {
            theme,
            message_ttl: Duration::from_secs(5),
            tick: Duration::from_millis(250),
        }
    }

    /// How long status messages stay visible
    #[must_use]
    pub const fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    /// Run the session, returning the committed tags
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalTooSmall` before touching the terminal if it
    /// can't fit the field, or `UiError::IoError` if terminal IO fails.
    pub fn run(&self, composer: Composer) -> Result<TagStore> {
        let (width, height) = terminal_size()?;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(UiError::TerminalTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        let mut guard = TerminalGuard::new()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
        let mut state = AppState::with_message_ttl(composer, self.message_ttl);

        let result = self.run_loop(&mut terminal, &mut state);
        guard.restore()?;
        result?;

        let tags = state.composer.into_tags();
        info!(count = tags.len(), "session finished");
        Ok(tags)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        state: &mut AppState,
    ) -> Result<()> {
        while !state.should_exit {
            terminal.draw(|frame| render(frame, state, &self.theme))?;
            if poll_and_handle(state, self.tick)? == EventResult::Quit {
                debug!("quit requested");
                break;
            }
        }
        Ok(())
    }
}

/// Render the whole screen, storing the field layout for hit-testing
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let screen = ScreenLayout::split(frame.area());
    state.set_layout(FieldLayout::compute(screen.field, &state.composer));

    frame.render_widget(
        RecipientField::new(&state.composer, &state.layout, theme),
        screen.field,
    );

    let latest = state.status.latest_message();
    frame.render_widget(
        StatusBar::new(latest.as_ref(), theme)
            .with_counts(state.composer.tags().len(), state.invalid_count()),
        screen.status,
    );

    frame.render_widget(
        HelpBar::new(hints_for(state.composer.visibility()), theme),
        screen.hints,
    );

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(theme), frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::Email;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn state() -> AppState {
        AppState::new(Composer::new(
            ["alice@x.com", "bob@x.com"].into_iter().map(Email::new).collect(),
        ))
    }

    #[test]
    fn test_draw_stores_layout() {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut state = state();
        state.composer.activate();

        terminal.draw(|frame| render(frame, &mut state, &theme)).unwrap();

        assert_eq!(state.layout.container, Rect::new(0, 0, 60, 16));
        assert!(state.layout.input.is_some());
        assert_eq!(state.layout.suggestion_rows.len(), 2);
    }

    #[test]
    fn test_draw_full_screen() {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut state = state();
        state.composer.activate();
        let outcome = state.composer.select_suggestion(0);
        state.record(&outcome);

        terminal.draw(|frame| render(frame, &mut state, &theme)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("alice@x.com ×"));
        assert!(text.contains("✓ Added alice@x.com"));
        assert!(text.contains("1 recipient"));
        assert!(text.contains("Enter:add"));
    }

    #[test]
    fn test_draw_help_overlay() {
        let theme = Theme::dark();
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        let mut state = state();
        state.toggle_help();

        terminal.draw(|frame| render(frame, &mut state, &theme)).unwrap();
        assert!(screen_text(&terminal).contains("Press any key to close"));
    }
}
