//! Event handling for the recipient field
//!
//! Maps crossterm key, mouse and focus events onto [`Composer`] events.
//! Mouse positions are resolved against the layout of the last frame.
//!
//! [`Composer`]: crate::composer::Composer

use super::layout::Hit;
use super::state::{AppState, Mode};
use crate::composer::Outcome;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tracing::debug;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// End the session, keeping the committed recipients
    Quit,
    /// No action taken
    Ignored,
}

impl From<&Outcome> for EventResult {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Ignored => Self::Ignored,
            _ => Self::Continue,
        }
    }
}

/// Apply a composer outcome: report it and turn it into an event result
fn apply(state: &AppState, outcome: &Outcome) -> EventResult {
    state.record(outcome);
    EventResult::from(outcome)
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_exit = true;
        return EventResult::Quit;
    }

    if state.mode == Mode::Help {
        state.mode = Mode::Normal;
        return EventResult::Continue;
    }

    if state.composer.is_expanded() {
        handle_expanded_key(state, key)
    } else {
        handle_collapsed_key(state, key)
    }
}

/// Keys while only the tags are shown
fn handle_collapsed_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    let outcome = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_exit = true;
            return EventResult::Quit;
        }
        KeyCode::F(1) | KeyCode::Char('?') => {
            state.toggle_help();
            return EventResult::Continue;
        }
        KeyCode::Enter => state.composer.activate(),
        KeyCode::Backspace | KeyCode::Delete => state.composer.remove_last_tag(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.composer.activate();
            state.composer.input_char(c)
        }
        _ => Outcome::Ignored,
    };
    apply(state, &outcome)
}

/// Keys while the input line has focus
fn handle_expanded_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    let composer = &mut state.composer;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let outcome = match key.code {
        KeyCode::Esc => composer.blur(),
        KeyCode::Enter => composer.commit_highlighted_or_draft(),
        KeyCode::Tab => composer.commit_draft(),
        KeyCode::Up => composer.suggestion_up(),
        KeyCode::Down => composer.suggestion_down(),
        KeyCode::Backspace => composer.backspace(),
        KeyCode::Delete => composer.delete(),
        KeyCode::Left => composer.cursor_left(),
        KeyCode::Right => composer.cursor_right(),
        KeyCode::Home => composer.cursor_home(),
        KeyCode::End => composer.cursor_end(),
        KeyCode::Char('a') if ctrl => composer.cursor_home(),
        KeyCode::Char('e') if ctrl => composer.cursor_end(),
        KeyCode::Char('w') if ctrl => composer.delete_word_backwards(),
        KeyCode::Char('u') if ctrl => composer.clear_line(),
        KeyCode::Char('n') if ctrl => composer.suggestion_down(),
        KeyCode::Char('p') if ctrl => composer.suggestion_up(),
        KeyCode::Char(c) if !ctrl => composer.input_char(c),
        _ => Outcome::Ignored,
    };
    apply(state, &outcome)
}

/// Handle a mouse event
///
/// A left click first updates the hover flag from the click position, then
/// blurs the input if the click is outside the input line, and finally acts
/// on what was clicked. A blur suppressed by the hover flag is what lets a
/// suggestion click through.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    if state.mode == Mode::Help {
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            state.mode = Mode::Normal;
            return EventResult::Continue;
        }
        return EventResult::Ignored;
    }

    state.pointer = Some((mouse.column, mouse.row));
    let hit = state.layout.hit(mouse.column, mouse.row);
    let over_panel = state.layout.is_over_panel(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let outcome = update_hover(state, over_panel);
            apply(state, &outcome)
        }
        MouseEventKind::ScrollDown if over_panel => {
            let outcome = state.composer.suggestion_down();
            apply(state, &outcome)
        }
        MouseEventKind::ScrollUp if over_panel => {
            let outcome = state.composer.suggestion_up();
            apply(state, &outcome)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            update_hover(state, over_panel);
            let mut result = EventResult::Ignored;
            if state.composer.is_expanded() && hit != Hit::Input {
                let outcome = state.composer.blur();
                result = apply(state, &outcome);
            }
            debug!(?hit, "click");
            let outcome = match hit {
                Hit::Suggestion(index) => state.composer.select_suggestion(index),
                Hit::Chip(text) => state.composer.remove_tag(&text),
                Hit::Input | Hit::Container => state.composer.activate(),
                Hit::Panel | Hit::Outside => Outcome::Ignored,
            };
            match apply(state, &outcome) {
                EventResult::Ignored => result,
                other => other,
            }
        }
        _ => EventResult::Ignored,
    }
}

fn update_hover(state: &mut AppState, over_panel: bool) -> Outcome {
    if over_panel {
        state.composer.pointer_enter_suggestions()
    } else {
        state.composer.pointer_leave_suggestions()
    }
}

/// Handle any terminal event
pub fn handle_event(state: &mut AppState, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::FocusLost => {
            let outcome = state.composer.blur();
            apply(state, &outcome)
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for an event and handle it
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if event::poll(timeout)? {
        let event = event::read()?;
        Ok(handle_event(state, event))
    } else {
        Ok(EventResult::Ignored)
    }
}
