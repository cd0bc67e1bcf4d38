//! Ratatui widgets for the recipient field TUI

mod help_bar;
mod help_overlay;
mod recipient_field;
mod status_bar;

pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use help_overlay::HelpOverlay;
pub use recipient_field::RecipientField;
pub use status_bar::StatusBar;
