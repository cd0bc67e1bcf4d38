//! Ratatui-based recipient field
//!
//! Renders a [`Composer`](crate::composer::Composer) full-screen and feeds
//! it terminal events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             RecipientSession                 │
//! │    (TerminalGuard, draw/event loop)          │
//! └──────────────────────┬───────────────────────┘
//!                        │
//!        ┌───────────────┼───────────────┐
//!        ▼               ▼               ▼
//! ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//! │   events    │ │   layout    │ │   widgets   │
//! │ (crossterm) │ │ (hit-tests) │ │  (ratatui)  │
//! └──────┬──────┘ └─────────────┘ └─────────────┘
//!        ▼
//!    Composer
//! ```
//!
//! Each frame lays the field out once; the layout is kept in [`AppState`]
//! so the next mouse event can be resolved to a chip, the input line or a
//! suggestion row.

mod events;
mod layout;
mod session;
mod state;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_event, handle_key, handle_mouse};
pub use layout::{FieldLayout, Hit, PLACEHOLDER, ScreenLayout};
pub use session::{RecipientSession, render};
pub use state::{AppState, Mode};
pub use theme::Theme;
