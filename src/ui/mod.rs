//! Terminal user interface
//!
//! - [`ratatui_adapter`] draws the recipient field and handles key, mouse and
//!   focus events.
//! - [`output`] carries user-facing messages, either to stdout for the
//!   non-interactive commands or to the status bar of the field.
//!
//! # Output Messages
//!
//! ```
//! use recipients::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("2 valid addresses");
//! output.warning("1 invalid address");
//! ```
//!
//! # Running the Field
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use recipients::candidates::CandidateList;
//! use recipients::composer::Composer;
//! use recipients::ui::ratatui_adapter::{RecipientSession, Theme};
//!
//! let composer = Composer::new(CandidateList::bundled()?);
//! let tags = RecipientSession::new(Theme::dark()).run(composer)?;
//! for email in &tags {
//!     println!("{email}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StatusBarWriter, StdoutWriter};
