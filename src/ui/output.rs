//! Output abstraction layer
//!
//! User-facing messages go through [`OutputWriter`] so the same code can
//! report to stdout (the `suggest` / `validate` / `config` commands) or to
//! the status bar of the interactive field.

use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use recipients::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("alice@example.com");
/// output.success("1 recipient added");
/// output.error("Not an email address: bob");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Clear all messages (for TUI status bars)
    fn clear(&self);
}

/// CLI implementation - writes to stdout/stderr with colored markers
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    fn info(&self, message: &str) {
        println!("{}", message.dimmed());
    }

    fn clear(&self) {}
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// A status message with its creation time for TTL-based expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}

/// Buffered writer for the TUI status bar
///
/// Messages expire after a TTL so the bar falls back to empty when the user
/// stops interacting.
///
/// # Examples
///
/// ```
/// use recipients::ui::output::{MessageLevel, OutputWriter, StatusBarWriter};
/// use std::time::Duration;
///
/// let writer = StatusBarWriter::with_ttl(Duration::from_secs(5));
/// writer.success("Added alice@example.com");
///
/// let latest = writer.latest_message().unwrap();
/// assert_eq!(latest.level, MessageLevel::Success);
/// ```
#[derive(Debug, Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<StatusMessage>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a new status bar writer with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a new status bar writer with custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    /// Messages that haven't expired yet, oldest first
    #[must_use]
    pub fn recent_messages(&self) -> Vec<StatusMessage> {
        self.lock()
            .iter()
            .filter(|m| !m.is_expired(self.ttl))
            .cloned()
            .collect()
    }

    /// The most recent message that hasn't expired
    #[must_use]
    pub fn latest_message(&self) -> Option<StatusMessage> {
        self.lock()
            .iter()
            .rev()
            .find(|m| !m.is_expired(self.ttl))
            .cloned()
    }

    /// Count of active messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.lock().iter().filter(|m| !m.is_expired(self.ttl)).count()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        let mut messages = self.lock();
        messages.push(StatusMessage::new(level, message));

        // Keep only the last 100 messages
        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StatusMessage>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }

    fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_writer_messages() {
        let writer = StatusBarWriter::new();

        writer.success("Added alice@x.com");
        writer.error("Already added: alice@x.com");
        writer.warning("Not an email address: bob");

        let messages = writer.recent_messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].level, MessageLevel::Success);
        assert_eq!(messages[0].text, "Added alice@x.com");
        assert_eq!(messages[1].level, MessageLevel::Error);
        assert_eq!(messages[2].level, MessageLevel::Warning);
    }

    #[test]
    fn test_status_bar_writer_clear() {
        let writer = StatusBarWriter::new();
        writer.write("one");
        writer.write("two");
        assert_eq!(writer.message_count(), 2);

        writer.clear();
        assert_eq!(writer.message_count(), 0);
        assert!(writer.latest_message().is_none());
    }

    #[test]
    fn test_status_bar_writer_latest() {
        let writer = StatusBarWriter::new();
        writer.info("First");
        writer.success("Latest");

        let latest = writer.latest_message().unwrap();
        assert_eq!(latest.level, MessageLevel::Success);
        assert_eq!(latest.text, "Latest");
    }

    #[test]
    fn test_status_bar_writer_ttl() {
        let writer = StatusBarWriter::with_ttl(Duration::from_millis(50));
        writer.write("Message");
        assert_eq!(writer.message_count(), 1);

        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(writer.message_count(), 0);
    }

    #[test]
    fn test_status_bar_writer_caps_history() {
        let writer = StatusBarWriter::with_ttl(Duration::from_secs(60));
        for i in 0..120 {
            writer.write(&format!("message {i}"));
        }
        assert!(writer.message_count() <= 100);
        assert_eq!(writer.latest_message().unwrap().text, "message 119");
    }
}
