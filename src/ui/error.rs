//! UI error types

use thiserror::Error;

/// Errors that can occur while running the interactive field
#[derive(Debug, Error)]
pub enum UiError {
    /// The terminal is smaller than the field can be drawn in
    #[error("Terminal too small: {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    /// IO error during terminal setup, drawing or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_too_small_message() {
        let error = UiError::TerminalTooSmall {
            width: 20,
            height: 5,
            min_width: 40,
            min_height: 12,
        };
        assert_eq!(
            error.to_string(),
            "Terminal too small: 20x5, need at least 40x12"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::other("broken pipe");
        let error: UiError = io.into();
        assert!(matches!(error, UiError::IoError(_)));
        assert!(error.to_string().contains("broken pipe"));
    }
}
