//! Custom error types for overkill-gui.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for overkill-gui operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse RON file: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Failed to serialize RON: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Layout file not found: {0}")]
    LayoutNotFound(PathBuf),

    #[error("Theme file not found: {0}")]
    ThemeNotFound(PathBuf),

    #[error("Layout does not define widget '{0}'")]
    MissingWidget(String),

    #[error("Widget '{name}' must be a {expected}")]
    WidgetKind { name: String, expected: &'static str },

    #[error("Invalid color '{value}' for {field}")]
    InvalidColor { field: &'static str, value: String },

    #[error("Failed to set non-blocking mode: {0}")]
    Nonblocking(#[from] nix::errno::Errno),

    #[error("Send failed: {0}")]
    Forward(std::io::Error),
}

/// Result type alias using our custom Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        let display = format!("{}", err);
        assert!(display.contains("IO error"));
    }

    #[test]
    fn test_error_display_layout_not_found() {
        let err = Error::LayoutNotFound(PathBuf::from("/path/to/starter.layout.ron"));
        let display = format!("{}", err);
        assert!(display.contains("Layout file not found"));
        assert!(display.contains("/path/to/starter.layout.ron"));
    }

    #[test]
    fn test_error_display_missing_widget() {
        let err = Error::MissingWidget("chatentry".to_string());
        let display = format!("{}", err);
        assert!(display.contains("chatentry"));
    }

    #[test]
    fn test_error_display_widget_kind() {
        let err = Error::WidgetKind {
            name: "chatlog".to_string(),
            expected: "TextView",
        };
        assert_eq!(format!("{}", err), "Widget 'chatlog' must be a TextView");
    }

    #[test]
    fn test_error_display_forward() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err = Error::Forward(io_err);
        assert!(format!("{}", err).starts_with("Send failed"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_errno_from() {
        let err: Error = nix::errno::Errno::EBADF.into();
        assert!(matches!(err, Error::Nonblocking(_)));
    }
}
