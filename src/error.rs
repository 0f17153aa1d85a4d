//! Error definitions for the logging library.

use thiserror::Error;

/// Errors produced by level parsing and handler selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Level name did not match one of debug/info/warn/error/fatal.
    #[error("invalid log level")]
    InvalidLevel,

    /// Numeric handler code outside the known set (0 = text, 1 = json).
    #[error("unknown handler: {0}")]
    UnknownHandler(i32),
}

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidLevel.to_string(), "invalid log level");
        assert_eq!(Error::UnknownHandler(7).to_string(), "unknown handler: 7");
    }
}
