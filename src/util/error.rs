//! Unified error types for LogKit.
//!
//! All fallible operations throughout the codebase return `Result<T, LogkitError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.

use std::path::PathBuf;

/// Unified error type used throughout LogKit.
///
/// Each variant captures enough context to produce an actionable message for
/// the user. The core never prints these itself; the binary decides how they
/// are presented and which exit code they map to.
#[derive(Debug, thiserror::Error)]
pub enum LogkitError {
    /// A line of the input file is not a JSON object. Only surfaced in
    /// strict mode; lenient reads skip such lines.
    #[error("Bad JSON on line {line}: {message}")]
    MalformedInput {
        /// 1-based physical line number in the input file.
        line: usize,
        /// The decoder's description of the failure.
        message: String,
    },

    /// A `since`/`until` bound, or an event's own `ts` while a time filter
    /// is active, is not an accepted ISO-8601 timestamp.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The text that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The input log file does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// Writing a rendered result (CSV, JSON, or text) failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for I/O errors while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LogkitError>;

/// Build an [`LogkitError::InvalidTimestamp`] for `value`.
pub fn invalid_timestamp(value: &str, reason: impl Into<String>) -> LogkitError {
    LogkitError::InvalidTimestamp {
        value: value.to_owned(),
        reason: reason.into(),
    }
}

/// Map a failure to open `path` to [`LogkitError::FileNotFound`] when the
/// file is missing, otherwise keep the I/O error as-is.
pub fn open_err(err: std::io::Error, path: impl Into<PathBuf>) -> LogkitError {
    if err.kind() == std::io::ErrorKind::NotFound {
        LogkitError::FileNotFound { path: path.into() }
    } else {
        LogkitError::Io(err)
    }
}
