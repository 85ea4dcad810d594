//! Driver error types.
//!
//! These cover process-level failures only: unreadable input and programs
//! that fail to parse. Language-level evaluation errors are never process
//! errors - they are `Value::Error` results that the driver displays like
//! any other value.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, DriverError>;

/// Errors the driver can produce.
#[derive(Debug, Error)]
pub enum DriverError {
    /// A source file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    ReadSource {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The program did not parse; the individual messages are kept for
    /// display
    #[error("parsing failed with {} syntax error(s)", .errors.len())]
    Parse {
        /// Accumulated parser diagnostics, in order
        errors: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_counts() {
        let err = DriverError::Parse {
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "parsing failed with 2 syntax error(s)");
    }

    #[test]
    fn test_read_error_display_names_path() {
        let err = DriverError::ReadSource {
            path: PathBuf::from("missing.tarn"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to read missing.tarn:"));
    }
}
