// ============================================================================
// tsconv-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the Marker Conversion Engine
//
// This module defines the error taxonomy shared by the readers, the writers
// and the collection mutation layer.
//
// KEY COMPONENTS:
// - CoreError: every failure the core can report
// - CoreResult: result alias used throughout the crate
//
// Parse and state errors are fatal to a read; validation errors are meant to
// be shown to the user and re-prompted.
//
// AI-ASSISTANT-INFO: Error types for tsconv-core

use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for tsconv-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be classified, or its payload did not match the
    /// pattern expected for its role.
    #[error("Parse error on line {line_number}: {reason}: {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        reason: String,
    },

    /// A well-formed line arrived out of order.
    #[error("State error on line {line_number}: {reason}: {line:?}")]
    State {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Invalid clock value: {0}")]
    InvalidClock(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl CoreError {
    /// Returns true when the caller can ask the user again instead of
    /// aborting the session.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CoreError::Validation(_) | CoreError::InvalidClock(_))
    }

    pub(crate) fn parse(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        CoreError::Parse {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn state(line_number: usize, line: &str, reason: impl Into<String>) -> Self {
        CoreError::State {
            line_number,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for tsconv-core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(CoreError::Validation("index 9 out of range".into()).is_recoverable());
        assert!(CoreError::InvalidClock("abc".into()).is_recoverable());
        assert!(!CoreError::parse(3, "garbage", "unrecognized line").is_recoverable());
        assert!(!CoreError::OutputExists(PathBuf::from("a.edl")).is_recoverable());
    }

    #[test]
    fn test_parse_error_message_carries_line() {
        let err = CoreError::parse(12, "what is this", "unrecognized line");
        let msg = err.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("what is this"));
    }
}
