//! Error types for Reflect core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

use crate::storage::types::EntryId;

/// Result type alias for Reflect operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Entry data failed validation (empty title or body, oversized title)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No entry exists with the given ID
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Invalid user input (unknown mood or category tag, malformed ID)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Validation(err.to_string())
    }
}

impl JournalError {
    /// Whether this error means the requested entry does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, JournalError::NotFound(_))
    }

    /// Whether this error was caused by rejected entry data.
    pub fn is_validation(&self) -> bool {
        matches!(self, JournalError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = JournalError::NotFound(EntryId::new(42));
        assert_eq!(err.to_string(), "Entry not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: JournalError = io.into();
        assert!(matches!(err, JournalError::Storage(ref msg) if msg.contains("denied")));
    }
}
