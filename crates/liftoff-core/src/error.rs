//! Error types for the release tracker library.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a tracker operation can report.
///
/// Caller mistakes (`InvalidInput`, `UnknownStep`) are raised before any
/// storage write. `ReleaseNotFound` and `DeletionFailed` describe the state
/// of the store. The remaining variants are infrastructure failures.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Release not found for the given ID
    #[error("Release with ID {id} not found")]
    ReleaseNotFound { id: u64 },
    /// Step identifier is not part of the checklist catalog
    #[error("Unknown step '{step_id}'")]
    UnknownStep { step_id: String },
    /// Deletion reported that no row was removed
    #[error("Release with ID {id} could not be deleted")]
    DeletionFailed { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the caller's input rather than by the
    /// store or the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TrackerError::InvalidInput { .. } | TrackerError::UnknownStep { .. }
        )
    }

    /// Whether the error reports a missing release.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackerError::ReleaseNotFound { .. })
    }

    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        TrackerError::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        let invalid = TrackerError::invalid_input("name").with_reason("name required");
        assert!(invalid.is_validation());
        assert!(!invalid.is_not_found());

        let unknown = TrackerError::UnknownStep {
            step_id: "launch_party".to_string(),
        };
        assert!(unknown.is_validation());

        let missing = TrackerError::ReleaseNotFound { id: 7 };
        assert!(missing.is_not_found());
        assert!(!missing.is_validation());
    }

    #[test]
    fn test_error_messages() {
        let invalid = TrackerError::invalid_input("due_date").with_reason("invalid due date");
        assert_eq!(
            invalid.to_string(),
            "Invalid input for field 'due_date': invalid due date"
        );
        assert_eq!(
            TrackerError::DeletionFailed { id: 3 }.to_string(),
            "Release with ID 3 could not be deleted"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        match result.db_context("Failed to query release") {
            Err(TrackerError::Database { message, .. }) => {
                assert_eq!(message, "Failed to query release");
            }
            other => panic!("Expected Database error, got {other:?}"),
        }
    }
}
