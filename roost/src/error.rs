//! Error types for the roost library.
//!
//! This module provides the error hierarchy for everything in the roost
//! library that can fail as a *fault*, using `thiserror` for ergonomic error
//! handling. Rejected reservations are not faults: the service reports them
//! through [`crate::Outcome`] messages instead.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for operations that may fail with a roost error.
///
/// # Examples
///
/// ```
/// use roost::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(7)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roost library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A date range whose start does not precede its end.
    #[error("invalid date range {start}..{end}: start must come before end")]
    InvalidDateRange {
        /// The start of the rejected range.
        start: NaiveDate,
        /// The end of the rejected range.
        end: NaiveDate,
    },

    /// A nightly rate that cannot be used for pricing.
    #[error("invalid rate {value}: {reason}")]
    InvalidRate {
        /// The rejected value, as written.
        value: String,
        /// The reason the rate is invalid.
        reason: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::model::ValidationError> for Error {
    fn from(err: crate::model::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use roost::Error;
    ///
    /// let err = Error::NotFound { resource: "host h-1".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::DataDirectoryNotFound { .. }
        )
    }

    /// Check if error came from a busy (locked) database.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ErrorCode::DatabaseLocked
        )
    }
}
