//! CLI-specific error types with exit codes.

use std::fmt;

use roost::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),

    /// The service refused the operation; one line per message.
    Rejected(Vec<String>),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Rejected reservation or other semantic failure
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected(_) => 1,
            Self::Timeout => 2,
            Self::NoDataDirectory => 3,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Library(_) => 6,
            Self::Config(_) => 7,
        }
    }

    /// Wraps a library error caused by bad user input.
    #[must_use]
    pub fn invalid_argument(e: &LibError) -> Self {
        Self::InvalidArguments(e.to_string())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(e) => write!(f, "{e}"),
            Self::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Timeout => write!(f, "Timeout waiting for database lock"),
            Self::NoDataDirectory => write!(
                f,
                "Data directory not found (use --data-dir or enable auto-init)"
            ),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Rejected(messages) => write!(f, "{}", messages.join("\n")),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_busy() {
            return Self::Timeout;
        }
        match e {
            LibError::DataDirectoryNotFound { .. } => Self::NoDataDirectory,
            LibError::Configuration(_) => Self::Config(e.to_string()),
            LibError::Io(io) => Self::Io(io),
            other => Self::Library(other),
        }
    }
}

impl From<roost::model::ValidationError> for CliError {
    fn from(e: roost::model::ValidationError) -> Self {
        Self::InvalidArguments(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
