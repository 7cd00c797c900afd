//! Database configuration and path resolution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ROOST_DATA_DIR";

/// Name of the database file inside the data directory.
pub const DATABASE_FILE_NAME: &str = "roost.db";

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use roost::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/roost.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long to wait on a locked database before failing.
    pub busy_timeout: Duration,
    /// Whether to create the database file and its directory when missing.
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5 second busy timeout that creates
    /// the database on first use.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets whether a missing database is created.
    #[must_use]
    pub const fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }
}

/// Returns the default data directory, `~/.roost`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".roost"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves the database file path.
///
/// An explicit `data_dir` wins. Otherwise `$ROOST_DATA_DIR/roost.db` is used
/// when the variable is set, falling back to `~/.roost/roost.db`.
///
/// # Errors
///
/// Returns an error if no directory is given, `ROOST_DATA_DIR` is unset, and
/// the home directory cannot be determined.
pub fn resolve_database_path(data_dir: Option<&Path>) -> Result<PathBuf> {
    let data_dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        },
    };
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
