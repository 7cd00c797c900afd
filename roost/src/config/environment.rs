//! Environment variable overrides.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Overrides the update overlap policy.
pub const UPDATE_OVERLAP_ENV: &str = "ROOST_UPDATE_OVERLAP";
/// Overrides the lock wait in seconds.
pub const LOCK_WAIT_ENV: &str = "ROOST_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides database auto-creation.
pub const DISABLE_AUTOINIT_ENV: &str = "ROOST_DISABLE_AUTOINIT";

/// Applies `ROOST_*` environment variables on top of file configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies every recognized variable that is set.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(UPDATE_OVERLAP_ENV) {
            config.update_overlap = Some(val.parse()?);
        }

        if let Ok(seconds) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: LOCK_WAIT_ENV.into(),
                    message: "Must be a non-negative integer".into(),
                })?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    /// Accepts true/1/yes/on and false/0/no/off, case-insensitively.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
