//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::service::UpdateOverlapPolicy;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered: a field set in a
/// higher-precedence source replaces the same field from lower ones.
///
/// # Examples
///
/// ```
/// use roost::config::Config;
/// use roost::UpdateOverlapPolicy;
///
/// let config: Config = serde_yaml::from_str("update_overlap: exclude-self\n").unwrap();
/// assert_eq!(config.update_overlap_policy(), UpdateOverlapPolicy::ExcludeSelf);
/// assert!(serde_yaml::from_str::<Config>("colour: blue\n").is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How updates are checked against their own stored record.
    pub update_overlap: Option<UpdateOverlapPolicy>,

    /// Maximum time to wait for the database lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create a missing database.
    pub disable_autoinit: Option<bool>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Overlays `higher` onto `self`; fields set in `higher` win.
    pub fn merge_from(&mut self, higher: &Self) {
        if higher.update_overlap.is_some() {
            self.update_overlap = higher.update_overlap;
        }
        if higher.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = higher.maximum_lock_wait_seconds;
        }
        if higher.disable_autoinit.is_some() {
            self.disable_autoinit = higher.disable_autoinit;
        }
        if higher.output_format.is_some() {
            self.output_format = higher.output_format;
        }
    }

    /// Returns the configured update overlap policy or the default.
    #[must_use]
    pub fn update_overlap_policy(&self) -> UpdateOverlapPolicy {
        self.update_overlap.unwrap_or_default()
    }

    /// Returns the configured lock wait, if any.
    #[must_use]
    pub fn lock_wait(&self) -> Option<Duration> {
        self.maximum_lock_wait_seconds.map(Duration::from_secs)
    }

    /// Returns whether database auto-creation is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use roost::config::OutputFormat;
///
/// assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{s}' (expected table, json, csv or tsv)"),
            }),
        }
    }
}
