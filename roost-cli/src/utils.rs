//! Utility functions for CLI operations.
//!
//! Configuration loading, database opening, registry lookups and the
//! table/CSV/TSV writers shared by the listing commands.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use roost::database::resolve_database_path;
use roost::service::messages;
use roost::{
    Clock, Config, ConfigBuilder, Database, DatabaseConfig, Guest, GuestRepository, Host,
    HostRepository, OutputFormat, ReservationService,
};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the database lock wait (in seconds).
    pub busy_timeout: Option<u32>,

    /// Refuse to create a missing database.
    pub disable_autoinit: bool,

    /// Fixed date to use as today.
    pub today: Option<NaiveDate>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let overrides = Config {
        maximum_lock_wait_seconds: global.busy_timeout.map(u64::from),
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global.data_dir.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;

    if !db_path.exists() && config.autoinit_disabled() {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);
    if let Some(wait) = config.lock_wait() {
        db_config = db_config.with_busy_timeout(wait);
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Wires the database into a reservation service.
pub fn reservation_service<'a>(
    db: &'a Database,
    config: &Config,
    global: &GlobalOptions,
) -> ReservationService<'a> {
    ReservationService::new(db, db, db)
        .with_clock(Clock::from(global.today))
        .with_update_overlap(config.update_overlap_policy())
}

/// Looks up a registered host, rejecting unknown emails.
pub fn require_host(db: &Database, email: &str) -> Result<Host, CliError> {
    db.find_host_by_email(email)?
        .ok_or_else(|| CliError::Rejected(vec![messages::HOST_NOT_FOUND.to_string()]))
}

/// Looks up a registered guest, rejecting unknown emails.
pub fn require_guest(db: &Database, email: &str) -> Result<Guest, CliError> {
    db.find_guest_by_email(email)?
        .ok_or_else(|| CliError::Rejected(vec![messages::GUEST_NOT_FOUND.to_string()]))
}

/// Picks the command-line format, then the configured one, then the table.
pub fn resolve_format(requested: Option<OutputFormat>, config: &Config) -> OutputFormat {
    requested.or(config.output_format).unwrap_or_default()
}

/// Writes rows as a tab-aligned table with an uppercase header.
pub fn write_table<W: Write>(
    out: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), CliError> {
    let header_line = headers
        .iter()
        .map(|h| h.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;
    for row in rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// Writes rows as CSV or TSV.
pub fn write_delimited<W: Write>(
    out: W,
    headers: &[&str],
    rows: &[Vec<String>],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes JSON values as a pretty-printed array.
pub fn write_json<W: Write>(mut out: W, values: &[serde_json::Value]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut out, values).map_err(|e| CliError::Io(e.into()))?;
    writeln!(out)?;
    Ok(())
}

/// Writes rows in the requested format; JSON uses `json` instead of `rows`.
pub fn write_records(
    format: OutputFormat,
    headers: &[&str],
    rows: &[Vec<String>],
    json: &[serde_json::Value],
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Table => write_table(&mut handle, headers, rows),
        OutputFormat::Json => write_json(handle, json),
        OutputFormat::Csv => write_delimited(handle, headers, rows, b','),
        OutputFormat::Tsv => write_delimited(handle, headers, rows, b'\t'),
    }
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
