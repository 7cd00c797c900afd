//! List command implementation.
//!
//! Displays one host's reservations in table, JSON, CSV or TSV form.

use clap::Args;
use roost::{OutputFormat, Reservation};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, require_host, reservation_service, resolve_format,
    write_records, GlobalOptions,
};

/// Column headers for every format but JSON.
const COLUMN_HEADERS: [&str; 5] = ["id", "start", "end", "guest", "total"];

/// List a host's reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Host email
    #[arg(long, value_name = "EMAIL")]
    pub host: String,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let host = require_host(&db, &self.host)?;

        let mut reservations = reservation_service(&db, &config, global).find_by_host_id(host.id())?;
        reservations.sort_by_key(|r| (r.start(), r.id()));

        let rows: Vec<Vec<String>> = reservations.iter().map(row).collect();
        let json: Vec<serde_json::Value> = reservations
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.id(),
                    "start": r.start(),
                    "end": r.end(),
                    "guest": r.guest().map(roost::Guest::email),
                    "total": r.total().to_string(),
                })
            })
            .collect();

        write_records(resolve_format(self.format, &config), &COLUMN_HEADERS, &rows, &json)
    }
}

fn row(r: &Reservation) -> Vec<String> {
    let date = |d: Option<chrono::NaiveDate>| d.map_or_else(String::new, |d| d.to_string());
    vec![
        r.id().to_string(),
        date(r.start()),
        date(r.end()),
        r.guest().map_or_else(String::new, |g| g.email().to_string()),
        r.total().to_string(),
    ]
}
