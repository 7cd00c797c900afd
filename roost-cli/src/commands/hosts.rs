//! Hosts command implementation.

use clap::Args;
use roost::{Host, OutputFormat};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, resolve_format, write_records, GlobalOptions};

const COLUMN_HEADERS: [&str; 4] = ["id", "email", "standard_rate", "weekend_rate"];

/// List registered hosts.
#[derive(Args)]
pub struct HostsCommand {
    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

impl HostsCommand {
    /// Execute the hosts command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let hosts = db.list_hosts()?;

        let rows: Vec<Vec<String>> = hosts.iter().map(row).collect();
        let json: Vec<serde_json::Value> = hosts
            .iter()
            .map(|h| {
                serde_json::json!({
                    "id": h.id().as_str(),
                    "email": h.email(),
                    "standard_rate": h.standard_rate().to_string(),
                    "weekend_rate": h.weekend_rate().to_string(),
                })
            })
            .collect();

        write_records(resolve_format(self.format, &config), &COLUMN_HEADERS, &rows, &json)
    }
}

fn row(host: &Host) -> Vec<String> {
    vec![
        host.id().to_string(),
        host.email().to_string(),
        host.standard_rate().to_string(),
        host.weekend_rate().to_string(),
    ]
}
