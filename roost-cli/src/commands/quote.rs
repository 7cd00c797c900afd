//! Quote command implementation.

use chrono::NaiveDate;
use clap::Args;
use roost::calculate_total;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, require_host, GlobalOptions};

/// Price a stay without booking it.
#[derive(Args)]
pub struct QuoteCommand {
    /// Host email
    #[arg(long, value_name = "EMAIL")]
    pub host: String,

    /// First day of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Last day of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,
}

impl QuoteCommand {
    /// Execute the quote command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.start > self.end {
            return Err(CliError::InvalidArguments(format!(
                "--start {} is after --end {}",
                self.start, self.end
            )));
        }

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let host = require_host(&db, &self.host)?;

        println!("{}", calculate_total(self.start, self.end, &host));
        Ok(())
    }
}
