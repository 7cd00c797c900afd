//! Add-host command implementation.

use clap::Args;
use roost::pricing::parse_rate;
use roost::{Host, HostId};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Register a host or change its email and rates.
#[derive(Args)]
pub struct AddHostCommand {
    /// Host identifier
    #[arg(long, value_name = "ID")]
    pub id: String,

    /// Host email, used to look the host up
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Nightly rate Monday through Friday
    #[arg(long, value_name = "AMOUNT")]
    pub standard_rate: String,

    /// Nightly rate on Saturday and Sunday
    #[arg(long, value_name = "AMOUNT")]
    pub weekend_rate: String,
}

impl AddHostCommand {
    /// Execute the add-host command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let standard = parse_rate(&self.standard_rate).map_err(|e| CliError::invalid_argument(&e))?;
        let weekend = parse_rate(&self.weekend_rate).map_err(|e| CliError::invalid_argument(&e))?;
        let host = Host::new(HostId::new(self.id)?, &self.email, standard, weekend)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        db.upsert_host(&host)?;

        if !global.quiet {
            eprintln!("Registered host {} ({})", host.id(), host.email());
        }
        Ok(())
    }
}
