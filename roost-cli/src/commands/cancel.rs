//! Cancel command implementation.

use clap::Args;
use roost::ReservationId;

use super::accepted;
use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, require_host, reservation_service, GlobalOptions,
};

/// Cancel a future reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Host email
    #[arg(long, value_name = "EMAIL")]
    pub host: String,

    /// Reservation identifier
    #[arg(long, value_name = "ID")]
    pub id: ReservationId,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let host = require_host(&db, &self.host)?;

        let outcome = reservation_service(&db, &config, global).delete_reservation(self.id, host.id());
        accepted(outcome)?;

        if !global.quiet {
            eprintln!("Cancelled reservation {}", self.id);
        }
        Ok(())
    }
}
