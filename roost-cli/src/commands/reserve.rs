//! Reserve command implementation.
//!
//! Prints the new reservation's identifier on stdout so scripts can capture
//! it; the summary goes to stderr.

use chrono::NaiveDate;
use clap::Args;
use roost::Reservation;

use super::accepted;
use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, require_guest, require_host, reservation_service,
    GlobalOptions,
};

/// Book a stay.
#[derive(Args)]
pub struct ReserveCommand {
    /// Host email
    #[arg(long, value_name = "EMAIL")]
    pub host: String,

    /// Guest email
    #[arg(long, value_name = "EMAIL")]
    pub guest: String,

    /// First day of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Last day of the stay (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let host = require_host(&db, &self.host)?;
        let guest = require_guest(&db, &self.guest)?;

        let request = Reservation::builder()
            .host(host)
            .guest(guest)
            .start(self.start)
            .end(self.end)
            .build();

        let saved = accepted(reservation_service(&db, &config, global).make_reservation(request)?)?;

        println!("{}", saved.id());
        if !global.quiet {
            eprintln!("Reservation {saved}");
        }
        Ok(())
    }
}
