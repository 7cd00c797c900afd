//! Update command implementation.

use chrono::NaiveDate;
use clap::Args;
use roost::service::messages;
use roost::{calculate_total, ReservationId};

use super::accepted;
use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, require_guest, require_host, reservation_service,
    GlobalOptions,
};

/// Change the dates or guest of a reservation.
///
/// Fields left out keep their stored values. The total is recomputed from
/// the resulting dates.
#[derive(Args)]
pub struct UpdateCommand {
    /// Host email
    #[arg(long, value_name = "EMAIL")]
    pub host: String,

    /// Reservation identifier
    #[arg(long, value_name = "ID")]
    pub id: ReservationId,

    /// New first day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// New last day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: Option<NaiveDate>,

    /// New guest email
    #[arg(long, value_name = "EMAIL")]
    pub guest: Option<String>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.start.is_none() && self.end.is_none() && self.guest.is_none() {
            return Err(CliError::InvalidArguments(
                "Nothing to change: pass --start, --end or --guest".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;
        let host = require_host(&db, &self.host)?;
        let service = reservation_service(&db, &config, global);

        let Some(stored) = service
            .find_by_host_id(host.id())?
            .into_iter()
            .find(|r| r.id() == self.id)
        else {
            return Err(CliError::Rejected(vec![
                messages::RESERVATION_NOT_FOUND.to_string()
            ]));
        };

        let mut builder = stored.to_builder();

        if let Some(start) = self.start {
            builder = builder.start(start);
        }
        if let Some(end) = self.end {
            builder = builder.end(end);
        }
        if let Some(ref email) = self.guest {
            builder = builder.guest(require_guest(&db, email)?);
        }

        let mut updated = builder.build();
        if let (Some(start), Some(end)) = (updated.start(), updated.end()) {
            updated.set_total(calculate_total(start, end, &host));
        }

        let saved = accepted(service.update_reservation(updated)?)?;
        if !global.quiet {
            eprintln!("Reservation {saved}");
        }
        Ok(())
    }
}
