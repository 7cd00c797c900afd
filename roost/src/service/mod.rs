//! The reservation service: validation, pricing and lifecycle.
//!
//! [`ReservationService`] is the only way reservations are created, replaced
//! or cancelled. It borrows its three repositories for its whole lifetime
//! and holds no other state besides its clock and overlap policy, so one
//! service can serve any number of calls.
//!
//! Rejections are reported as [`Outcome`] messages. Faults reading storage
//! surface as [`crate::Error`] from the read paths. Faults while writing are
//! folded into the outcome.

pub mod messages;
mod validator;

#[cfg(test)]
mod fixtures;

pub use validator::{UpdateOverlapPolicy, ValidationMode};

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::error::Result;
use crate::model::{HostId, Reservation, ReservationId};
use crate::outcome::Outcome;
use crate::pricing::calculate_total;
use crate::repository::{GuestRepository, HostRepository, ReservationRepository};

/// Validates, prices and stores reservations.
///
/// # Examples
///
/// ```no_run
/// use roost::{Database, DatabaseConfig, ReservationService};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/roost.db")).unwrap();
/// let service = ReservationService::new(&db, &db, &db);
/// ```
pub struct ReservationService<'a> {
    reservations: &'a dyn ReservationRepository,
    hosts: &'a dyn HostRepository,
    guests: &'a dyn GuestRepository,
    clock: Clock,
    update_overlap: UpdateOverlapPolicy,
}

impl<'a> ReservationService<'a> {
    /// Creates a service over the given repositories, using the system clock
    /// and the default overlap policy.
    #[must_use]
    pub fn new(
        reservations: &'a dyn ReservationRepository,
        hosts: &'a dyn HostRepository,
        guests: &'a dyn GuestRepository,
    ) -> Self {
        Self {
            reservations,
            hosts,
            guests,
            clock: Clock::System,
            update_overlap: UpdateOverlapPolicy::default(),
        }
    }

    /// Sets where "today" comes from.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Sets how updates are checked against their own stored record.
    #[must_use]
    pub fn with_update_overlap(mut self, policy: UpdateOverlapPolicy) -> Self {
        if policy == UpdateOverlapPolicy::ExcludeSelf {
            log::debug!("update overlap check excludes the reservation's own record");
        }
        self.update_overlap = policy;
        self
    }

    /// Returns today's date according to the service clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns the configured update overlap policy.
    #[must_use]
    pub const fn update_overlap(&self) -> UpdateOverlapPolicy {
        self.update_overlap
    }

    /// Returns every stored reservation of a host.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation store cannot be read.
    pub fn find_by_host_id(&self, host_id: &HostId) -> Result<Vec<Reservation>> {
        self.reservations.find_reservations_by_host_id(host_id)
    }

    /// Validates, prices and stores a new reservation.
    ///
    /// On success the payload is the stored reservation, carrying its
    /// assigned identifier and a total computed by [`calculate_total`]. Any
    /// total on the request is ignored. If the store refuses the write the
    /// outcome fails with the cause and carries no payload.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry or the reservation store cannot be
    /// read during validation.
    pub fn make_reservation(&self, reservation: Reservation) -> Result<Outcome<Reservation>> {
        let mut outcome = self.validate(&reservation, ValidationMode::Create)?;
        if !outcome.is_success() {
            return Ok(outcome);
        }

        let mut reservation = reservation;
        if let (Some(start), Some(end), Some(host)) =
            (reservation.start(), reservation.end(), reservation.host())
        {
            let total = calculate_total(start, end, host);
            reservation.set_total(total);
        }

        match self.reservations.add_reservation(&reservation) {
            Ok(saved) => {
                log::debug!("stored reservation {saved}");
                outcome.set_payload(saved);
            }
            Err(e) => {
                log::warn!("failed to store reservation {reservation}: {e}");
                outcome.take_payload();
                outcome.add_message(messages::save_failed(&e));
            }
        }
        Ok(outcome)
    }

    /// Replaces a stored reservation.
    ///
    /// The replacement must pass validation, name a reservation the host
    /// already has, and be strictly disjoint from every other reservation of
    /// that host. The total is stored as given. On success the payload is
    /// the replacement.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry or the reservation store cannot be
    /// read. A failed write is reported in the outcome instead.
    pub fn update_reservation(&self, updated: Reservation) -> Result<Outcome<Reservation>> {
        let mut outcome = self.validate(&updated, ValidationMode::Update)?;
        if !outcome.is_success() {
            return Ok(outcome);
        }
        outcome.take_payload();

        // Validation guarantees both are present.
        let (Some(host), Some(range)) = (updated.host(), updated.date_range()) else {
            return Ok(outcome);
        };

        let existing = self.reservations.find_reservations_by_host_id(host.id())?;
        if !existing.iter().any(|r| r.id() == updated.id()) {
            outcome.add_message(messages::RESERVATION_NOT_FOUND);
            return Ok(outcome);
        }

        let conflict = existing
            .iter()
            .filter(|r| r.id() != updated.id())
            .filter_map(Reservation::date_range)
            .any(|other| !range.is_disjoint_from(&other));
        if conflict {
            outcome.add_message(messages::UPDATE_CONFLICT);
            return Ok(outcome);
        }

        match self.reservations.update_reservation(&updated) {
            Ok(true) => {
                log::debug!("updated reservation {updated}");
                outcome.set_payload(updated);
            }
            Ok(false) => outcome.add_message(messages::UPDATE_FAILED),
            Err(e) => {
                log::warn!("failed to update reservation {updated}: {e}");
                outcome.add_message(messages::update_failed(&e));
            }
        }
        Ok(outcome)
    }

    /// Cancels a future reservation.
    ///
    /// The payload is `true` only if the reservation was removed. Every
    /// failure, including storage faults, is reported in the outcome with a
    /// `false` payload; this method never returns an error.
    pub fn delete_reservation(&self, id: ReservationId, host_id: &HostId) -> Outcome<bool> {
        match self.try_delete(id, host_id) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("failed to delete reservation {id} of host {host_id}: {e}");
                rejected(messages::delete_failed(&e))
            }
        }
    }

    fn try_delete(&self, id: ReservationId, host_id: &HostId) -> Result<Outcome<bool>> {
        let existing = self.reservations.find_reservations_by_host_id(host_id)?;
        let Some(target) = existing.iter().find(|r| r.id() == id) else {
            return Ok(rejected(messages::reservation_id_not_found(id)));
        };

        let today = self.today();
        if !target.start().is_some_and(|start| start > today) {
            return Ok(rejected(messages::CANCEL_IN_PAST));
        }

        if self.reservations.delete_reservation(target)? {
            log::debug!("deleted reservation {target}");
            Ok(Outcome::success(true))
        } else {
            Ok(rejected(messages::DELETE_FAILED))
        }
    }
}

fn rejected(message: impl Into<String>) -> Outcome<bool> {
    let mut outcome = Outcome::failure(message);
    outcome.set_payload(false);
    outcome
}
