//! Reservation validation rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::messages;
use super::ReservationService;
use crate::error::{Error, Result};
use crate::model::Reservation;
use crate::outcome::Outcome;

/// Which operation a reservation is being validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// A new reservation.
    Create,
    /// A replacement for a stored reservation.
    Update,
}

/// How the overlap rule treats a reservation's own stored record on update.
///
/// The overlap rule looks up the host's stored reservations and rejects the
/// candidate if any of them shares a day with it. On update the stored
/// record being replaced is one of them, so under [`IncludeSelf`] an update
/// that keeps any of its original days is rejected. [`ExcludeSelf`] skips
/// the stored record with the candidate's identifier.
///
/// Creation is unaffected by this policy.
///
/// [`IncludeSelf`]: UpdateOverlapPolicy::IncludeSelf
/// [`ExcludeSelf`]: UpdateOverlapPolicy::ExcludeSelf
///
/// # Examples
///
/// ```
/// use roost::UpdateOverlapPolicy;
///
/// let policy: UpdateOverlapPolicy = "exclude-self".parse().unwrap();
/// assert_eq!(policy, UpdateOverlapPolicy::ExcludeSelf);
/// assert_eq!(UpdateOverlapPolicy::default(), UpdateOverlapPolicy::IncludeSelf);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpdateOverlapPolicy {
    /// Compare against every stored reservation of the host.
    #[default]
    IncludeSelf,
    /// Skip the stored reservation with the same identifier.
    ExcludeSelf,
}

impl FromStr for UpdateOverlapPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "include-self" => Ok(Self::IncludeSelf),
            "exclude-self" => Ok(Self::ExcludeSelf),
            other => Err(Error::Validation {
                field: "update_overlap".into(),
                message: format!("expected include-self or exclude-self, got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for UpdateOverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::IncludeSelf => "include-self",
            Self::ExcludeSelf => "exclude-self",
        })
    }
}

impl ReservationService<'_> {
    /// Checks a reservation against every rule and reports all violations.
    ///
    /// Rules are evaluated in a fixed order and every violation adds one
    /// message; evaluation never stops early. On success the outcome carries
    /// a copy of the reservation, unmodified.
    ///
    /// 1. A guest and a host are referenced.
    /// 2. Both dates are present, and the start comes before the end.
    /// 3. The start is after today.
    /// 4. The guest and the host exist in their registries, by email.
    /// 5. No stored reservation of the host overlaps the candidate,
    ///    boundary days included. See [`UpdateOverlapPolicy`] for how the
    ///    candidate's own record is treated on update. Skipped if the host
    ///    or either date is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a registry or the reservation store cannot be
    /// read.
    pub fn validate(&self, reservation: &Reservation, mode: ValidationMode) -> Result<Outcome<Reservation>> {
        let mut outcome = Outcome::new();

        if reservation.guest().is_none() {
            outcome.add_message(messages::GUEST_REQUIRED);
        }
        if reservation.host().is_none() {
            outcome.add_message(messages::HOST_REQUIRED);
        }

        match (reservation.start(), reservation.end()) {
            (Some(start), Some(end)) if start >= end => {
                outcome.add_message(messages::START_BEFORE_END);
            }
            (Some(_), Some(_)) => {}
            _ => outcome.add_message(messages::DATES_REQUIRED),
        }

        if let Some(start) = reservation.start() {
            if start <= self.today() {
                outcome.add_message(messages::START_IN_FUTURE);
            }
        }

        if let Some(guest) = reservation.guest() {
            if self.guests.find_guest_by_email(guest.email())?.is_none() {
                outcome.add_message(messages::GUEST_NOT_FOUND);
            }
        }
        if let Some(host) = reservation.host() {
            if self.hosts.find_host_by_email(host.email())?.is_none() {
                outcome.add_message(messages::HOST_NOT_FOUND);
            }
        }

        if self.overlaps_stored(reservation, mode)? {
            outcome.add_message(messages::DATES_OVERLAP);
        }

        if outcome.is_success() {
            outcome.set_payload(reservation.clone());
        } else {
            log::debug!(
                "reservation {} rejected ({mode:?}): {}",
                reservation,
                outcome.messages().join(" ")
            );
        }
        Ok(outcome)
    }

    fn overlaps_stored(&self, reservation: &Reservation, mode: ValidationMode) -> Result<bool> {
        let (Some(host), Some(range)) = (reservation.host(), reservation.date_range()) else {
            return Ok(false);
        };
        let skip_own = mode == ValidationMode::Update
            && self.update_overlap == UpdateOverlapPolicy::ExcludeSelf;

        let stored = self.reservations.find_reservations_by_host_id(host.id())?;
        Ok(stored
            .iter()
            .filter(|other| !(skip_own && other.id() == reservation.id()))
            .filter_map(Reservation::date_range)
            .any(|other| range.overlaps(&other)))
    }
}
