//! Storage interfaces the reservation service depends on.
//!
//! The service never talks to storage directly. Anything that implements
//! these traits can back it: the bundled SQLite [`crate::Database`], an
//! in-memory store, or a test double.

use crate::error::Result;
use crate::model::{Guest, Host, HostId, Reservation};

/// Access to stored reservations, keyed by host.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationRepository {
    /// Returns every stored reservation of a host, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_reservations_by_host_id(&self, host_id: &HostId) -> Result<Vec<Reservation>>;

    /// Stores a new reservation and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation cannot be stored.
    fn add_reservation(&self, reservation: &Reservation) -> Result<Reservation>;

    /// Replaces the stored reservation with the same host and identifier.
    ///
    /// Returns `false` if no such reservation exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn update_reservation(&self, reservation: &Reservation) -> Result<bool>;

    /// Removes the stored reservation with the same host and identifier.
    ///
    /// Returns `false` if no such reservation exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn delete_reservation(&self, reservation: &Reservation) -> Result<bool>;
}

/// Read access to the host registry.
#[cfg_attr(test, mockall::automock)]
pub trait HostRepository {
    /// Looks up a host by normalized email.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    fn find_host_by_email(&self, email: &str) -> Result<Option<Host>>;
}

/// Read access to the guest registry.
#[cfg_attr(test, mockall::automock)]
pub trait GuestRepository {
    /// Looks up a guest by normalized email.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry cannot be read.
    fn find_guest_by_email(&self, email: &str) -> Result<Option<Guest>>;
}
