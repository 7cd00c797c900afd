//! User-facing messages reported in [`crate::Outcome`]s.
//!
//! Messages that embed a value are built by the functions at the bottom.

/// A reservation without a guest.
pub const GUEST_REQUIRED: &str = "Guest is required.";
/// A reservation without a host.
pub const HOST_REQUIRED: &str = "Host is required.";
/// A reservation missing either date.
pub const DATES_REQUIRED: &str = "Start and end dates are required.";
/// A reservation whose start does not precede its end.
pub const START_BEFORE_END: &str = "Start date must come before end date.";
/// A reservation starting today or earlier.
pub const START_IN_FUTURE: &str = "Start date must be in the future.";
/// A guest unknown to the guest registry.
pub const GUEST_NOT_FOUND: &str = "Guest does not exist.";
/// A host unknown to the host registry.
pub const HOST_NOT_FOUND: &str = "Host does not exist.";
/// A reservation sharing at least one day with a stored one.
pub const DATES_OVERLAP: &str = "Reservation dates overlap with an existing reservation.";
/// An update naming a reservation the host does not have.
pub const RESERVATION_NOT_FOUND: &str = "Reservation does not exist.";
/// An update colliding with another stored reservation.
pub const UPDATE_CONFLICT: &str = "Updated reservation conflicts with an existing reservation.";
/// The store declined to replace a reservation.
pub const UPDATE_FAILED: &str = "Failed to update the reservation.";
/// A cancel of a stay that already started.
pub const CANCEL_IN_PAST: &str = "Cannot cancel a reservation that's in the past.";
/// The store declined to remove a reservation.
pub const DELETE_FAILED: &str = "Failed to delete the reservation.";

pub(crate) fn save_failed(cause: impl std::fmt::Display) -> String {
    format!("Failed to save the reservation: {cause}")
}

pub(crate) fn update_failed(cause: impl std::fmt::Display) -> String {
    format!("Failed to update the reservation: {cause}")
}

pub(crate) fn delete_failed(cause: impl std::fmt::Display) -> String {
    format!("Failed to delete the reservation: {cause}")
}

pub(crate) fn reservation_id_not_found(id: u32) -> String {
    format!("Reservation with ID {id} does not exist.")
}
