//! Domain records: hosts, guests and reservations.
//!
//! Hosts and guests are owned by external registries and are read-only from
//! the point of view of the reservation service. Reservations are created,
//! replaced and removed only through [`crate::ReservationService`].

mod guest;
mod host;
mod reservation;

pub use guest::{Guest, GuestId};
pub use host::{Host, HostId};
pub use reservation::{Reservation, ReservationBuilder, ReservationId};

/// Error type for validation failures of value types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Normalizes an email address for use as a lookup key.
///
/// The address is trimmed and lowercased. It must be non-empty and contain
/// exactly one `@` with text on both sides.
///
/// # Errors
///
/// Returns a [`ValidationError`] for the `email` field if the address is
/// malformed.
///
/// # Examples
///
/// ```
/// use roost::model::normalize_email;
///
/// assert_eq!(normalize_email("  Ana@Example.COM ").unwrap(), "ana@example.com");
/// assert!(normalize_email("not-an-email").is_err());
/// ```
pub fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let normalized = email.trim().to_lowercase();
    match normalized.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(normalized)
        }
        _ => Err(ValidationError::new(
            "email",
            format!("'{}' is not a valid email address", email.trim()),
        )),
    }
}
