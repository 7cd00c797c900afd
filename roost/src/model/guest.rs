//! Guest records.

use serde::{Deserialize, Serialize};

use super::{normalize_email, ValidationError};

/// Identifier of a guest in the guest registry.
pub type GuestId = u32;

/// A guest who books stays with hosts.
///
/// # Examples
///
/// ```
/// use roost::Guest;
///
/// let guest = Guest::new(7, "Sam@Example.com").unwrap();
/// assert_eq!(guest.id(), 7);
/// assert_eq!(guest.email(), "sam@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    id: GuestId,
    email: String,
}

impl Guest {
    /// Creates a guest record.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed.
    pub fn new(id: GuestId, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            email: normalize_email(email)?,
        })
    }

    /// Returns the guest identifier.
    #[must_use]
    pub const fn id(&self) -> GuestId {
        self.id
    }

    /// Returns the normalized email, the registry lookup key.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
