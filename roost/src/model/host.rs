//! Host records and nightly rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{normalize_email, ValidationError};

/// Identifier of a host in the host registry.
///
/// # Examples
///
/// ```
/// use roost::HostId;
///
/// let id = HostId::new("3edda6bc-ab95-49a8-8962-d50b641e5f4f").unwrap();
/// assert_eq!(id.as_str(), "3edda6bc-ab95-49a8-8962-d50b641e5f4f");
/// assert!(HostId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostId(String);

impl HostId {
    /// Creates a host identifier from a non-blank string.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new(
                "host_id",
                "host id must be non-empty after trimming whitespace",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A host offering a lodging for reservation.
///
/// Every night of a stay is charged at either the standard rate (Monday to
/// Friday) or the weekend rate (Saturday and Sunday).
///
/// # Examples
///
/// ```
/// use roost::{Host, HostId};
/// use rust_decimal::Decimal;
///
/// let host = Host::new(
///     HostId::new("h-1").unwrap(),
///     "Host@Example.com",
///     Decimal::new(100, 0),
///     Decimal::new(125, 0),
/// )
/// .unwrap();
///
/// assert_eq!(host.email(), "host@example.com");
/// assert_eq!(host.weekend_rate(), Decimal::new(125, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    id: HostId,
    email: String,
    standard_rate: Decimal,
    weekend_rate: Decimal,
}

impl Host {
    /// Creates a host record.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is malformed or either rate is negative.
    pub fn new(
        id: HostId,
        email: &str,
        standard_rate: Decimal,
        weekend_rate: Decimal,
    ) -> Result<Self, ValidationError> {
        let email = normalize_email(email)?;
        check_rate("standard_rate", standard_rate)?;
        check_rate("weekend_rate", weekend_rate)?;

        Ok(Self {
            id,
            email,
            standard_rate,
            weekend_rate,
        })
    }

    /// Returns the host identifier.
    #[must_use]
    pub const fn id(&self) -> &HostId {
        &self.id
    }

    /// Returns the normalized email, the registry lookup key.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the nightly rate for Monday through Friday.
    #[must_use]
    pub const fn standard_rate(&self) -> Decimal {
        self.standard_rate
    }

    /// Returns the nightly rate for Saturday and Sunday.
    #[must_use]
    pub const fn weekend_rate(&self) -> Decimal {
        self.weekend_rate
    }
}

fn check_rate(field: &str, rate: Decimal) -> Result<(), ValidationError> {
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(ValidationError::new(
            field,
            format!("rate {rate} cannot be negative"),
        ));
    }
    Ok(())
}
