//! Total-cost computation from nightly rates.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::dates::DateRange;
use crate::error::{Error, Result};
use crate::model::Host;

/// Parses a nightly rate written as a decimal number.
///
/// # Errors
///
/// Returns [`Error::InvalidRate`] if the text is not a decimal number or is
/// negative.
///
/// # Examples
///
/// ```
/// use roost::pricing::parse_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_rate("89.50").unwrap(), Decimal::new(8950, 2));
/// assert!(parse_rate("-1").is_err());
/// assert!(parse_rate("cheap").is_err());
/// ```
pub fn parse_rate(text: &str) -> Result<Decimal> {
    let trimmed = text.trim();
    let rate: Decimal = trimmed.parse().map_err(|_| Error::InvalidRate {
        value: trimmed.to_string(),
        reason: "not a decimal number".to_string(),
    })?;
    if rate.is_sign_negative() && !rate.is_zero() {
        return Err(Error::InvalidRate {
            value: trimmed.to_string(),
            reason: "rates cannot be negative".to_string(),
        });
    }
    Ok(rate)
}

/// Returns `true` for Saturday and Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the rate `host` charges for `date`.
#[must_use]
pub fn nightly_rate(date: NaiveDate, host: &Host) -> Decimal {
    if is_weekend(date) {
        host.weekend_rate()
    } else {
        host.standard_rate()
    }
}

/// Computes the cost of a stay.
///
/// Every calendar day from `start` to `end`, both included, is charged once:
/// Saturdays and Sundays at the host's weekend rate, other days at the
/// standard rate. If `end` precedes `start` no day is charged and the total
/// is zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roost::{calculate_total, Host, HostId};
/// use rust_decimal::Decimal;
///
/// let host = Host::new(HostId::new("h-1").unwrap(), "h@example.com",
///     Decimal::new(100, 0), Decimal::new(150, 0)).unwrap();
///
/// // Friday through Sunday: one standard day, two weekend days.
/// let total = calculate_total(
///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
///     &host,
/// );
/// assert_eq!(total, Decimal::new(400, 0));
/// ```
#[must_use]
pub fn calculate_total(start: NaiveDate, end: NaiveDate, host: &Host) -> Decimal {
    DateRange::spanning(start, end)
        .days()
        .map(|day| nightly_rate(day, host))
        .sum()
}

#[cfg(test)]
mod proptests;
