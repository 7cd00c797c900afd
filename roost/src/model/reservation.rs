//! Reservation records and their builder.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dates::DateRange;

use super::{Guest, Host};

/// Identifier of a reservation, unique within one host's reservations.
///
/// A reservation that has not been stored yet carries identifier `0`; the
/// reservation repository assigns the real one when it is added.
pub type ReservationId = u32;

/// A stay booked by a guest with a host.
///
/// Every part of a reservation is optional on construction because incoming
/// requests may be incomplete; [`crate::ReservationService`] reports missing
/// parts as validation messages instead of refusing to build the value.
/// Stored reservations always carry dates, a host and a guest.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roost::{Guest, Host, HostId, Reservation};
/// use rust_decimal::Decimal;
///
/// let host = Host::new(HostId::new("h-1").unwrap(), "host@example.com",
///     Decimal::new(100, 0), Decimal::new(150, 0)).unwrap();
/// let guest = Guest::new(1, "guest@example.com").unwrap();
///
/// let reservation = Reservation::builder()
///     .host(host)
///     .guest(guest)
///     .start(NaiveDate::from_ymd_opt(2030, 6, 3).unwrap())
///     .end(NaiveDate::from_ymd_opt(2030, 6, 7).unwrap())
///     .build();
///
/// assert_eq!(reservation.id(), 0);
/// assert!(reservation.date_range().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    host: Option<Host>,
    guest: Option<Guest>,
    total: Decimal,
}

impl Reservation {
    /// Creates a new reservation builder with every field unset.
    #[must_use]
    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    /// Returns the reservation identifier (`0` until stored).
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the first day of the stay.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the last day of the stay.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns the host, if one is referenced.
    #[must_use]
    pub const fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    /// Returns the guest, if one is referenced.
    #[must_use]
    pub const fn guest(&self) -> Option<&Guest> {
        self.guest.as_ref()
    }

    /// Returns the total cost of the stay.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Returns the span covered by the stay when both dates are present.
    ///
    /// The span is returned even if the dates are out of order so that
    /// overlap checks can still run on a request that fails date ordering.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::spanning(start, end)),
            _ => None,
        }
    }

    /// Sets the total cost.
    pub fn set_total(&mut self, total: Decimal) {
        self.total = total;
    }

    /// Returns a copy of this reservation with the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: ReservationId) -> Self {
        self.id = id;
        self
    }

    /// Returns a builder pre-populated with this reservation's fields.
    ///
    /// This is the way to derive a modified copy for an update.
    #[must_use]
    pub fn to_builder(&self) -> ReservationBuilder {
        ReservationBuilder {
            id: self.id,
            start: self.start,
            end: self.end,
            host: self.host.clone(),
            guest: self.guest.clone(),
            total: self.total,
        }
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let date = |d: Option<NaiveDate>| d.map_or_else(|| "?".to_string(), |d| d.to_string());
        write!(
            f,
            "#{} {}..{} host={} guest={} total={}",
            self.id,
            date(self.start),
            date(self.end),
            self.host.as_ref().map_or("?", Host::email),
            self.guest.as_ref().map_or("?", Guest::email),
            self.total
        )
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug, Default, Clone)]
pub struct ReservationBuilder {
    id: ReservationId,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    host: Option<Host>,
    guest: Option<Guest>,
    total: Decimal,
}

impl ReservationBuilder {
    /// Sets the identifier.
    #[must_use]
    pub const fn id(mut self, id: ReservationId) -> Self {
        self.id = id;
        self
    }

    /// Sets the first day of the stay.
    #[must_use]
    pub const fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the last day of the stay.
    #[must_use]
    pub const fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the host.
    #[must_use]
    pub fn host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the guest.
    #[must_use]
    pub fn guest(mut self, guest: Guest) -> Self {
        self.guest = Some(guest);
        self
    }

    /// Sets the total cost.
    #[must_use]
    pub const fn total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    /// Builds the reservation.
    ///
    /// Building never fails; completeness and consistency are checked by the
    /// reservation service so that every problem can be reported at once.
    #[must_use]
    pub fn build(self) -> Reservation {
        Reservation {
            id: self.id,
            start: self.start,
            end: self.end,
            host: self.host,
            guest: self.guest,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn host() -> Host {
        Host::new(HostId::new("h-1").unwrap(), "host@example.com", dec!(100), dec!(150))
            .unwrap()
    }

    #[test]
    fn test_builder_empty() {
        let r = Reservation::builder().build();
        assert_eq!(r.id(), 0);
        assert!(r.start().is_none());
        assert!(r.end().is_none());
        assert!(r.host().is_none());
        assert!(r.guest().is_none());
        assert_eq!(r.total(), Decimal::ZERO);
        assert!(r.date_range().is_none());
    }

    #[test]
    fn test_builder_full() {
        let r = Reservation::builder()
            .id(4)
            .start(date(2030, 1, 1))
            .end(date(2030, 1, 3))
            .host(host())
            .guest(Guest::new(2, "g@example.com").unwrap())
            .total(dec!(300))
            .build();

        assert_eq!(r.id(), 4);
        assert_eq!(r.host().unwrap().id().as_str(), "h-1");
        assert_eq!(r.guest().unwrap().id(), 2);
        assert_eq!(r.total(), dec!(300));
        let range = r.date_range().unwrap();
        assert_eq!(range.start(), date(2030, 1, 1));
        assert_eq!(range.end(), date(2030, 1, 3));
    }

    #[test]
    fn test_date_range_requires_both_dates() {
        let r = Reservation::builder().start(date(2030, 1, 1)).build();
        assert!(r.date_range().is_none());
    }

    #[test]
    fn test_date_range_kept_when_out_of_order() {
        let r = Reservation::builder()
            .start(date(2030, 1, 5))
            .end(date(2030, 1, 1))
            .build();
        assert!(r.date_range().is_some());
    }

    #[test]
    fn test_set_total_and_with_id() {
        let mut r = Reservation::builder().build();
        r.set_total(dec!(12.5));
        let r = r.with_id(9);
        assert_eq!(r.total(), dec!(12.5));
        assert_eq!(r.id(), 9);
    }

    #[test]
    fn test_to_builder_round_trips() {
        let r = Reservation::builder()
            .id(3)
            .start(date(2030, 1, 1))
            .end(date(2030, 1, 3))
            .host(host())
            .build();
        let moved = r.to_builder().end(date(2030, 1, 9)).build();
        assert_eq!(moved.id(), 3);
        assert_eq!(moved.start(), r.start());
        assert_eq!(moved.end(), Some(date(2030, 1, 9)));
        assert_eq!(moved.host(), r.host());
    }

    #[test]
    fn test_display() {
        let r = Reservation::builder()
            .id(1)
            .start(date(2030, 1, 1))
            .host(host())
            .build();
        let text = format!("{r}");
        assert!(text.contains("#1 2030-01-01..?"));
        assert!(text.contains("host=host@example.com"));
        assert!(text.contains("guest=?"));
    }
}
