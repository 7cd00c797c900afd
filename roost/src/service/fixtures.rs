//! Shared test doubles for the service tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::ReservationService;
use crate::repository::{MockGuestRepository, MockHostRepository, MockReservationRepository};
use crate::{Clock, Guest, Host, HostId, Reservation, ReservationId};

/// The fixed "today" used by service tests.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
}

/// A day in January 2025.
pub fn d(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

pub fn host() -> Host {
    Host::new(
        HostId::new("h-1").unwrap(),
        "host@example.com",
        dec!(100),
        dec!(150),
    )
    .unwrap()
}

pub fn guest() -> Guest {
    Guest::new(7, "guest@example.com").unwrap()
}

/// An unsaved reservation for the standard host and guest.
pub fn request(start: NaiveDate, end: NaiveDate) -> Reservation {
    Reservation::builder()
        .host(host())
        .guest(guest())
        .start(start)
        .end(end)
        .build()
}

/// A stored reservation for the standard host and guest.
pub fn stored(id: ReservationId, start: NaiveDate, end: NaiveDate) -> Reservation {
    request(start, end).with_id(id)
}

pub struct Fixture {
    pub reservations: MockReservationRepository,
    pub hosts: MockHostRepository,
    pub guests: MockGuestRepository,
}

impl Fixture {
    /// Mocks with no expectations; any call fails the test.
    pub fn new() -> Self {
        Self {
            reservations: MockReservationRepository::new(),
            hosts: MockHostRepository::new(),
            guests: MockGuestRepository::new(),
        }
    }

    /// Registries that know the standard host and guest.
    pub fn with_registries() -> Self {
        let mut fx = Self::new();
        fx.hosts
            .expect_find_host_by_email()
            .returning(|_| Ok(Some(host())));
        fx.guests
            .expect_find_guest_by_email()
            .returning(|_| Ok(Some(guest())));
        fx
    }

    /// Makes every host lookup return `existing`.
    pub fn stored(mut self, existing: Vec<Reservation>) -> Self {
        self.reservations
            .expect_find_reservations_by_host_id()
            .returning(move |_| Ok(existing.clone()));
        self
    }

    pub fn service(&self) -> ReservationService<'_> {
        ReservationService::new(&self.reservations, &self.hosts, &self.guests)
            .with_clock(Clock::Fixed(today()))
    }
}
