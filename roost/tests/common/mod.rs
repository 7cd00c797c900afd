//! Common test utilities for integration tests.
//!
//! Every test gets its own SQLite file in a temporary directory, seeded with
//! one host and one guest, and a service pinned to 2024-12-01.

use chrono::NaiveDate;
use roost::{
    Clock, Database, DatabaseConfig, Guest, Host, HostId, Reservation, ReservationService,
    UpdateOverlapPolicy,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// The fixed "today" used by every integration test.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
}

/// A date in January 2025.
#[allow(dead_code)]
pub fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
}

/// A temporary database with a host and a guest already registered.
pub struct TestStore {
    // Held so the directory outlives the connection
    _dir: TempDir,
    /// The open database.
    pub db: Database,
    /// The registered host (standard 100, weekend 150).
    pub host: Host,
    /// The registered guest.
    pub guest: Guest,
}

impl TestStore {
    /// Creates and seeds a fresh database.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("roost.db"))).unwrap();

        let host = Host::new(
            HostId::new("host-1").unwrap(),
            "host@example.com",
            Decimal::new(100, 0),
            Decimal::new(150, 0),
        )
        .unwrap();
        let guest = Guest::new(1, "guest@example.com").unwrap();
        db.upsert_host(&host).unwrap();
        db.upsert_guest(&guest).unwrap();

        Self {
            _dir: dir,
            db,
            host,
            guest,
        }
    }

    /// A service over this store with the fixed clock.
    pub fn service(&self) -> ReservationService<'_> {
        ReservationService::new(&self.db, &self.db, &self.db).with_clock(Clock::Fixed(today()))
    }

    /// A service that leaves the edited reservation out of the overlap check.
    #[allow(dead_code)]
    pub fn lenient_service(&self) -> ReservationService<'_> {
        self.service()
            .with_update_overlap(UpdateOverlapPolicy::ExcludeSelf)
    }

    /// A request for the seeded host and guest.
    pub fn request(&self, start: NaiveDate, end: NaiveDate) -> Reservation {
        Reservation::builder()
            .host(self.host.clone())
            .guest(self.guest.clone())
            .start(start)
            .end(end)
            .build()
    }

    /// Creates a reservation and returns the stored record.
    #[allow(dead_code)]
    pub fn book(&self, start: NaiveDate, end: NaiveDate) -> Reservation {
        let outcome = self.service().make_reservation(self.request(start, end)).unwrap();
        assert!(outcome.is_success(), "booking failed: {:?}", outcome.messages());
        outcome.into_payload().unwrap()
    }
}
