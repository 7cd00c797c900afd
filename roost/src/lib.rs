#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roost
//!
//! A library for validating, pricing and tracking lodging reservations.
//!
//! Guests book stays with hosts. Each stay is checked against the host's
//! other stays, priced night by night from the host's standard and weekend
//! rates, and stored through the repository traits in [`repository`].
//!
//! ## Core Types
//!
//! - [`Host`], [`Guest`] and [`Reservation`]: Domain records
//! - [`DateRange`]: Inclusive day spans and the overlap predicates
//! - [`ReservationService`]: Create, update and cancel with validation
//! - [`Outcome`]: Accumulated validation messages plus an optional payload
//! - [`Database`]: `SQLite` storage implementing the repository traits
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use roost::{calculate_total, Host, HostId};
//! use rust_decimal::Decimal;
//!
//! let host = Host::new(
//!     HostId::new("h-1").unwrap(),
//!     "host@example.com",
//!     Decimal::new(100, 0),
//!     Decimal::new(150, 0),
//! )
//! .unwrap();
//!
//! // Monday through Sunday: five weekday nights and two weekend nights
//! let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let sunday = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
//! assert_eq!(calculate_total(monday, sunday, &host), Decimal::new(800, 0));
//! ```

pub mod clock;
pub mod config;
pub mod database;
pub mod dates;
pub mod error;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod pricing;
pub mod repository;
pub mod service;

// Re-export key types at crate root for convenience
pub use clock::Clock;
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig};
pub use dates::DateRange;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{Guest, GuestId, Host, HostId, Reservation, ReservationBuilder, ReservationId};
pub use outcome::Outcome;
pub use pricing::calculate_total;
pub use repository::{GuestRepository, HostRepository, ReservationRepository};
pub use service::{ReservationService, UpdateOverlapPolicy, ValidationMode};
