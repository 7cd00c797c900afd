//! SQLite storage for hosts, guests and reservations.
//!
//! [`Database`] implements all three repository traits, so one open
//! database can back a [`crate::ReservationService`]. It also maintains the
//! host and guest registries, which the service itself only reads.
//!
//! # Examples
//!
//! ```no_run
//! use roost::database::{Database, DatabaseConfig};
//! use roost::ReservationService;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/roost.db")).unwrap();
//! let service = ReservationService::new(&db, &db, &db);
//! for host in db.list_hosts().unwrap() {
//!     println!("{}", host.email());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
