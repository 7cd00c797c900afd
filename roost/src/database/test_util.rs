//! Shared test utilities for database unit tests.

use rust_decimal_macros::dec;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{Guest, Host, HostId};

/// Creates a temporary test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the database's lifetime
    std::mem::forget(dir);

    db
}

#[must_use]
pub fn test_host() -> Host {
    Host::new(
        HostId::new("h-1").unwrap(),
        "host@example.com",
        dec!(100),
        dec!(150),
    )
    .unwrap()
}

#[must_use]
pub fn test_guest() -> Guest {
    Guest::new(1, "guest@example.com").unwrap()
}

/// Registers `test_host()` and `test_guest()`.
pub fn seed(db: &Database) {
    db.upsert_host(&test_host()).unwrap();
    db.upsert_guest(&test_guest()).unwrap();
}
