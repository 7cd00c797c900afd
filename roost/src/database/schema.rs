//! SQL statements defining and querying the schema.

/// Current schema version, stored in the metadata table.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Rates are decimal strings so that no precision is lost.
pub const CREATE_HOSTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS hosts (
        id TEXT PRIMARY KEY NOT NULL,
        email TEXT NOT NULL UNIQUE,
        standard_rate TEXT NOT NULL,
        weekend_rate TEXT NOT NULL
    )";

pub const CREATE_GUESTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS guests (
        id INTEGER PRIMARY KEY NOT NULL,
        email TEXT NOT NULL UNIQUE
    )";

/// Reservation identifiers are unique per host. Dates are ISO-8601 strings,
/// which sort chronologically.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        host_id TEXT NOT NULL REFERENCES hosts(id),
        id INTEGER NOT NULL,
        guest_id INTEGER NOT NULL REFERENCES guests(id),
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        total TEXT NOT NULL,
        PRIMARY KEY (host_id, id)
    )";

pub const CREATE_GUEST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)";

pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
