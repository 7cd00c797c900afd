//! Registry and reservation queries.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row, Transaction, TransactionBehavior};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::model::{Guest, Host, HostId, Reservation};
use crate::repository::{GuestRepository, HostRepository, ReservationRepository};

use super::connection::Database;

const UPSERT_HOST: &str = r"
    INSERT INTO hosts (id, email, standard_rate, weekend_rate)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(id) DO UPDATE SET
        email = excluded.email,
        standard_rate = excluded.standard_rate,
        weekend_rate = excluded.weekend_rate
";

const UPSERT_GUEST: &str = r"
    INSERT INTO guests (id, email)
    VALUES (?1, ?2)
    ON CONFLICT(id) DO UPDATE SET email = excluded.email
";

const SELECT_HOST_BY_EMAIL: &str = r"
    SELECT id, email, standard_rate, weekend_rate FROM hosts WHERE email = ?
";

const SELECT_HOST_BY_ID: &str = r"
    SELECT id, email, standard_rate, weekend_rate FROM hosts WHERE id = ?
";

const LIST_HOSTS: &str = r"
    SELECT id, email, standard_rate, weekend_rate FROM hosts ORDER BY email
";

const SELECT_GUEST_BY_EMAIL: &str = "SELECT id, email FROM guests WHERE email = ?";

const SELECT_RESERVATIONS_BY_HOST: &str = r"
    SELECT r.id, r.start_date, r.end_date, r.total, g.id, g.email
    FROM reservations r
    JOIN guests g ON g.id = r.guest_id
    WHERE r.host_id = ?
    ORDER BY r.id
";

const NEXT_RESERVATION_ID: &str = r"
    SELECT COALESCE(MAX(id), 0) + 1 FROM reservations WHERE host_id = ?
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (host_id, id, guest_id, start_date, end_date, total)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET guest_id = ?3, start_date = ?4, end_date = ?5, total = ?6
    WHERE host_id = ?1 AND id = ?2
";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE host_id = ? AND id = ?";

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

fn decimal_column(row: &Row<'_>, column: usize) -> rusqlite::Result<Decimal> {
    let text: String = row.get(column)?;
    Decimal::from_str(&text).map_err(|e| conversion_error(column, e))
}

fn date_column(row: &Row<'_>, column: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(column)?;
    NaiveDate::from_str(&text).map_err(|e| conversion_error(column, e))
}

/// Expects columns: id, email, `standard_rate`, `weekend_rate`.
fn row_to_host(row: &Row<'_>) -> rusqlite::Result<Host> {
    let id: String = row.get(0)?;
    let email: String = row.get(1)?;
    let standard_rate = decimal_column(row, 2)?;
    let weekend_rate = decimal_column(row, 3)?;

    let id = HostId::new(id).map_err(|e| conversion_error(0, e))?;
    Host::new(id, &email, standard_rate, weekend_rate).map_err(|e| conversion_error(1, e))
}

fn row_to_guest(row: &Row<'_>) -> rusqlite::Result<Guest> {
    let id: u32 = row.get(0)?;
    let email: String = row.get(1)?;
    Guest::new(id, &email).map_err(|e| conversion_error(1, e))
}

/// Expects columns: id, `start_date`, `end_date`, total, guest id, guest email.
fn row_to_reservation(row: &Row<'_>, host: &Host) -> rusqlite::Result<Reservation> {
    let id: u32 = row.get(0)?;
    let start = date_column(row, 1)?;
    let end = date_column(row, 2)?;
    let total = decimal_column(row, 3)?;
    let guest_id: u32 = row.get(4)?;
    let guest_email: String = row.get(5)?;
    let guest = Guest::new(guest_id, &guest_email).map_err(|e| conversion_error(5, e))?;

    Ok(Reservation::builder()
        .id(id)
        .start(start)
        .end(end)
        .total(total)
        .host(host.clone())
        .guest(guest)
        .build())
}

/// The columns of a reservation row that must be present to store it.
struct StoredFields<'r> {
    host: &'r Host,
    guest: &'r Guest,
    start: NaiveDate,
    end: NaiveDate,
}

impl<'r> StoredFields<'r> {
    fn of(reservation: &'r Reservation) -> Result<Self> {
        let missing = |field: &str| Error::Validation {
            field: field.into(),
            message: "required to store a reservation".into(),
        };
        Ok(Self {
            host: reservation.host().ok_or_else(|| missing("host"))?,
            guest: reservation.guest().ok_or_else(|| missing("guest"))?,
            start: reservation.start().ok_or_else(|| missing("start"))?,
            end: reservation.end().ok_or_else(|| missing("end"))?,
        })
    }
}

impl Database {
    /// Inserts a host, or replaces the email and rates of an existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if another host already uses the email or the write
    /// fails.
    pub fn upsert_host(&self, host: &Host) -> Result<()> {
        self.conn.execute(
            UPSERT_HOST,
            params![
                host.id().as_str(),
                host.email(),
                host.standard_rate().to_string(),
                host.weekend_rate().to_string(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a guest, or replaces the email of an existing one.
    ///
    /// # Errors
    ///
    /// Returns an error if another guest already uses the email or the write
    /// fails.
    pub fn upsert_guest(&self, guest: &Guest) -> Result<()> {
        self.conn
            .execute(UPSERT_GUEST, params![guest.id(), guest.email()])?;
        Ok(())
    }

    /// Returns every host, ordered by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_hosts(&self) -> Result<Vec<Host>> {
        let mut stmt = self.conn.prepare(LIST_HOSTS)?;
        let hosts = stmt
            .query_map([], row_to_host)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(hosts)
    }

    /// Looks up a host by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_host_by_id(&self, id: &HostId) -> Result<Option<Host>> {
        Ok(self
            .conn
            .query_row(SELECT_HOST_BY_ID, [id.as_str()], row_to_host)
            .optional()?)
    }

    fn write_transaction(&self) -> Result<Transaction<'_>> {
        Ok(Transaction::new_unchecked(
            &self.conn,
            TransactionBehavior::Immediate,
        )?)
    }
}

impl HostRepository for Database {
    fn find_host_by_email(&self, email: &str) -> Result<Option<Host>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .conn
            .query_row(SELECT_HOST_BY_EMAIL, [email], row_to_host)
            .optional()?)
    }
}

impl GuestRepository for Database {
    fn find_guest_by_email(&self, email: &str) -> Result<Option<Guest>> {
        let email = email.trim().to_lowercase();
        Ok(self
            .conn
            .query_row(SELECT_GUEST_BY_EMAIL, [email], row_to_guest)
            .optional()?)
    }
}

impl ReservationRepository for Database {
    fn find_reservations_by_host_id(&self, host_id: &HostId) -> Result<Vec<Reservation>> {
        let Some(host) = self.find_host_by_id(host_id)? else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(SELECT_RESERVATIONS_BY_HOST)?;
        let reservations = stmt
            .query_map([host_id.as_str()], |row| row_to_reservation(row, &host))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reservations)
    }

    /// Assigns the host's next identifier inside an immediate transaction so
    /// that concurrent writers cannot pick the same one.
    fn add_reservation(&self, reservation: &Reservation) -> Result<Reservation> {
        let fields = StoredFields::of(reservation)?;
        let host_id = fields.host.id().as_str();

        let tx = self.write_transaction()?;
        let id: u32 = tx.query_row(NEXT_RESERVATION_ID, [host_id], |row| row.get(0))?;
        tx.execute(
            INSERT_RESERVATION,
            params![
                host_id,
                id,
                fields.guest.id(),
                fields.start.to_string(),
                fields.end.to_string(),
                reservation.total().to_string(),
            ],
        )?;
        tx.commit()?;

        log::debug!("inserted reservation {id} for host {host_id}");
        Ok(reservation.clone().with_id(id))
    }

    fn update_reservation(&self, reservation: &Reservation) -> Result<bool> {
        let fields = StoredFields::of(reservation)?;

        let tx = self.write_transaction()?;
        let changed = tx.execute(
            UPDATE_RESERVATION,
            params![
                fields.host.id().as_str(),
                reservation.id(),
                fields.guest.id(),
                fields.start.to_string(),
                fields.end.to_string(),
                reservation.total().to_string(),
            ],
        )?;
        tx.commit()?;
        Ok(changed > 0)
    }

    fn delete_reservation(&self, reservation: &Reservation) -> Result<bool> {
        let Some(host) = reservation.host() else {
            return Ok(false);
        };

        let tx = self.write_transaction()?;
        let changed = tx.execute(
            DELETE_RESERVATION,
            params![host.id().as_str(), reservation.id()],
        )?;
        tx.commit()?;
        Ok(changed > 0)
    }
}
