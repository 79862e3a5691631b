//! Database CRUD operations for reservations.
//!
//! Listing queries join customers and rooms to populate display fields;
//! those fields are never written back.

use std::time::SystemTime;

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::reservation::{Reservation, ReservationStatus, ReservationSummary, StayRange};
use crate::Money;

use super::connection::Database;
use super::{date_to_sql, sql_to_date, systemtime_to_unix_secs, unix_secs_to_systemtime};

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (customer_id, room_id, check_in_date, check_out_date, total_amount, status, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = r"
    SELECT r.reservation_id, r.customer_id, r.room_id, r.check_in_date, r.check_out_date,
           r.total_amount, r.status, r.created_at, r.updated_at,
           c.first_name, c.last_name, rm.room_number
    FROM reservations r
    JOIN customers c ON r.customer_id = c.customer_id
    JOIN rooms rm ON r.room_id = rm.room_id
    WHERE r.reservation_id = ?
";

const LIST_ALL: &str = r"
    SELECT r.reservation_id, r.customer_id, r.room_id, r.check_in_date, r.check_out_date,
           r.total_amount, r.status, r.created_at, r.updated_at,
           c.first_name, c.last_name, rm.room_number
    FROM reservations r
    JOIN customers c ON r.customer_id = c.customer_id
    JOIN rooms rm ON r.room_id = rm.room_id
    ORDER BY r.created_at DESC, r.reservation_id DESC
";

const LIST_BY_CUSTOMER: &str = r"
    SELECT r.reservation_id, r.customer_id, r.room_id, r.check_in_date, r.check_out_date,
           r.total_amount, r.status, r.created_at, r.updated_at,
           c.first_name, c.last_name, rm.room_number
    FROM reservations r
    JOIN customers c ON r.customer_id = c.customer_id
    JOIN rooms rm ON r.room_id = rm.room_id
    WHERE r.customer_id = ?
    ORDER BY r.check_in_date, r.reservation_id
";

const LIST_ACTIVE: &str = r"
    SELECT r.reservation_id, r.customer_id, r.room_id, r.check_in_date, r.check_out_date,
           r.total_amount, r.status, r.created_at, r.updated_at,
           c.first_name, c.last_name, rm.room_number
    FROM reservations r
    JOIN customers c ON r.customer_id = c.customer_id
    JOIN rooms rm ON r.room_id = rm.room_id
    WHERE r.status IN ('CONFIRMED', 'CHECKED_IN')
    ORDER BY r.check_in_date, r.reservation_id
";

// Canonical half-open overlap: existing [a, b) and requested [x, y)
// conflict iff a < y AND b > x. Dates are ISO text, so string comparison
// is chronological.
const COUNT_CONFLICTS: &str = r"
    SELECT COUNT(*)
    FROM reservations
    WHERE room_id = ?
      AND status IN ('CONFIRMED', 'CHECKED_IN')
      AND check_in_date < ?
      AND check_out_date > ?
";

const UPDATE_STATUS: &str = r"
    UPDATE reservations
    SET status = ?, updated_at = ?
    WHERE reservation_id = ?
";

/// Deserializes a joined reservation summary from a database row.
///
/// Expects the column order produced by the `SELECT ... JOIN` statements
/// in this module.
fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationSummary> {
    let boxed = |e: Box<dyn std::error::Error + Send + Sync>| {
        rusqlite::Error::ToSqlConversionFailure(e)
    };

    let reservation_id: i64 = row.get(0)?;
    let customer_id: i64 = row.get(1)?;
    let room_id: i64 = row.get(2)?;
    let check_in: String = row.get(3)?;
    let check_out: String = row.get(4)?;
    let total_units: i64 = row.get(5)?;
    let status: String = row.get(6)?;
    let created_secs: i64 = row.get(7)?;
    let updated_secs: i64 = row.get(8)?;
    let first_name: String = row.get(9)?;
    let last_name: String = row.get(10)?;
    let room_number: String = row.get(11)?;

    let stay = StayRange::new(sql_to_date(&check_in)?, sql_to_date(&check_out)?)
        .map_err(|e| boxed(Box::new(e)))?;
    let total = Money::from_minor_units(total_units).map_err(|e| boxed(Box::new(e)))?;
    let status = ReservationStatus::parse(&status).map_err(|e| boxed(Box::new(e)))?;

    let reservation = Reservation::builder(reservation_id, customer_id, room_id, stay, total)
        .status(status)
        .created_at(unix_secs_to_systemtime(created_secs))
        .updated_at(unix_secs_to_systemtime(updated_secs))
        .build();

    Ok(ReservationSummary {
        reservation,
        guest_name: format!("{first_name} {last_name}"),
        room_number,
    })
}

fn collect_summaries(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<ReservationSummary>> {
    let mut stmt = conn.prepare(sql)?;
    let summaries = stmt
        .query_map(params, row_to_summary)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
    Ok(summaries)
}

impl Database {
    /// Inserts a new reservation and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including foreign key
    /// violations for unknown customers or rooms).
    pub fn insert_reservation(
        conn: &Connection,
        customer_id: i64,
        room_id: i64,
        stay: &StayRange,
        total_amount: Money,
        status: ReservationStatus,
    ) -> Result<i64> {
        let now_secs = systemtime_to_unix_secs(SystemTime::now())?;
        conn.execute(
            INSERT_RESERVATION,
            params![
                customer_id,
                room_id,
                date_to_sql(stay.check_in()),
                date_to_sql(stay.check_out()),
                total_amount.minor_units(),
                status.as_str(),
                now_secs,
                now_secs,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a reservation with its display fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn reservation_by_id(
        conn: &Connection,
        reservation_id: i64,
    ) -> Result<Option<ReservationSummary>> {
        let mut stmt = conn.prepare(SELECT_BY_ID)?;
        match stmt.query_row(params![reservation_id], row_to_summary) {
            Ok(summary) => Ok(Some(summary)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all reservations, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<ReservationSummary>> {
        collect_summaries(conn, LIST_ALL, [])
    }

    /// Lists a customer's reservations, soonest check-in first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn reservations_for_customer(
        conn: &Connection,
        customer_id: i64,
    ) -> Result<Vec<ReservationSummary>> {
        collect_summaries(conn, LIST_BY_CUSTOMER, params![customer_id])
    }

    /// Lists active reservations (Confirmed or CheckedIn), soonest
    /// check-in first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn active_reservations(conn: &Connection) -> Result<Vec<ReservationSummary>> {
        collect_summaries(conn, LIST_ACTIVE, [])
    }

    /// Availability check for a room and requested stay.
    ///
    /// Returns true iff no reservation for the room with status in
    /// {Confirmed, CheckedIn} overlaps the requested half-open range.
    /// Read-only.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_room_available(conn: &Connection, room_id: i64, stay: &StayRange) -> Result<bool> {
        let count: i64 = conn.query_row(
            COUNT_CONFLICTS,
            params![
                room_id,
                date_to_sql(stay.check_out()),
                date_to_sql(stay.check_in()),
            ],
            |row| row.get(0),
        )?;
        Ok(count == 0)
    }

    /// Sets a reservation's status, bumping `updated_at`.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the reservation was found and updated
    /// - `Ok(false)` if the reservation was not found
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_reservation_status(
        conn: &Connection,
        reservation_id: i64,
        status: ReservationStatus,
    ) -> Result<bool> {
        let now_secs = systemtime_to_unix_secs(SystemTime::now())?;
        let rows_affected = conn.execute(
            UPDATE_STATUS,
            params![status.as_str(), now_secs, reservation_id],
        )?;
        Ok(rows_affected > 0)
    }
}
