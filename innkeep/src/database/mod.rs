//! Database layer for persistent storage of rooms, customers, and
//! reservations.
//!
//! This module provides a SQLite-based storage layer: connection
//! management, schema versioning, and CRUD operations per entity. Query
//! functions are associated functions taking a `&Connection` so they
//! compose inside transactions owned by the lifecycle operations.
//!
//! # Examples
//!
//! ```no_run
//! use innkeep::database::{Database, DatabaseConfig};
//! use innkeep::{Money, NewRoom, RoomType};
//!
//! let config = DatabaseConfig::new("/tmp/innkeep.db");
//! let db = Database::open(config).unwrap();
//!
//! let price = Money::from_minor_units(250_000).unwrap();
//! let room = NewRoom::builder("204", RoomType::Double, price).build().unwrap();
//! let room_id = Database::insert_room(db.connection(), &room).unwrap();
//!
//! for room in Database::list_rooms(db.connection()).unwrap() {
//!     println!("{} ({})", room.room_number(), room.status());
//! }
//! ```

mod config;
mod connection;
mod customers;
pub mod migrations;
mod reservations;
mod rooms;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};

use std::time::{Duration, SystemTime};

use chrono::NaiveDate;

use crate::error::Result;

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| crate::error::Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

/// Formats a date for storage.
///
/// Dates are stored as ISO-8601 text, so lexicographic comparison in SQL
/// is chronological.
pub(super) fn date_to_sql(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a stored date column.
pub(super) fn sql_to_date(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}
