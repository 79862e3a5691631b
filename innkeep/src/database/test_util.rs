//! Shared test utilities for database unit tests.

use rusqlite::Connection;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{GuestProfile, Money, NewRoom, RoomType};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a valid guest profile with the given contact details.
#[must_use]
pub fn sample_guest(email: &str, phone: &str) -> GuestProfile {
    GuestProfile::new("Asha", "Rao", email, phone, "passport X123").unwrap()
}

/// Inserts a room and returns its id.
pub fn seed_room(conn: &Connection, room_number: &str, price_minor_units: i64) -> i64 {
    let price = Money::from_minor_units(price_minor_units).unwrap();
    let room = NewRoom::builder(room_number, RoomType::Double, price)
        .floor_number(2)
        .build()
        .unwrap();
    Database::insert_room(conn, &room).unwrap()
}

/// Inserts a customer and returns their id.
pub fn seed_customer(conn: &Connection, email: &str, phone: &str) -> i64 {
    Database::insert_customer(conn, &sample_guest(email, phone)).unwrap()
}
