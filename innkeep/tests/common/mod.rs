//! Common test utilities for integration tests.

use chrono::{Days, NaiveDate};
use tempfile::TempDir;

use innkeep::{BookingRequest, Database, DatabaseConfig, Money, NewRoom, RoomType};

/// Opens a database in a fresh temporary directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
#[allow(dead_code)]
pub fn open_test_db() -> (Database, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = DatabaseConfig::new(dir.path().join("innkeep.db"));
    let db = Database::open(config).expect("open database");
    (db, dir)
}

/// Inserts a Double room and returns its id.
#[allow(dead_code)]
pub fn seed_room(db: &Database, room_number: &str, price_minor_units: i64) -> i64 {
    let price = Money::from_minor_units(price_minor_units).unwrap();
    let room = NewRoom::builder(room_number, RoomType::Double, price)
        .floor_number(2)
        .build()
        .unwrap();
    Database::insert_room(db.connection(), &room).unwrap()
}

/// A calendar date `days_from_now` days in the future (local time).
#[allow(dead_code)]
pub fn future(days_from_now: u64) -> NaiveDate {
    chrono::Local::now()
        .date_naive()
        .checked_add_days(Days::new(days_from_now))
        .unwrap()
}

/// Builder for booking requests with sensible defaults.
#[allow(dead_code)]
pub struct BookingFixture {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    id_proof: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Creates a fixture for a two-night stay starting tomorrow.
    pub fn new() -> Self {
        Self {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha.rao@example.com".into(),
            phone_number: "9876543210".into(),
            id_proof: "passport X123".into(),
            check_in: future(1),
            check_out: future(3),
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone_number = phone.into();
        self
    }

    pub fn with_dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn request(self, room_id: i64) -> BookingRequest {
        BookingRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            id_proof: self.id_proof,
            room_id,
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}
