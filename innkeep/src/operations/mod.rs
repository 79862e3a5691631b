//! Reservation lifecycle operations.
//!
//! Each operation validates its input up front, then performs all of its
//! reads and writes inside a single IMMEDIATE transaction, so a failure
//! partway through leaves no partial state (e.g. a Confirmed reservation
//! against a room still flagged Available).
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use innkeep::database::{Database, DatabaseConfig};
//! use innkeep::operations::{book, BookingRequest};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/innkeep.db")).unwrap();
//!
//! let request = BookingRequest {
//!     first_name: "Asha".into(),
//!     last_name: "Rao".into(),
//!     email: "asha.rao@example.com".into(),
//!     phone_number: "9876543210".into(),
//!     id_proof: "passport X123".into(),
//!     room_id: 1,
//!     check_in: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
//!     check_out: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
//! };
//!
//! let receipt = book(&mut db, &request).unwrap();
//! println!("reservation {} total {}", receipt.reservation_id, receipt.total_amount);
//! ```

pub mod book;
pub mod cancel;
pub mod stay;

pub use book::{book, BookingReceipt, BookingRequest};
pub use cancel::{cancel, CancellationReceipt};
pub use stay::{check_in, check_out};
