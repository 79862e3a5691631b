#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # innkeep
//!
//! A library for managing hotel room bookings against a relational store.
//!
//! The core is the reservation lifecycle: availability checking over
//! half-open stay ranges, booking with customer dedup-or-create and frozen
//! pricing, and guarded cancellation and stay transitions. Record access
//! is SQLite-backed.
//!
//! ## Core Types
//!
//! - [`Room`], [`RoomType`], [`RoomStatus`]: the bookable inventory
//! - [`GuestProfile`] and [`Customer`]: validated guest identity
//! - [`StayRange`], [`Reservation`], [`ReservationStatus`]: bookings
//! - [`Money`]: amounts in minor currency units
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use innkeep::StayRange;
//!
//! let stay = StayRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//! )
//! .unwrap();
//! assert_eq!(stay.nights(), 5);
//! ```

pub mod config;
pub mod customer;
pub mod database;
pub mod error;
pub mod logging;
pub mod money;
pub mod operations;
pub mod reservation;
pub mod room;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use customer::{Customer, GuestProfile};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result, RoomUnavailableReason};
pub use logging::{init_logger, LogLevel, Logger};
pub use money::Money;
pub use operations::{
    book, cancel, check_in, check_out, BookingReceipt, BookingRequest, CancellationReceipt,
};
pub use reservation::{Reservation, ReservationStatus, ReservationSummary, StayRange};
pub use room::{NewRoom, Room, RoomStatus, RoomType};
