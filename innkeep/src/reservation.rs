//! Reservation types for tracking room bookings.
//!
//! This module provides the reservation entity, its status lifecycle, and
//! the half-open stay range used for availability checks.

use std::time::SystemTime;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Money;

/// A half-open stay range `[check_in, check_out)`.
///
/// The check-out day is excluded: a guest leaving on the 15th does not
/// occupy the room on the night of the 15th, so back-to-back stays that
/// touch at a boundary do not overlap.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use innkeep::StayRange;
///
/// let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
///
/// let stay = StayRange::new(d(2024, 1, 10), d(2024, 1, 15)).unwrap();
/// assert_eq!(stay.nights(), 5);
///
/// // Back-to-back stays touch but do not overlap.
/// let next = StayRange::new(d(2024, 1, 15), d(2024, 1, 20)).unwrap();
/// assert!(!stay.overlaps(&next));
///
/// // A zero-night stay is rejected.
/// assert!(StayRange::new(d(2024, 1, 10), d(2024, 1, 10)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Creates a stay range.
    ///
    /// # Errors
    ///
    /// Returns an error unless `check_out` is strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ValidationError> {
        if check_out <= check_in {
            return Err(ValidationError {
                field: "check_out_date".into(),
                message: format!(
                    "check-out date {check_out} must be strictly after check-in date {check_in}"
                ),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date (inclusive).
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date (exclusive).
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights, the billing unit.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Canonical half-open interval overlap test.
    ///
    /// Two ranges `[a, b)` and `[x, y)` overlap iff `a < y && b > x`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && self.check_out > other.check_in
    }
}

impl std::fmt::Display for StayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}

/// Lifecycle status of a reservation.
///
/// Confirmed and CheckedIn reservations are *active*: they count against a
/// room's availability. Cancelled and CheckedOut are terminal for the
/// booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Booked and counting against availability.
    Confirmed,
    /// The guest has arrived.
    CheckedIn,
    /// The stay is complete.
    CheckedOut,
    /// Soft-cancelled; the row is retained.
    Cancelled,
}

impl ReservationStatus {
    /// The storage representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parses a status from its storage representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown reservation status '{s}'"),
            }),
        }
    }

    /// Whether this status counts against room availability.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted room booking.
///
/// The total amount is computed once at booking time (nights x nightly
/// price) and frozen; it is never re-derived from the room's current
/// price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    reservation_id: i64,
    customer_id: i64,
    room_id: i64,
    stay: StayRange,
    total_amount: Money,
    status: ReservationStatus,
    created_at: SystemTime,
    updated_at: SystemTime,
}

impl Reservation {
    /// Creates a new reservation builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use innkeep::{Money, Reservation, StayRange};
    ///
    /// let stay = StayRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
    /// )
    /// .unwrap();
    /// let total = Money::from_minor_units(500_000).unwrap();
    ///
    /// let reservation = Reservation::builder(1, 7, 3, stay, total).build();
    /// assert!(reservation.status().is_active());
    /// ```
    #[must_use]
    pub fn builder(
        reservation_id: i64,
        customer_id: i64,
        room_id: i64,
        stay: StayRange,
        total_amount: Money,
    ) -> ReservationBuilder {
        ReservationBuilder {
            reservation_id,
            customer_id,
            room_id,
            stay,
            total_amount,
            status: ReservationStatus::Confirmed,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns the server-assigned reservation id.
    #[must_use]
    pub const fn reservation_id(&self) -> i64 {
        self.reservation_id
    }

    /// Returns the booking customer's id.
    #[must_use]
    pub const fn customer_id(&self) -> i64 {
        self.customer_id
    }

    /// Returns the booked room's id.
    #[must_use]
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// Returns the stay range.
    #[must_use]
    pub const fn stay(&self) -> &StayRange {
        &self.stay
    }

    /// Returns the frozen total amount.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> SystemTime {
        self.updated_at
    }
}

/// Builder for `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    reservation_id: i64,
    customer_id: i64,
    room_id: i64,
    stay: StayRange,
    total_amount: Money,
    status: ReservationStatus,
    created_at: Option<SystemTime>,
    updated_at: Option<SystemTime>,
}

impl ReservationBuilder {
    /// Sets the lifecycle status (defaults to Confirmed).
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the last-update timestamp.
    #[must_use]
    pub fn updated_at(mut self, updated_at: SystemTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the reservation.
    #[must_use]
    pub fn build(self) -> Reservation {
        let now = SystemTime::now();
        Reservation {
            reservation_id: self.reservation_id,
            customer_id: self.customer_id,
            room_id: self.room_id,
            stay: self.stay,
            total_amount: self.total_amount,
            status: self.status,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}

/// A reservation joined with its display fields.
///
/// Guest name and room number are populated only on read, via JOIN; they
/// are never persisted on the reservation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationSummary {
    /// The underlying reservation row.
    #[serde(flatten)]
    pub reservation: Reservation,
    /// The guest's full name, from the customers table.
    pub guest_name: String,
    /// The human-readable room number, from the rooms table.
    pub room_number: String,
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay(ci: (i32, u32, u32), co: (i32, u32, u32)) -> StayRange {
        StayRange::new(date(ci.0, ci.1, ci.2), date(co.0, co.1, co.2)).unwrap()
    }

    // Property-based tests for the half-open interval algebra.
    mod property_tests {
        use super::*;
        use chrono::Days;
        use proptest::prelude::*;

        fn base() -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        }

        fn stay_strategy() -> impl Strategy<Value = StayRange> {
            (0u64..2000, 1u64..60).prop_map(|(start, len)| {
                let check_in = base().checked_add_days(Days::new(start)).unwrap();
                let check_out = check_in.checked_add_days(Days::new(len)).unwrap();
                StayRange::new(check_in, check_out).unwrap()
            })
        }

        proptest! {
            // Overlap is symmetric: a overlaps b iff b overlaps a.
            #[test]
            fn prop_overlap_symmetric(a in stay_strategy(), b in stay_strategy()) {
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }
        }

        proptest! {
            // Every non-empty range overlaps itself.
            #[test]
            fn prop_overlap_reflexive(a in stay_strategy()) {
                prop_assert!(a.overlaps(&a));
            }
        }

        proptest! {
            // A stay never overlaps the back-to-back stay starting at its
            // check-out date.
            #[test]
            fn prop_back_to_back_disjoint(a in stay_strategy(), len in 1u64..60) {
                let next_out = a.check_out().checked_add_days(Days::new(len)).unwrap();
                let next = StayRange::new(a.check_out(), next_out).unwrap();
                prop_assert!(!a.overlaps(&next));
                prop_assert!(!next.overlaps(&a));
            }
        }

        proptest! {
            // Nights always equals the calendar-day difference.
            #[test]
            fn prop_nights_is_day_difference(a in stay_strategy()) {
                prop_assert_eq!(a.nights(), (a.check_out() - a.check_in()).num_days());
                prop_assert!(a.nights() >= 1);
            }
        }
    }

    #[test]
    fn test_stay_range_rejects_equal_dates() {
        let result = StayRange::new(date(2024, 1, 10), date(2024, 1, 10));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field, "check_out_date");
    }

    #[test]
    fn test_stay_range_rejects_reversed_dates() {
        let result = StayRange::new(date(2024, 1, 15), date(2024, 1, 10));
        assert!(result.is_err());
    }

    #[test]
    fn test_nights() {
        assert_eq!(stay((2024, 1, 10), (2024, 1, 15)).nights(), 5);
        assert_eq!(stay((2024, 1, 10), (2024, 1, 11)).nights(), 1);
        // Across a month boundary
        assert_eq!(stay((2024, 1, 30), (2024, 2, 2)).nights(), 3);
    }

    #[test]
    fn test_back_to_back_stays_do_not_overlap() {
        let existing = stay((2024, 1, 10), (2024, 1, 15));
        let requested = stay((2024, 1, 15), (2024, 1, 20));
        assert!(!existing.overlaps(&requested));
    }

    #[test]
    fn test_contained_stay_overlaps() {
        let existing = stay((2024, 1, 10), (2024, 1, 15));
        let requested = stay((2024, 1, 14), (2024, 1, 16));
        assert!(existing.overlaps(&requested));
    }

    #[test]
    fn test_superset_stay_overlaps() {
        let existing = stay((2024, 1, 10), (2024, 1, 15));
        let requested = stay((2024, 1, 1), (2024, 1, 31));
        assert!(existing.overlaps(&requested));
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ReservationStatus::Confirmed,
            ReservationStatus::CheckedIn,
            ReservationStatus::CheckedOut,
            ReservationStatus::Cancelled,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(ReservationStatus::parse("PENDING").is_err());
    }

    #[test]
    fn test_status_activity() {
        assert!(ReservationStatus::Confirmed.is_active());
        assert!(ReservationStatus::CheckedIn.is_active());
        assert!(!ReservationStatus::CheckedOut.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
    }

    #[test]
    fn test_reservation_builder_defaults() {
        let total = Money::from_minor_units(500_000).unwrap();
        let reservation = Reservation::builder(1, 2, 3, stay((2024, 1, 10), (2024, 1, 12)), total)
            .build();

        assert_eq!(reservation.reservation_id(), 1);
        assert_eq!(reservation.customer_id(), 2);
        assert_eq!(reservation.room_id(), 3);
        assert_eq!(reservation.status(), ReservationStatus::Confirmed);
        assert_eq!(reservation.total_amount(), total);
    }

    #[test]
    fn test_reservation_builder_with_status() {
        let total = Money::from_minor_units(100).unwrap();
        let reservation = Reservation::builder(1, 2, 3, stay((2024, 1, 10), (2024, 1, 12)), total)
            .status(ReservationStatus::Cancelled)
            .build();

        assert_eq!(reservation.status(), ReservationStatus::Cancelled);
    }

    #[test]
    fn test_reservation_serde() {
        let total = Money::from_minor_units(250_050).unwrap();
        let reservation = Reservation::builder(9, 2, 3, stay((2024, 1, 10), (2024, 1, 12)), total)
            .build();

        let json = serde_json::to_string(&reservation).unwrap();
        let deserialized: Reservation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, reservation);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "phone_number".to_string(),
            message: "must be exactly 10 digits".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("phone_number"));
        assert!(display.contains("10 digits"));
    }
}
