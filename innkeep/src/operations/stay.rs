//! Guarded stay transitions: check-in and check-out.
//!
//! The booking flow itself never drives these; they are operator actions
//! on an existing reservation.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationStatus;
use crate::room::RoomStatus;

/// Transitions a Confirmed reservation to CheckedIn.
///
/// # Errors
///
/// - [`Error::NotFound`] if the reservation does not exist
/// - [`Error::InvalidStatusTransition`] unless the reservation is
///   currently Confirmed
/// - [`Error::Database`] on store failure
pub fn check_in(db: &mut Database, reservation_id: i64) -> Result<()> {
    transition(
        db,
        reservation_id,
        ReservationStatus::Confirmed,
        ReservationStatus::CheckedIn,
        None,
    )
}

/// Transitions a CheckedIn reservation to CheckedOut and returns the room
/// to Available.
///
/// # Errors
///
/// - [`Error::NotFound`] if the reservation does not exist
/// - [`Error::InvalidStatusTransition`] unless the reservation is
///   currently CheckedIn
/// - [`Error::Database`] on store failure
pub fn check_out(db: &mut Database, reservation_id: i64) -> Result<()> {
    transition(
        db,
        reservation_id,
        ReservationStatus::CheckedIn,
        ReservationStatus::CheckedOut,
        Some(RoomStatus::Available),
    )
}

fn transition(
    db: &mut Database,
    reservation_id: i64,
    expected: ReservationStatus,
    to: ReservationStatus,
    room_status: Option<RoomStatus>,
) -> Result<()> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let summary =
        Database::reservation_by_id(&tx, reservation_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {reservation_id}"),
        })?;

    let from = summary.reservation.status();
    if from != expected {
        return Err(Error::InvalidStatusTransition { from, to });
    }

    Database::update_reservation_status(&tx, reservation_id, to)?;
    if let Some(status) = room_status {
        Database::update_room_status(&tx, summary.reservation.room_id(), status)?;
    }

    tx.commit()?;

    log::debug!("reservation {reservation_id}: {from} -> {to}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_customer, seed_room};
    use crate::{Money, StayRange};
    use chrono::NaiveDate;

    fn seed_reservation(db: &Database, status: ReservationStatus) -> (i64, i64) {
        let conn = db.connection();
        let customer_id = seed_customer(conn, "asha.rao@example.com", "9876543210");
        let room_id = seed_room(conn, "204", 250_000);
        let stay = StayRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .unwrap();
        let reservation_id = Database::insert_reservation(
            conn,
            customer_id,
            room_id,
            &stay,
            Money::from_minor_units(100).unwrap(),
            status,
        )
        .unwrap();
        (reservation_id, room_id)
    }

    #[test]
    fn test_check_in_confirmed() {
        let mut db = create_test_database();
        let (reservation_id, _) = seed_reservation(&db, ReservationStatus::Confirmed);

        check_in(&mut db, reservation_id).unwrap();

        let summary = Database::reservation_by_id(db.connection(), reservation_id)
            .unwrap()
            .unwrap();
        assert_eq!(summary.reservation.status(), ReservationStatus::CheckedIn);
    }

    #[test]
    fn test_check_in_cancelled_rejected() {
        let mut db = create_test_database();
        let (reservation_id, _) = seed_reservation(&db, ReservationStatus::Cancelled);

        let result = check_in(&mut db, reservation_id);
        assert!(matches!(
            result,
            Err(Error::InvalidStatusTransition {
                from: ReservationStatus::Cancelled,
                to: ReservationStatus::CheckedIn,
            })
        ));
    }

    #[test]
    fn test_check_in_twice_rejected() {
        let mut db = create_test_database();
        let (reservation_id, _) = seed_reservation(&db, ReservationStatus::Confirmed);

        check_in(&mut db, reservation_id).unwrap();
        assert!(check_in(&mut db, reservation_id).is_err());
    }

    #[test]
    fn test_check_out_frees_room() {
        let mut db = create_test_database();
        let (reservation_id, room_id) = seed_reservation(&db, ReservationStatus::CheckedIn);
        Database::update_room_status(db.connection(), room_id, RoomStatus::Occupied).unwrap();

        check_out(&mut db, reservation_id).unwrap();

        let summary = Database::reservation_by_id(db.connection(), reservation_id)
            .unwrap()
            .unwrap();
        assert_eq!(summary.reservation.status(), ReservationStatus::CheckedOut);

        let room = Database::room_by_id(db.connection(), room_id)
            .unwrap()
            .unwrap();
        assert_eq!(room.status(), RoomStatus::Available);
    }

    #[test]
    fn test_check_out_requires_checked_in() {
        let mut db = create_test_database();
        let (reservation_id, _) = seed_reservation(&db, ReservationStatus::Confirmed);

        let result = check_out(&mut db, reservation_id);
        assert!(matches!(
            result,
            Err(Error::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_transition_unknown_reservation() {
        let mut db = create_test_database();
        assert!(matches!(
            check_in(&mut db, 999),
            Err(Error::NotFound { .. })
        ));
        assert!(matches!(
            check_out(&mut db, 999),
            Err(Error::NotFound { .. })
        ));
    }
}
