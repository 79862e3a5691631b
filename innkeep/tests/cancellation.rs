//! Cancellation and stay-transition tests over the full lifecycle.

mod common;

use common::{open_test_db, seed_room, BookingFixture};
use innkeep::{
    book, cancel, check_in, check_out, Database, Error, ReservationStatus, RoomStatus,
};

#[test]
fn cancelling_frees_the_room_for_rebooking() -> anyhow::Result<()> {
    let (mut db, _dir) = open_test_db();
    let room_id = seed_room(&db, "204", 250_000);

    let receipt = book(&mut db, &BookingFixture::new().request(room_id))?;
    let cancelled = cancel(&mut db, receipt.reservation_id)?;
    assert_eq!(cancelled.room_number, "204");

    let summary = Database::reservation_by_id(db.connection(), receipt.reservation_id)?
        .expect("row is kept after cancellation");
    assert_eq!(summary.reservation.status(), ReservationStatus::Cancelled);

    let room = Database::room_by_id(db.connection(), room_id)?.unwrap();
    assert_eq!(room.status(), RoomStatus::Available);

    // The same dates can be booked again: both gates are clear
    let rebooked = book(
        &mut db,
        &BookingFixture::new()
            .with_email("vikram@example.com")
            .with_phone("1234567890")
            .request(room_id),
    )?;
    assert_ne!(rebooked.reservation_id, receipt.reservation_id);
    Ok(())
}

#[test]
fn cancelling_twice_reports_already_cancelled() {
    let (mut db, _dir) = open_test_db();
    let room_id = seed_room(&db, "204", 250_000);

    let receipt = book(&mut db, &BookingFixture::new().request(room_id)).unwrap();
    cancel(&mut db, receipt.reservation_id).unwrap();

    let err = cancel(&mut db, receipt.reservation_id).unwrap_err();
    assert!(matches!(err, Error::AlreadyCancelled { reservation_id } if reservation_id == receipt.reservation_id));
}

#[test]
fn cancelling_a_completed_stay_is_rejected() {
    let (mut db, _dir) = open_test_db();
    let room_id = seed_room(&db, "204", 250_000);

    let receipt = book(&mut db, &BookingFixture::new().request(room_id)).unwrap();
    check_in(&mut db, receipt.reservation_id).unwrap();
    check_out(&mut db, receipt.reservation_id).unwrap();

    let err = cancel(&mut db, receipt.reservation_id).unwrap_err();
    assert!(matches!(err, Error::CannotCancelCompleted { .. }));
}

#[test]
fn cancelling_unknown_reservation_is_not_found() {
    let (mut db, _dir) = open_test_db();
    let err = cancel(&mut db, 12345).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn full_stay_lifecycle() -> anyhow::Result<()> {
    let (mut db, _dir) = open_test_db();
    let room_id = seed_room(&db, "204", 250_000);

    let receipt = book(&mut db, &BookingFixture::new().request(room_id))?;

    check_in(&mut db, receipt.reservation_id)?;
    let summary = Database::reservation_by_id(db.connection(), receipt.reservation_id)?.unwrap();
    assert_eq!(summary.reservation.status(), ReservationStatus::CheckedIn);

    check_out(&mut db, receipt.reservation_id)?;
    let summary = Database::reservation_by_id(db.connection(), receipt.reservation_id)?.unwrap();
    assert_eq!(summary.reservation.status(), ReservationStatus::CheckedOut);

    // Check-out returns the room to the pool
    let room = Database::room_by_id(db.connection(), room_id)?.unwrap();
    assert_eq!(room.status(), RoomStatus::Available);
    Ok(())
}

#[test]
fn stay_transitions_are_guarded() {
    let (mut db, _dir) = open_test_db();
    let room_id = seed_room(&db, "204", 250_000);

    let receipt = book(&mut db, &BookingFixture::new().request(room_id)).unwrap();

    // Cannot check out before checking in
    assert!(matches!(
        check_out(&mut db, receipt.reservation_id).unwrap_err(),
        Error::InvalidStatusTransition { .. }
    ));

    // A cancelled reservation cannot be checked in
    cancel(&mut db, receipt.reservation_id).unwrap();
    assert!(matches!(
        check_in(&mut db, receipt.reservation_id).unwrap_err(),
        Error::InvalidStatusTransition { .. }
    ));
}
