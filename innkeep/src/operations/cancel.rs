//! Cancellation operation: guarded soft transition to Cancelled.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationStatus;
use crate::room::RoomStatus;

/// Outcome of a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationReceipt {
    /// The cancelled reservation's id.
    pub reservation_id: i64,
    /// The associated room's id.
    pub room_id: i64,
    /// The associated room's number, now available again.
    pub room_number: String,
}

/// Cancels a reservation.
///
/// Cancellation is a soft transition: the row is kept with status
/// Cancelled. The room's status flag is reset to Available
/// unconditionally, without checking for other active reservations on the
/// room. Both writes happen in one IMMEDIATE transaction.
///
/// # Errors
///
/// - [`Error::NotFound`] if the reservation does not exist
/// - [`Error::AlreadyCancelled`] if it is already cancelled (no mutation)
/// - [`Error::CannotCancelCompleted`] if it is checked out
/// - [`Error::Database`] on store failure
pub fn cancel(db: &mut Database, reservation_id: i64) -> Result<CancellationReceipt> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let summary =
        Database::reservation_by_id(&tx, reservation_id)?.ok_or_else(|| Error::NotFound {
            resource: format!("reservation {reservation_id}"),
        })?;

    match summary.reservation.status() {
        ReservationStatus::Cancelled => return Err(Error::AlreadyCancelled { reservation_id }),
        ReservationStatus::CheckedOut => {
            return Err(Error::CannotCancelCompleted { reservation_id })
        }
        ReservationStatus::Confirmed | ReservationStatus::CheckedIn => {}
    }

    Database::update_reservation_status(&tx, reservation_id, ReservationStatus::Cancelled)?;
    Database::update_room_status(&tx, summary.reservation.room_id(), RoomStatus::Available)?;

    tx.commit()?;

    log::info!(
        "reservation {reservation_id} cancelled, room {} available again",
        summary.room_number
    );

    Ok(CancellationReceipt {
        reservation_id,
        room_id: summary.reservation.room_id(),
        room_number: summary.room_number,
    })
}
