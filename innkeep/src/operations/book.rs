//! Booking operation: validation, customer resolution, availability
//! check, pricing, and persistence as one logical operation.

use chrono::NaiveDate;
use rusqlite::TransactionBehavior;

use crate::customer::GuestProfile;
use crate::database::Database;
use crate::error::{Error, Result, RoomUnavailableReason};
use crate::reservation::{ReservationStatus, StayRange};
use crate::room::RoomStatus;
use crate::Money;

/// Input for a booking, as collected from the operator.
///
/// Guest fields arrive as raw strings; validation happens inside
/// [`book`], which short-circuits on the first offending field.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Guest first name (required, trimmed).
    pub first_name: String,
    /// Guest last name (required, trimmed).
    pub last_name: String,
    /// Guest email, used for customer dedup.
    pub email: String,
    /// Guest phone number, the dedup fallback.
    pub phone_number: String,
    /// Free-text id proof.
    pub id_proof: String,
    /// The room to book.
    pub room_id: i64,
    /// Check-in date (inclusive).
    pub check_in: NaiveDate,
    /// Check-out date (exclusive).
    pub check_out: NaiveDate,
}

/// Outcome of a successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// The new reservation's id.
    pub reservation_id: i64,
    /// The booking customer's id.
    pub customer_id: i64,
    /// Whether a new customer row was created for this booking.
    pub created_customer: bool,
    /// The booked room's number.
    pub room_number: String,
    /// Number of nights billed.
    pub nights: i64,
    /// The frozen total amount.
    pub total_amount: Money,
}

/// Creates a reservation.
///
/// Validation happens in order, each step short-circuiting: guest fields,
/// then the date range, then the past-date rule (check-in equal to today
/// is allowed). The room's status flag and the date-range availability
/// check are two independent gates; both must pass. Customer resolution,
/// pricing, the reservation insert, and the room status update then run
/// inside one IMMEDIATE transaction.
///
/// # Errors
///
/// - [`Error::Validation`] for malformed guest fields or dates
/// - [`Error::NotFound`] if the room does not exist
/// - [`Error::RoomUnavailable`] if the room's status flag is not Available
/// - [`Error::BookingConflict`] if an active reservation overlaps the stay
/// - [`Error::Database`] on store failure
pub fn book(db: &mut Database, request: &BookingRequest) -> Result<BookingReceipt> {
    let guest = GuestProfile::new(
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.phone_number,
        &request.id_proof,
    )?;
    let stay = StayRange::new(request.check_in, request.check_out)?;

    if request.check_in < today() {
        return Err(Error::Validation {
            field: "check_in_date".into(),
            message: format!("check-in date {} cannot be in the past", request.check_in),
        });
    }

    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let room = Database::room_by_id(&tx, request.room_id)?.ok_or_else(|| Error::NotFound {
        resource: format!("room {}", request.room_id),
    })?;

    match room.status() {
        RoomStatus::Available => {}
        RoomStatus::Occupied => {
            return Err(Error::RoomUnavailable {
                room_number: room.room_number().to_string(),
                reason: RoomUnavailableReason::Occupied,
            })
        }
        RoomStatus::Maintenance => {
            return Err(Error::RoomUnavailable {
                room_number: room.room_number().to_string(),
                reason: RoomUnavailableReason::Maintenance,
            })
        }
    }

    if !Database::is_room_available(&tx, room.room_id(), &stay)? {
        return Err(Error::BookingConflict {
            details: format!("room {} is already booked for {stay}", room.room_number()),
        });
    }

    // Resolve the customer: by email, else by phone, else create.
    let (customer_id, created_customer) = match Database::customer_by_email(&tx, guest.email())? {
        Some(existing) => (existing.customer_id(), false),
        None => match Database::customer_by_phone(&tx, guest.phone_number())? {
            Some(existing) => (existing.customer_id(), false),
            None => {
                let id = Database::insert_customer(&tx, &guest)?;
                log::debug!("created customer {id} for {}", guest.full_name());
                (id, true)
            }
        },
    };

    let nights = stay.nights();
    let total_amount = room.price_per_night().checked_mul(nights)?;

    let reservation_id = Database::insert_reservation(
        &tx,
        customer_id,
        room.room_id(),
        &stay,
        total_amount,
        ReservationStatus::Confirmed,
    )?;
    Database::update_room_status(&tx, room.room_id(), RoomStatus::Occupied)?;

    tx.commit()?;

    log::info!(
        "reservation {reservation_id}: room {} for {stay}, {nights} night(s), total {total_amount}",
        room.room_number()
    );

    Ok(BookingReceipt {
        reservation_id,
        customer_id,
        created_customer,
        room_number: room.room_number().to_string(),
        nights,
        total_amount,
    })
}

/// The operator's local calendar date.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
