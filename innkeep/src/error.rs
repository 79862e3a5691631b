//! Error types for the innkeep library.
//!
//! This module provides the error hierarchy for all operations in the
//! innkeep library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::reservation::ReservationStatus;

/// Result type alias for operations that may fail with an innkeep error.
///
/// # Examples
///
/// ```
/// use innkeep::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
///
/// This enum encompasses all failure classes the booking operations can
/// report: recoverable input problems, missing entities, booking
/// conflicts, invalid lifecycle transitions, and store failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred (malformed or out-of-range input).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The room's status flag does not permit booking.
    #[error("room {room_number} unavailable: {reason}")]
    RoomUnavailable {
        /// The human-readable room number.
        room_number: String,
        /// The reason the room cannot be booked.
        reason: RoomUnavailableReason,
    },

    /// An active reservation already covers part of the requested stay.
    #[error("booking conflict: {details}")]
    BookingConflict {
        /// Details about the conflicting dates.
        details: String,
    },

    /// The reservation is already cancelled; cancelling again is a no-op
    /// failure.
    #[error("reservation {reservation_id} is already cancelled")]
    AlreadyCancelled {
        /// The reservation that was already cancelled.
        reservation_id: i64,
    },

    /// The reservation has been checked out and can no longer be cancelled.
    #[error("reservation {reservation_id} is checked out and cannot be cancelled")]
    CannotCancelCompleted {
        /// The completed reservation.
        reservation_id: i64,
    },

    /// A lifecycle transition was requested that the current status does
    /// not permit.
    #[error("invalid status transition from {from} to {to}")]
    InvalidStatusTransition {
        /// The reservation's current status.
        from: ReservationStatus,
        /// The requested status.
        to: ReservationStatus,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The schema version this client expects.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

/// Reason why a room cannot be booked based on its status flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomUnavailableReason {
    /// The room's status flag is set to occupied.
    Occupied,
    /// The room is closed for maintenance.
    Maintenance,
}

impl std::fmt::Display for RoomUnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Occupied => write!(f, "occupied"),
            Self::Maintenance => write!(f, "under maintenance"),
        }
    }
}

// Additional conversions for better ergonomics

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::money::InvalidMoneyError> for Error {
    fn from(err: crate::money::InvalidMoneyError) -> Self {
        Self::Validation {
            field: "amount".into(),
            message: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a missing entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::Error;
    ///
    /// let err = Error::NotFound { resource: "room 12".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error belongs to the conflict class (room flagged
    /// unavailable, or an overlapping active reservation).
    ///
    /// # Examples
    ///
    /// ```
    /// use innkeep::Error;
    ///
    /// let err = Error::BookingConflict { details: "room 12 is booked".to_string() };
    /// assert!(err.is_conflict());
    /// ```
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RoomUnavailable { .. } | Self::BookingConflict { .. }
        )
    }

    /// Check if error is recoverable by re-prompting the operator.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
