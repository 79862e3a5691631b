//! Room types for the hotel inventory.

use serde::{Deserialize, Serialize};

use crate::reservation::ValidationError;
use crate::Money;

/// The category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// One guest.
    Single,
    /// Two guests.
    Double,
    /// A multi-room suite.
    Suite,
    /// A premium room.
    Deluxe,
}

impl RoomType {
    /// The storage representation of this room type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Double => "DOUBLE",
            Self::Suite => "SUITE",
            Self::Deluxe => "DELUXE",
        }
    }

    /// Parses a room type from its storage representation
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known room type.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_ascii_uppercase().as_str() {
            "SINGLE" => Ok(Self::Single),
            "DOUBLE" => Ok(Self::Double),
            "SUITE" => Ok(Self::Suite),
            "DELUXE" => Ok(Self::Deluxe),
            _ => Err(ValidationError {
                field: "room_type".into(),
                message: format!("unknown room type '{s}'"),
            }),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The maintained status flag of a room.
///
/// The flag is set opportunistically by the booking flow (Occupied on
/// create, Available on cancel) and is not derived from the reservation
/// set, so it can drift from true date-range availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Open for booking.
    Available,
    /// Flagged as occupied by an active reservation.
    Occupied,
    /// Closed for maintenance.
    Maintenance,
}

impl RoomStatus {
    /// The storage representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Occupied => "OCCUPIED",
            Self::Maintenance => "MAINTENANCE",
        }
    }

    /// Parses a room status from its storage representation
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(Self::Available),
            "OCCUPIED" => Ok(Self::Occupied),
            "MAINTENANCE" => Ok(Self::Maintenance),
            _ => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown room status '{s}'"),
            }),
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room definition to be registered, before an id is assigned.
///
/// # Examples
///
/// ```
/// use innkeep::{Money, NewRoom, RoomType};
///
/// let price = Money::from_minor_units(250_000).unwrap();
/// let room = NewRoom::builder("204", RoomType::Double, price)
///     .floor_number(2)
///     .max_occupancy(2)
///     .build()
///     .unwrap();
/// assert_eq!(room.room_number(), "204");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    room_number: String,
    room_type: RoomType,
    price_per_night: Money,
    status: RoomStatus,
    floor_number: i32,
    max_occupancy: u32,
}

impl NewRoom {
    /// Creates a room builder with the required fields.
    ///
    /// Defaults: status Available, floor 1, max occupancy 2.
    #[must_use]
    pub fn builder(
        room_number: impl Into<String>,
        room_type: RoomType,
        price_per_night: Money,
    ) -> NewRoomBuilder {
        NewRoomBuilder {
            room_number: room_number.into(),
            room_type,
            price_per_night,
            status: RoomStatus::Available,
            floor_number: 1,
            max_occupancy: 2,
        }
    }

    /// Returns the human-readable room number.
    #[must_use]
    pub fn room_number(&self) -> &str {
        &self.room_number
    }

    /// Returns the room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price_per_night(&self) -> Money {
        self.price_per_night
    }

    /// Returns the status flag.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.status
    }

    /// Returns the floor number.
    #[must_use]
    pub const fn floor_number(&self) -> i32 {
        self.floor_number
    }

    /// Returns the maximum occupancy.
    #[must_use]
    pub const fn max_occupancy(&self) -> u32 {
        self.max_occupancy
    }
}

/// Builder for `NewRoom` definitions.
#[derive(Debug)]
pub struct NewRoomBuilder {
    room_number: String,
    room_type: RoomType,
    price_per_night: Money,
    status: RoomStatus,
    floor_number: i32,
    max_occupancy: u32,
}

impl NewRoomBuilder {
    /// Sets the status flag.
    #[must_use]
    pub const fn status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the floor number.
    #[must_use]
    pub const fn floor_number(mut self, floor_number: i32) -> Self {
        self.floor_number = floor_number;
        self
    }

    /// Sets the maximum occupancy.
    #[must_use]
    pub const fn max_occupancy(mut self, max_occupancy: u32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Builds the room definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the room number is empty after trimming, the
    /// nightly price is not positive, or the occupancy is zero.
    pub fn build(self) -> Result<NewRoom, ValidationError> {
        let room_number = self.room_number.trim().to_string();
        if room_number.is_empty() {
            return Err(ValidationError {
                field: "room_number".into(),
                message: "must be non-empty".into(),
            });
        }
        if !self.price_per_night.is_positive() {
            return Err(ValidationError {
                field: "price_per_night".into(),
                message: "must be positive".into(),
            });
        }
        if self.max_occupancy == 0 {
            return Err(ValidationError {
                field: "max_occupancy".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(NewRoom {
            room_number,
            room_type: self.room_type,
            price_per_night: self.price_per_night,
            status: self.status,
            floor_number: self.floor_number,
            max_occupancy: self.max_occupancy,
        })
    }
}

/// A persisted room row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Room {
    room_id: i64,
    #[serde(flatten)]
    details: NewRoom,
}

impl Room {
    /// Assembles a room from its id and definition (used by the record
    /// access layer when loading rows).
    #[must_use]
    pub const fn new(room_id: i64, details: NewRoom) -> Self {
        Self { room_id, details }
    }

    /// Returns the server-assigned room id.
    #[must_use]
    pub const fn room_id(&self) -> i64 {
        self.room_id
    }

    /// Returns the human-readable room number.
    #[must_use]
    pub fn room_number(&self) -> &str {
        self.details.room_number()
    }

    /// Returns the room type.
    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.details.room_type()
    }

    /// Returns the nightly price.
    #[must_use]
    pub const fn price_per_night(&self) -> Money {
        self.details.price_per_night()
    }

    /// Returns the status flag.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.details.status()
    }

    /// Returns the floor number.
    #[must_use]
    pub const fn floor_number(&self) -> i32 {
        self.details.floor_number()
    }

    /// Returns the maximum occupancy.
    #[must_use]
    pub const fn max_occupancy(&self) -> u32 {
        self.details.max_occupancy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(units: i64) -> Money {
        Money::from_minor_units(units).unwrap()
    }

    #[test]
    fn test_room_type_roundtrip() {
        for ty in [
            RoomType::Single,
            RoomType::Double,
            RoomType::Suite,
            RoomType::Deluxe,
        ] {
            assert_eq!(RoomType::parse(ty.as_str()).unwrap(), ty);
        }
        assert_eq!(RoomType::parse("deluxe").unwrap(), RoomType::Deluxe);
        assert!(RoomType::parse("PENTHOUSE").is_err());
    }

    #[test]
    fn test_room_status_roundtrip() {
        for status in [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(RoomStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(RoomStatus::parse("CLOSED").is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let room = NewRoom::builder("101", RoomType::Single, price(150_000))
            .build()
            .unwrap();
        assert_eq!(room.status(), RoomStatus::Available);
        assert_eq!(room.floor_number(), 1);
        assert_eq!(room.max_occupancy(), 2);
    }

    #[test]
    fn test_builder_trims_room_number() {
        let room = NewRoom::builder(" 204 ", RoomType::Double, price(100))
            .build()
            .unwrap();
        assert_eq!(room.room_number(), "204");
    }

    #[test]
    fn test_builder_rejects_empty_room_number() {
        let result = NewRoom::builder("   ", RoomType::Double, price(100)).build();
        assert_eq!(result.unwrap_err().field, "room_number");
    }

    #[test]
    fn test_builder_rejects_free_room() {
        let result = NewRoom::builder("204", RoomType::Double, price(0)).build();
        assert_eq!(result.unwrap_err().field, "price_per_night");
    }

    #[test]
    fn test_builder_rejects_zero_occupancy() {
        let result = NewRoom::builder("204", RoomType::Double, price(100))
            .max_occupancy(0)
            .build();
        assert_eq!(result.unwrap_err().field, "max_occupancy");
    }

    #[test]
    fn test_room_accessors() {
        let details = NewRoom::builder("305", RoomType::Suite, price(750_000))
            .floor_number(3)
            .max_occupancy(4)
            .status(RoomStatus::Maintenance)
            .build()
            .unwrap();
        let room = Room::new(42, details);

        assert_eq!(room.room_id(), 42);
        assert_eq!(room.room_number(), "305");
        assert_eq!(room.room_type(), RoomType::Suite);
        assert_eq!(room.status(), RoomStatus::Maintenance);
        assert_eq!(room.floor_number(), 3);
        assert_eq!(room.max_occupancy(), 4);
    }
}
