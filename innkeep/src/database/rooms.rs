//! Database CRUD operations for rooms.

use rusqlite::{params, Connection};

use crate::error::Result;
use crate::room::{NewRoom, Room, RoomStatus, RoomType};
use crate::Money;

use super::connection::Database;

const INSERT_ROOM: &str = r"
    INSERT INTO rooms (room_number, room_type, price_per_night, status, floor_number, max_occupancy)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_COLUMNS: &str = r"
    SELECT room_id, room_number, room_type, price_per_night, status, floor_number, max_occupancy
    FROM rooms
";

const UPDATE_ROOM_STATUS: &str = "UPDATE rooms SET status = ? WHERE room_id = ?";

/// Deserializes a room from a database row.
///
/// Expects columns in this order: `room_id`, `room_number`, `room_type`,
/// `price_per_night`, `status`, `floor_number`, `max_occupancy`.
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    let room_id: i64 = row.get(0)?;
    let room_number: String = row.get(1)?;
    let room_type: String = row.get(2)?;
    let price_units: i64 = row.get(3)?;
    let status: String = row.get(4)?;
    let floor_number: i32 = row.get(5)?;
    let max_occupancy: u32 = row.get(6)?;

    let boxed = |e: Box<dyn std::error::Error + Send + Sync>| {
        rusqlite::Error::ToSqlConversionFailure(e)
    };

    let room_type = RoomType::parse(&room_type).map_err(|e| boxed(Box::new(e)))?;
    let status = RoomStatus::parse(&status).map_err(|e| boxed(Box::new(e)))?;
    let price = Money::from_minor_units(price_units).map_err(|e| boxed(Box::new(e)))?;

    let details = NewRoom::builder(room_number, room_type, price)
        .status(status)
        .floor_number(floor_number)
        .max_occupancy(max_occupancy)
        .build()
        .map_err(|e| boxed(Box::new(e)))?;

    Ok(Room::new(room_id, details))
}

impl Database {
    /// Inserts a new room and returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a UNIQUE violation
    /// on the room number.
    pub fn insert_room(conn: &Connection, room: &NewRoom) -> Result<i64> {
        conn.execute(
            INSERT_ROOM,
            params![
                room.room_number(),
                room.room_type().as_str(),
                room.price_per_night().minor_units(),
                room.status().as_str(),
                room.floor_number(),
                room.max_occupancy(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Retrieves a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn room_by_id(conn: &Connection, room_id: i64) -> Result<Option<Room>> {
        let sql = format!("{SELECT_COLUMNS} WHERE room_id = ?");
        let mut stmt = conn.prepare(&sql)?;
        match stmt.query_row(params![room_id], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a room by its human-readable number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn room_by_number(conn: &Connection, room_number: &str) -> Result<Option<Room>> {
        let sql = format!("{SELECT_COLUMNS} WHERE room_number = ?");
        let mut stmt = conn.prepare(&sql)?;
        match stmt.query_row(params![room_number], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists all rooms ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY room_number");
        let mut stmt = conn.prepare(&sql)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rooms)
    }

    /// Lists rooms whose status flag is Available, optionally filtered by
    /// type, ordered by room number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be
    /// deserialized.
    pub fn available_rooms(conn: &Connection, room_type: Option<RoomType>) -> Result<Vec<Room>> {
        let rooms = match room_type {
            Some(ty) => {
                let sql = format!(
                    "{SELECT_COLUMNS} WHERE status = 'AVAILABLE' AND room_type = ? ORDER BY room_number"
                );
                let mut stmt = conn.prepare(&sql)?;
                let rooms = stmt
                    .query_map(params![ty.as_str()], row_to_room)?
                    .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
                rooms
            }
            None => {
                let sql =
                    format!("{SELECT_COLUMNS} WHERE status = 'AVAILABLE' ORDER BY room_number");
                let mut stmt = conn.prepare(&sql)?;
                let rooms = stmt
                    .query_map([], row_to_room)?
                    .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
                rooms
            }
        };
        Ok(rooms)
    }

    /// Sets a room's status flag.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the room was found and updated
    /// - `Ok(false)` if the room was not found
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_room_status(
        conn: &Connection,
        room_id: i64,
        status: RoomStatus,
    ) -> Result<bool> {
        let rows_affected = conn.execute(UPDATE_ROOM_STATUS, params![status.as_str(), room_id])?;
        Ok(rows_affected > 0)
    }
}
