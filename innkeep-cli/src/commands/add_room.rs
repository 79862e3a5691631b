//! Room registration command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_room_type, GlobalOptions};
use innkeep::{Database, Money, NewRoom, RoomStatus, RoomType};

/// Register a new room.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Human-readable room number (must be unique)
    #[arg(long, value_name = "NUMBER")]
    pub number: String,

    /// Room type (single, double, suite, deluxe)
    #[arg(long, value_name = "TYPE", value_parser = parse_room_type)]
    pub room_type: RoomType,

    /// Nightly price, e.g. 2500 or 2500.50
    #[arg(long, value_name = "AMOUNT")]
    pub price: Money,

    /// Floor number
    #[arg(long, value_name = "FLOOR", default_value_t = 1)]
    pub floor: i32,

    /// Maximum occupancy
    #[arg(long, value_name = "GUESTS", default_value_t = 2)]
    pub max_occupancy: u32,

    /// Register the room as closed for maintenance
    #[arg(long)]
    pub maintenance: bool,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let db = open_database(global, &config)?;

        let status = if self.maintenance {
            RoomStatus::Maintenance
        } else {
            RoomStatus::Available
        };

        let room = NewRoom::builder(self.number, self.room_type, self.price)
            .floor_number(self.floor)
            .max_occupancy(self.max_occupancy)
            .status(status)
            .build()
            .map_err(innkeep::Error::from)?;

        let room_id = Database::insert_room(db.connection(), &room)?;
        println!("Room {} registered with ID {room_id}", room.room_number());
        Ok(())
    }
}
