//! Rooms listing command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{format_amount, load_configuration, open_database, parse_room_type, print_json, GlobalOptions};
use innkeep::{Database, Room, RoomType};

/// List rooms, optionally restricted to bookable ones.
#[derive(Args)]
pub struct RoomsCommand {
    /// Only show rooms whose status flag is Available
    #[arg(long)]
    pub available: bool,

    /// Filter available rooms by type (single, double, suite, deluxe)
    #[arg(long, value_name = "TYPE", value_parser = parse_room_type)]
    pub room_type: Option<RoomType>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let db = open_database(global, &config)?;

        // A type filter implies the availability listing
        let rooms = if self.available || self.room_type.is_some() {
            Database::available_rooms(db.connection(), self.room_type)?
        } else {
            Database::list_rooms(db.connection())?
        };

        if self.json {
            return print_json(&rooms);
        }

        if rooms.is_empty() {
            println!("No rooms found.");
            return Ok(());
        }

        println!(
            "{:<6} {:<10} {:<10} {:<14} {:<13} {:<6} {:<8}",
            "ID", "Room No", "Type", "Price/Night", "Status", "Floor", "Capacity"
        );
        for room in &rooms {
            print_room_row(&config, room);
        }
        Ok(())
    }
}

fn print_room_row(config: &innkeep::Config, room: &Room) {
    println!(
        "{:<6} {:<10} {:<10} {:<14} {:<13} {:<6} {:<8}",
        room.room_id(),
        room.room_number(),
        room.room_type().to_string(),
        format_amount(config, room.price_per_night()),
        room.status().to_string(),
        room.floor_number(),
        room.max_occupancy()
    );
}
