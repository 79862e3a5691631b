//! CLI structure and command definitions.

use crate::commands::{
    AddRoomCommand, BookCommand, CancelCommand, CheckInCommand, CheckOutCommand,
    ReservationsCommand, RoomsCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing hotel room bookings.
#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Manage hotel room bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "INNKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "INNKEEP_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List rooms
    Rooms(RoomsCommand),

    /// Register a new room
    AddRoom(AddRoomCommand),

    /// Create a reservation
    Book(BookCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Record a guest's arrival
    CheckIn(CheckInCommand),

    /// Record a guest's departure
    CheckOut(CheckOutCommand),

    /// List reservations
    Reservations(ReservationsCommand),

    /// Show one reservation in detail
    Show(ShowCommand),
}
