//! CLI command implementations.

mod add_room;
mod book;
mod cancel;
mod reservations;
mod rooms;
mod show;
mod stay;

pub use add_room::AddRoomCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use reservations::ReservationsCommand;
pub use rooms::RoomsCommand;
pub use show::ShowCommand;
pub use stay::{CheckInCommand, CheckOutCommand};
