//! Cancellation command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use innkeep::cancel;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// The reservation to cancel
    #[arg(value_name = "RESERVATION_ID")]
    pub reservation_id: i64,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let mut db = open_database(global, &config)?;

        let receipt = cancel(&mut db, self.reservation_id)?;

        println!("Reservation {} cancelled.", receipt.reservation_id);
        println!("Room {} is now available.", receipt.room_number);
        Ok(())
    }
}
