//! Stay transition commands: check-in and check-out.

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use innkeep::{check_in, check_out};

/// Record a guest's arrival.
#[derive(Args)]
pub struct CheckInCommand {
    /// The reservation to check in
    #[arg(value_name = "RESERVATION_ID")]
    pub reservation_id: i64,
}

impl CheckInCommand {
    /// Execute the check-in command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let mut db = open_database(global, &config)?;

        check_in(&mut db, self.reservation_id)?;
        println!("Reservation {} checked in.", self.reservation_id);
        Ok(())
    }
}

/// Record a guest's departure.
#[derive(Args)]
pub struct CheckOutCommand {
    /// The reservation to check out
    #[arg(value_name = "RESERVATION_ID")]
    pub reservation_id: i64,
}

impl CheckOutCommand {
    /// Execute the check-out command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let mut db = open_database(global, &config)?;

        check_out(&mut db, self.reservation_id)?;
        println!("Reservation {} checked out.", self.reservation_id);
        Ok(())
    }
}
