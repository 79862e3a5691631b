//! Single-reservation detail command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{
    format_amount, format_timestamp, load_configuration, open_database, print_json, GlobalOptions,
};
use innkeep::{Database, Error};

/// Show one reservation in detail.
#[derive(Args)]
pub struct ShowCommand {
    /// The reservation to show
    #[arg(value_name = "RESERVATION_ID")]
    pub reservation_id: i64,

    /// Emit JSON instead of the detail block
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let db = open_database(global, &config)?;

        let summary = Database::reservation_by_id(db.connection(), self.reservation_id)?
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {}", self.reservation_id),
            })?;

        if self.json {
            return print_json(&summary);
        }

        let r = &summary.reservation;
        println!("Reservation ID    : {}", r.reservation_id());
        println!("Guest             : {}", summary.guest_name);
        println!("Room Number       : {}", summary.room_number);
        println!("Check-In Date     : {}", r.stay().check_in());
        println!("Check-Out Date    : {}", r.stay().check_out());
        println!("Number of Nights  : {}", r.stay().nights());
        println!("Total Amount      : {}", format_amount(&config, r.total_amount()));
        println!("Status            : {}", r.status());
        println!("Created At        : {}", format_timestamp(r.created_at()));
        Ok(())
    }
}
