//! Booking command.

use chrono::NaiveDate;
use clap::Args;

use crate::error::CliError;
use crate::utils::{format_amount, load_configuration, open_database, GlobalOptions};
use innkeep::{book, BookingRequest};

/// Create a reservation.
#[derive(Args)]
pub struct BookCommand {
    /// Guest first name
    #[arg(long, value_name = "NAME")]
    pub first_name: String,

    /// Guest last name
    #[arg(long, value_name = "NAME")]
    pub last_name: String,

    /// Guest email address
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Guest phone number (10 digits)
    #[arg(long, value_name = "PHONE")]
    pub phone: String,

    /// Guest id proof (free text)
    #[arg(long, value_name = "ID")]
    pub id_proof: String,

    /// The room id to book
    #[arg(long, value_name = "ROOM_ID")]
    pub room: i64,

    /// Check-in date (YYYY-MM-DD, inclusive)
    #[arg(long, value_name = "DATE")]
    pub check_in: NaiveDate,

    /// Check-out date (YYYY-MM-DD, exclusive)
    #[arg(long, value_name = "DATE")]
    pub check_out: NaiveDate,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let mut db = open_database(global, &config)?;

        let request = BookingRequest {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone,
            id_proof: self.id_proof,
            room_id: self.room,
            check_in: self.check_in,
            check_out: self.check_out,
        };

        let receipt = book(&mut db, &request)?;

        if receipt.created_customer {
            println!("New customer created with ID: {}", receipt.customer_id);
        } else {
            println!("Existing customer found with ID: {}", receipt.customer_id);
        }
        println!("Reservation created successfully!");
        println!("Reservation ID: {}", receipt.reservation_id);
        println!("Room Number: {}", receipt.room_number);
        println!(
            "Total Amount: {} for {} night(s)",
            format_amount(&config, receipt.total_amount),
            receipt.nights
        );
        Ok(())
    }
}
