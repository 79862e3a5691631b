//! Reservations listing command.

use clap::Args;

use crate::error::CliError;
use crate::utils::{format_amount, load_configuration, open_database, print_json, GlobalOptions};
use innkeep::{Config, Database, ReservationSummary};

/// List reservations.
#[derive(Args)]
pub struct ReservationsCommand {
    /// Only show one customer's reservations, soonest check-in first
    #[arg(long, value_name = "CUSTOMER_ID", conflicts_with = "active")]
    pub customer: Option<i64>,

    /// Only show active reservations, soonest check-in first
    #[arg(long)]
    pub active: bool,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl ReservationsCommand {
    /// Execute the reservations command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration()?;
        let db = open_database(global, &config)?;
        let conn = db.connection();

        let summaries = if let Some(customer_id) = self.customer {
            Database::reservations_for_customer(conn, customer_id)?
        } else if self.active {
            Database::active_reservations(conn)?
        } else {
            Database::list_all_reservations(conn)?
        };

        if self.json {
            return print_json(&summaries);
        }

        if summaries.is_empty() {
            println!("No reservations found.");
            return Ok(());
        }

        println!(
            "{:<6} {:<22} {:<10} {:<12} {:<12} {:<12} {:<12}",
            "ID", "Guest", "Room", "Check-In", "Check-Out", "Amount", "Status"
        );
        for summary in &summaries {
            print_summary_row(&config, summary);
        }
        Ok(())
    }
}

fn print_summary_row(config: &Config, summary: &ReservationSummary) {
    let r = &summary.reservation;
    println!(
        "{:<6} {:<22} {:<10} {:<12} {:<12} {:<12} {:<12}",
        r.reservation_id(),
        truncate(&summary.guest_name, 22),
        summary.room_number,
        r.stay().check_in().to_string(),
        r.stay().check_out().to_string(),
        format_amount(config, r.total_amount()),
        r.status().to_string()
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 22), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }
}
