//! Main entry point for the innkeep CLI.
//!
//! This is the operator console for the booking manager. It provides
//! commands for browsing rooms, creating and cancelling reservations,
//! recording stay transitions, and inspecting the reservation book.
//!
//! The process exits non-zero when the store cannot be opened.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = innkeep::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
    };

    let result = match cli.command {
        cli::Command::Rooms(cmd) => cmd.execute(&global),
        cli::Command::AddRoom(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::CheckIn(cmd) => cmd.execute(&global),
        cli::Command::CheckOut(cmd) => cmd.execute(&global),
        cli::Command::Reservations(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
