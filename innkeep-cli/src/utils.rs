//! Utility functions shared across CLI commands.

use std::path::PathBuf;
use std::time::SystemTime;

use crate::error::CliError;
use innkeep::database::resolve_database_path;
use innkeep::{Config, ConfigBuilder, Database, DatabaseConfig, Money};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Load the operator configuration file.
pub fn load_configuration() -> Result<Config, CliError> {
    ConfigBuilder::new()
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options and configuration.
fn database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("innkeep.db"));
    }
    if let Some(ref data_dir) = config.data_dir {
        return Ok(data_dir.join("innkeep.db"));
    }
    resolve_database_path().map_err(CliError::from)
}

/// Open the database, applying any timeout overrides.
///
/// A failure here is the fatal startup case: the caller reports it and
/// the process exits non-zero.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let path = database_path(global, config)?;
    let mut db_config = DatabaseConfig::new(path);

    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config
            .with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.busy_timeout_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format an amount with the configured currency symbol.
pub fn format_amount(config: &Config, amount: Money) -> String {
    let symbol = config.currency_symbol.as_deref().unwrap_or("₹");
    format!("{symbol}{amount}")
}

/// Clap value parser for room types.
pub fn parse_room_type(s: &str) -> Result<innkeep::RoomType, String> {
    innkeep::RoomType::parse(s).map_err(|e| e.to_string())
}

/// Render a value as pretty JSON for `--json` output.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::InvalidArguments(format!("cannot render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}
