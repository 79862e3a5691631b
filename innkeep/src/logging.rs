//! Logging infrastructure.
//!
//! Library code logs through the `log` facade; this module provides the
//! stderr backend and the verbosity policy (CLI flags first, then the
//! `INNKEEP_LOG_MODE` environment variable, then Normal).

use std::env;
use std::fmt;

use log::{Level, LevelFilter, Metadata, Record};

/// Logging level for controlling output verbosity.
///
/// # Examples
///
/// ```
/// use innkeep::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output.
    Quiet,
    /// Errors and warnings only.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl LogLevel {
    /// Parses a log level from a string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `quiet`, `normal`, or
    /// `verbose`.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter corresponding to this level.
    #[must_use]
    pub const fn to_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

/// A stderr backend for the `log` facade.
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger with the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.to_filter()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug | Level::Trace => "DEBUG",
        };
        eprintln!("{tag}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Installs the stderr logger and returns the level in effect.
///
/// The priority order is:
/// 1. CLI flags (`verbose` wins over `quiet` if both are set)
/// 2. `INNKEEP_LOG_MODE` environment variable
/// 3. Normal
///
/// Installing twice is harmless; the first logger stays in place.
///
/// # Examples
///
/// ```
/// use innkeep::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("INNKEEP_LOG_MODE")
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or(LogLevel::Normal)
    };

    if log::set_boxed_logger(Box::new(Logger::new(level))).is_ok() {
        log::set_max_level(level.to_filter());
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
        assert!(LogLevel::parse("loud").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_filters() {
        assert_eq!(LogLevel::Quiet.to_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.to_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.to_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled() {
        let logger = Logger::new(LogLevel::Normal);
        let warn = Metadata::builder().level(Level::Warn).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(log::Log::enabled(&logger, &warn));
        assert!(!log::Log::enabled(&logger, &debug));
    }

    #[test]
    fn test_init_logger_flag_precedence() {
        // Verbose wins over quiet; env var is ignored when flags are set
        assert_eq!(init_logger(true, true), LogLevel::Verbose);
        assert_eq!(init_logger(false, true), LogLevel::Quiet);
    }
}
