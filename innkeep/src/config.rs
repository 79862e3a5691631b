//! Configuration file loading.
//!
//! Settings live in a small YAML file at `~/.innkeep/config.yaml`. All
//! fields are optional; callers fall back to built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::database::default_data_dir;
use crate::error::Result;

/// Operator-level configuration.
///
/// # Examples
///
/// ```
/// use innkeep::Config;
///
/// let config: Config = serde_yaml::from_str("busy_timeout_seconds: 10").unwrap();
/// assert_eq!(config.busy_timeout_seconds, Some(10));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Override for the data directory holding the database file.
    pub data_dir: Option<PathBuf>,

    /// Maximum time to wait for a database lock (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Currency symbol used when rendering amounts.
    pub currency_symbol: Option<String>,
}

/// Loads configuration from disk with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// use innkeep::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder that reads the default config location.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the config file path.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Loads the configuration.
    ///
    /// A missing file yields the default configuration; a malformed file
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn build(self) -> Result<Config> {
        let path = match self.file {
            Some(path) => path,
            None => default_data_dir()?.join("config.yaml"),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_file(dir.path().join("nope.yaml"))
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_loads_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "data_dir: /srv/innkeep\nbusy_timeout_seconds: 30\ncurrency_symbol: \"$\"\n",
        )
        .unwrap();

        let config = ConfigBuilder::new().with_file(&path).build().unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/innkeep")));
        assert_eq!(config.busy_timeout_seconds, Some(30));
        assert_eq!(config.currency_symbol.as_deref(), Some("$"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "no_such_setting: true\n").unwrap();

        let result = ConfigBuilder::new().with_file(&path).build();
        assert!(result.is_err());
    }
}
