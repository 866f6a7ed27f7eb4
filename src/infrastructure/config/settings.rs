//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file; `UNITCONV_DATABASE` overrides the
//! history database path.
//!
//! # Example
//!
//! ```no_run
//! use unitconv::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("unitconv.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use super::history::{CurrencyConfig, HistoryConfig};
use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::error::{ConfigError, Result};

/// Environment variable overriding [`HistoryConfig::database`].
pub const DATABASE_ENV: &str = "UNITCONV_DATABASE";

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// History database and cap.
    pub history: HistoryConfig,

    pub currency: CurrencyConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(std::env::var(DATABASE_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load) for files that exist.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Self::parse_toml("")
            }
            Err(e) => Err(ConfigError::ReadFile(e).into()),
        }
    }

    /// Replace the database path when an override is set and non-empty.
    pub fn apply_overrides(&mut self, database: Option<String>) {
        if let Some(database) = database.filter(|d| !d.trim().is_empty()) {
            self.history.database = database;
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] or [`ConfigError::MissingField`]
    /// for the first offending field.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.history.database.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "database" }.into());
        }
        if self.history.max_entries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_entries",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "level" }.into());
        }
        if let Some(rates) = &self.currency.rates {
            if rates.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "rates",
                    reason: "must not be empty when set".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        config.validate().unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.history.database, "unitconv.db");
        assert_eq!(config.history.max_entries, 25);
        assert_eq!(config.currency.rates, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str("[history]\nmax_entries = 10\n").unwrap();
        assert_eq!(config.history.max_entries, 10);
        assert_eq!(config.history.database, "unitconv.db");
    }

    #[test]
    fn override_replaces_database() {
        let mut config = Config::default();
        config.apply_overrides(Some("/tmp/other.db".to_string()));
        assert_eq!(config.history.database, "/tmp/other.db");

        config.apply_overrides(Some("  ".to_string()));
        config.apply_overrides(None);
        assert_eq!(config.history.database, "/tmp/other.db");
    }

    #[test]
    fn validate_rejects_zero_cap() {
        let mut config = Config::default();
        config.history.max_entries = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_entries",
                ..
            }))
        ));
    }

    #[test]
    fn validate_rejects_unknown_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::InvalidValue { field: "format", .. }))
        ));
    }

    #[test]
    fn validate_rejects_blank_database() {
        let mut config = Config::default();
        config.history.database = String::new();
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::MissingField { field: "database" }))
        ));
    }
}
