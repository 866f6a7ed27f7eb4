//! History persistence configuration.

use serde::Deserialize;

use crate::application::DEFAULT_MAX_ENTRIES;

/// Where history is stored and how much of it is kept.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// SQLite database path, or `:memory:` for a volatile store.
    pub database: String,
    /// Records kept per partition.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            database: "unitconv.db".to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Currency settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Default exchange-rate file used when `--rates` is not given.
    pub rates: Option<String>,
}
