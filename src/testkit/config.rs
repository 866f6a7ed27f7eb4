//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::infrastructure::config::{Config, HistoryConfig};

/// Defaults with the history in an in-memory database.
pub fn in_memory() -> Config {
    Config {
        history: HistoryConfig {
            database: ":memory:".to_string(),
            ..HistoryConfig::default()
        },
        ..Config::default()
    }
}
