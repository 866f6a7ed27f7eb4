//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::SqliteHistoryStore;
use crate::application::HistoryService;
use crate::domain::ExchangeRates;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::SystemClock;

/// History service backed by SQLite and the system clock.
pub type AppHistory = HistoryService<SqliteHistoryStore, SystemClock>;

/// Open (and migrate) the configured history database.
///
/// # Errors
/// Returns a connection error if the database cannot be opened or migrated.
pub fn open_history(config: &Config) -> Result<AppHistory> {
    let database = &config.history.database;
    let pool = create_pool(database)?;
    run_migrations(&pool)?;
    info!(database = %database, max_entries = config.history.max_entries, "History database ready");
    Ok(HistoryService::new(
        SqliteHistoryStore::new(pool),
        SystemClock,
        config.history.max_entries,
    ))
}

/// Read an exchange-rate table from a JSON file.
///
/// # Errors
/// Returns an IO error for unreadable files and a JSON error for malformed
/// tables.
pub fn load_rates<P: AsRef<Path>>(path: P) -> Result<ExchangeRates> {
    let content = std::fs::read_to_string(path)?;
    Ok(ExchangeRates::from_json(&content)?)
}
