//! `unitconv check`.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate a configuration file without touching the history database.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::heading("Configuration Check");
    output::item("Config", path.display());
    output::done("Configuration file is valid");

    output::heading("Summary");
    output::item("Log level", &config.logging.level);
    output::item("Log format", &config.logging.format);
    output::item("Database", &config.history.database);
    output::item("Max entries", config.history.max_entries);
    match &config.currency.rates {
        Some(rates) if Path::new(rates).is_file() => output::item("Rates", rates),
        Some(rates) => output::warn(&format!("Rates file not found: {rates}")),
        None => output::item("Rates", "not configured"),
    }

    output::done("Configuration check complete");
    Ok(())
}
