//! Infrastructure configuration modules.

pub mod history;
pub mod logging;
pub mod settings;

pub use history::{CurrencyConfig, HistoryConfig};
pub use logging::LoggingConfig;
pub use settings::Config;
