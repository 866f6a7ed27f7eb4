//! Command-line interface definitions.
//!
//! Defines the CLI structure for the unitconv application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, resolved against the working directory.
pub const DEFAULT_CONFIG: &str = "unitconv.toml";

/// Exact decimal unit and currency converter with conversion history
#[derive(Parser, Debug)]
#[command(name = "unitconv")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the unitconv CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List unit categories
    Categories,

    /// List the units of a category
    Units(UnitsArgs),

    /// Convert a value between two units of a category
    Convert(ConvertArgs),

    /// Convert an amount between two currencies
    Currency(CurrencyArgs),

    /// Inspect or clear conversion history
    #[command(subcommand)]
    History(HistoryCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for `unitconv units`.
#[derive(clap::Args, Debug)]
pub struct UnitsArgs {
    /// Category name, e.g. `length` or `fuel-economy`
    pub category: String,
}

/// Arguments for `unitconv convert`.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Category name
    pub category: String,

    /// Value to convert
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Source unit (id or display name)
    pub from: String,

    /// Target unit (id or display name)
    pub to: String,

    /// Append the conversion to the history
    #[arg(long)]
    pub record: bool,
}

/// Arguments for `unitconv currency`.
#[derive(clap::Args, Debug)]
pub struct CurrencyArgs {
    /// Amount to convert
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Source currency code
    pub from: String,

    /// Target currency code
    pub to: String,

    /// Exchange-rate JSON file (defaults to `currency.rates` in the config)
    #[arg(long)]
    pub rates: Option<PathBuf>,

    /// Append the conversion to the history
    #[arg(long)]
    pub record: bool,
}

/// Subcommands for `unitconv history`.
#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
    /// Show a partition's history, newest first
    List(HistoryKeyArg),
    /// Delete a partition's history
    Clear(HistoryKeyArg),
}

/// History partition argument.
#[derive(clap::Args, Debug)]
pub struct HistoryKeyArg {
    /// Category name or `currency`
    pub key: String,
}

/// Subcommands for `unitconv check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_convert_with_negative_value() {
        let cli = Cli::try_parse_from([
            "unitconv", "convert", "temperature", "-40", "celsius", "fahrenheit",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.value, "-40");
                assert!(!args.record);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG));
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "unitconv", "history", "list", "length", "--json", "--config", "x.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(matches!(cli.command, Commands::History(HistoryCommand::List(_))));
    }

    #[test]
    fn currency_rates_flag_is_optional() {
        let cli = Cli::try_parse_from(["unitconv", "currency", "10", "usd", "eur"]).unwrap();
        match cli.command {
            Commands::Currency(args) => assert_eq!(args.rates, None),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
