//! CLI module graph.

pub mod check;
pub mod command;
pub mod convert;
pub mod currency;
pub mod history;
pub mod output;
pub mod units;

use crate::error::Result;
use crate::infrastructure::config::Config;
use command::{CheckCommand, Cli, Commands, HistoryCommand};

/// Run one parsed command. `check config` loads its file itself; every
/// other command gets the already-loaded `config`.
pub async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Categories => units::execute_categories(),
        Commands::Units(args) => units::execute_units(&args.category),
        Commands::Convert(args) => convert::execute(config, args).await,
        Commands::Currency(args) => currency::execute(config, args).await,
        Commands::History(HistoryCommand::List(arg)) => history::execute_list(config, &arg.key).await,
        Commands::History(HistoryCommand::Clear(arg)) => {
            history::execute_clear(config, &arg.key).await
        }
        Commands::Check(CheckCommand::Config) => check::execute_config(&cli.config),
    }
}
