use clap::Parser;
use tracing::{debug, error};

use unitconv::adapter::inbound::cli::command::Cli;
use unitconv::adapter::inbound::cli::output::{self, Mode};
use unitconv::adapter::inbound::cli::dispatch;
use unitconv::infrastructure::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(Mode::from_flags(cli.json, cli.quiet));

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    debug!(config = %cli.config.display(), "unitconv starting");

    if let Err(e) = dispatch(&cli, &config).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
