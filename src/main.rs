//! issueforge CLI entry point.

use anyhow::Result;
use clap::Parser;

use issueforge::cli::{commands, handle_error, Cli, Commands};
use issueforge::infrastructure::config::ConfigLoader;
use issueforge::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load(cli.config.as_deref())?;
    let _logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, &config, cli.json).await,
        Commands::Extract(args) => commands::extract::execute(args, &config, cli.json).await,
        Commands::Submit(args) => commands::submit::execute(args, &config, cli.json).await,
        Commands::Labels => {
            commands::labels::execute(cli.json);
            Ok(())
        }
    }
}
