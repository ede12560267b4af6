//! Mockdeck command-line tool.

use clap::Parser;
use mockdeck::MockdeckConfig;
use mockdeck::cli::{
    Cli, Commands, handle_check_command, handle_deck_command, handle_normalize_command,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = MockdeckConfig::load(cli.config.as_deref())?;
    mockdeck::init_tracing(config.log_filter());

    match cli.command {
        Commands::Normalize { input, compact } => handle_normalize_command(&input, compact)?,
        Commands::Check { input, format } => {
            if !handle_check_command(&input, format)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Deck { command } => handle_deck_command(command, &config).await?,
    }

    Ok(ExitCode::SUCCESS)
}
