//! Command Line Interface module
//!
//! This module contains the CLI argument parsing, command implementations,
//! and the Terminal User Interface (TUI) dashboard.

pub mod args;
pub mod commands;
pub mod tui;

pub use args::*;

use anyhow::Result;

use crate::config::AppConfig;
use crate::utils::logging::init_cli_logging;

/// Main CLI application runner
pub async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_cli_logging(cli.verbose, cli.quiet, cli.is_tui_mode())?;

    // Generating a config must work even when the current one is broken
    if let Some(Commands::Config {
        action: ConfigAction::Init { force },
    }) = &cli.command
    {
        return commands::config::execute_config_init(cli.config.as_deref(), *force);
    }

    let config = AppConfig::resolve(cli.config.as_deref(), cli.base_api.as_deref())?;
    log::debug!("Using backend at {}", config.base_api);

    match &cli.command {
        Some(command) => {
            commands::execute_command(command.clone(), &config, cli.config.as_deref()).await
        },
        None => tui::run_tui(&config).await,
    }
}
