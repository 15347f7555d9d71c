//! CLI command implementations

pub mod config;
pub mod create;
pub mod list;
pub mod remove;

use anyhow::Result;
use std::io;
use std::path::Path;

use crate::cli::args::{Commands, ConfigAction};
use crate::config::AppConfig;
use crate::errors::PumpError;
use crate::remote::HttpPipelineClient;

/// Execute a CLI command.
///
/// `config_path` is the file given with `--config`, if any.
pub async fn execute_command(
    command: Commands,
    app_config: &AppConfig,
    config_path: Option<&Path>,
) -> Result<()> {
    if let Commands::Config { action } = &command {
        return match action {
            ConfigAction::Show => config::execute_config_show(app_config),
            ConfigAction::Init { force } => config::execute_config_init(config_path, *force),
        };
    }

    let client = HttpPipelineClient::from_config(app_config).map_err(report)?;
    let mut stdout = io::stdout();

    match command {
        Commands::List { json } => list::execute_list_command(&client, json, &mut stdout).await,
        Commands::Create(args) => {
            create::execute_create_command(&client, &args.to_pipeline(), &mut stdout).await
        }
        Commands::Remove { pipeline, yes } => {
            let stdin = io::stdin();
            remove::execute_remove_command(
                &client,
                &pipeline.to_pipeline(),
                yes,
                &mut stdin.lock(),
                &mut stdout,
            )
            .await
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// Turn a failed request into the error printed to the user.
///
/// The underlying transport detail only goes to the log.
pub fn report(err: PumpError) -> anyhow::Error {
    if !err.is_application_error() {
        log::error!("{}", err);
    }
    anyhow::anyhow!(err.user_message())
}
