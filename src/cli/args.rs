//! Command line argument parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::models::pipeline::{Condition, EventType, Pipeline, non_blank};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "pumpdash")]
#[command(about = "Dashboard for event-pump pipelines - list, create and remove change-event routes")]
pub struct Cli {
    /// Configuration file (defaults to <config_dir>/pumpdash/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the config file and PUMPDASH_BASE_API
    #[arg(long, global = true, value_name = "URL")]
    pub base_api: Option<String>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List pipelines (default when not running the dashboard)
    List {
        /// Print the raw records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a pipeline
    Create(PipelineArgs),
    /// Remove a pipeline
    Remove {
        #[command(flatten)]
        pipeline: PipelineArgs,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Inspect or generate the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Pipeline fields as command line options; all optional, the backend validates
#[derive(Args, Clone, Debug, Default)]
pub struct PipelineArgs {
    /// Schema name
    #[arg(long)]
    pub schema: Option<String>,

    /// Table name
    #[arg(long)]
    pub table: Option<String>,

    /// Event types: INS, UPD, DEL (comma separated or repeated)
    #[arg(long = "event-type", value_delimiter = ',')]
    pub event_types: Vec<EventType>,

    /// Target event bus name
    #[arg(long)]
    pub stream: Option<String>,

    /// Only fire when one of these columns changed (comma separated or repeated)
    #[arg(long = "column-changed", value_delimiter = ',')]
    pub columns_changed: Vec<String>,
}

impl PipelineArgs {
    pub fn to_pipeline(&self) -> Pipeline {
        let columns: Vec<String> = self
            .columns_changed
            .iter()
            .filter_map(|c| non_blank(c))
            .collect();

        Pipeline {
            schema: self.schema.as_deref().and_then(non_blank),
            table: self.table.as_deref().and_then(non_blank),
            event_types: (!self.event_types.is_empty()).then(|| self.event_types.clone()),
            stream: self.stream.as_deref().and_then(non_blank),
            condition: (!columns.is_empty()).then(|| Condition {
                column_changed: Some(columns),
            }),
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The dashboard runs when no subcommand is given
    pub fn is_tui_mode(&self) -> bool {
        self.command.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_dashboard() {
        let cli = Cli::try_parse_from(["pumpdash", "--base-api", "http://pump:8088"]).unwrap();
        assert!(cli.is_tui_mode());
        assert_eq!(cli.base_api.as_deref(), Some("http://pump:8088"));
    }

    #[test]
    fn test_create_args_build_pipeline() {
        let cli = Cli::try_parse_from([
            "pumpdash",
            "create",
            "--schema",
            "shop",
            "--table",
            "orders",
            "--event-type",
            "INS,upd",
            "--stream",
            "event.bus.orders",
            "--column-changed",
            "status,amount",
        ])
        .unwrap();

        let Some(Commands::Create(args)) = cli.command else {
            panic!("Expected create command");
        };
        let pipeline = args.to_pipeline();
        assert_eq!(pipeline.qualified_table(), "shop.orders");
        assert_eq!(
            pipeline.event_types,
            Some(vec![EventType::Insert, EventType::Update])
        );
        assert_eq!(pipeline.stream.as_deref(), Some("event.bus.orders"));
        assert_eq!(pipeline.columns_changed(), ["status", "amount"]);
    }

    #[test]
    fn test_unknown_event_type_is_rejected() {
        let result = Cli::try_parse_from(["pumpdash", "create", "--event-type", "TRUNC"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_remove_with_yes_and_minimal_fields() {
        let cli = Cli::try_parse_from(["pumpdash", "remove", "--schema", "shop", "-y"]).unwrap();
        let Some(Commands::Remove { pipeline, yes }) = cli.command else {
            panic!("Expected remove command");
        };
        assert!(yes);
        let pipeline = pipeline.to_pipeline();
        assert_eq!(pipeline.schema.as_deref(), Some("shop"));
        assert!(pipeline.table.is_none());
        assert!(pipeline.event_types.is_none());
        assert!(pipeline.condition.is_none());
    }
}
