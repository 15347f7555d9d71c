//! pumpdash - dashboard for event-pump pipelines
//!
//! pumpdash lists, creates and removes the pipelines of an event-pump
//! backend. A pipeline routes change events of a database table to an event
//! stream. The crate ships an interactive terminal dashboard and plain
//! subcommands for scripting.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;
pub use remote::{HttpPipelineClient, PipelineApi};

/// pumpdash version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// pumpdash application name
pub const APP_NAME: &str = "pumpdash";
