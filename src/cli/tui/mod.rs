//! Terminal User Interface components

pub mod event_loop;
pub mod form;
pub mod main_app;
pub mod ui;


use anyhow::Result;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::remote::HttpPipelineClient;

/// Run the Terminal User Interface
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    let client = HttpPipelineClient::from_config(config)?;
    let app = main_app::App::new(Arc::new(client), config);
    event_loop::run_tui_event_loop(app).await
}
