//! Remove command implementation

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::commands::{list::print_pipelines, report};
use crate::models::pipeline::Pipeline;
use crate::remote::PipelineApi;
use crate::ui::confirm_in_terminal;

/// Remove a pipeline after confirmation (skipped with `assume_yes`)
pub async fn execute_remove_command<R: BufRead, W: Write>(
    api: &dyn PipelineApi,
    pipeline: &Pipeline,
    assume_yes: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    if !assume_yes && !confirm_in_terminal(&pipeline.removal_confirmation(), input, out)? {
        writeln!(out, "Aborted, nothing was removed.")?;
        return Ok(());
    }

    log::info!("Removing pipeline for '{}'", pipeline.qualified_table());
    api.remove_pipeline(pipeline).await.map_err(report)?;
    writeln!(
        out,
        "🗑️  Removed pipeline for '{}'",
        pipeline.qualified_table()
    )?;

    let pipelines = api.list_pipelines().await.map_err(report)?;
    print_pipelines(&pipelines, false, out)
}
