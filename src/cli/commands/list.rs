//! List command implementation

use anyhow::Result;
use comfy_table::{Table, presets};
use std::io::Write;

use crate::cli::commands::report;
use crate::models::pipeline::Pipeline;
use crate::remote::PipelineApi;

const HEADERS: [&str; 5] = ["SCHEMA", "TABLE", "EVENT TYPES", "STREAM", "COLUMNS CHANGED"];

/// Cells of one table row, in header order
pub fn pipeline_row(pipeline: &Pipeline) -> [String; 5] {
    [
        pipeline.schema.clone().unwrap_or_default(),
        pipeline.table.clone().unwrap_or_default(),
        pipeline.event_types_label(),
        pipeline.stream_label().to_string(),
        pipeline.columns_changed_label(),
    ]
}

/// Render pipelines as a text table
pub fn format_pipeline_table(pipelines: &[Pipeline]) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(HEADERS.to_vec());
    for pipeline in pipelines {
        table.add_row(pipeline_row(pipeline).to_vec());
    }
    table.to_string()
}

/// Print the pipelines as a table (or JSON)
pub fn print_pipelines<W: Write>(pipelines: &[Pipeline], json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(pipelines)?)?;
    } else if pipelines.is_empty() {
        writeln!(out, "No pipelines configured.")?;
    } else {
        writeln!(out, "{}", format_pipeline_table(pipelines))?;
        writeln!(out, "\n{} pipeline(s)", pipelines.len())?;
    }
    Ok(())
}

pub async fn execute_list_command<W: Write>(
    api: &dyn PipelineApi,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let pipelines = api.list_pipelines().await.map_err(report)?;
    print_pipelines(&pipelines, json, out)
}
