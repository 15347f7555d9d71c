//! Create command implementation

use anyhow::Result;
use std::io::Write;

use crate::cli::commands::{list::print_pipelines, report};
use crate::models::pipeline::Pipeline;
use crate::remote::PipelineApi;

pub async fn execute_create_command<W: Write>(
    api: &dyn PipelineApi,
    pipeline: &Pipeline,
    out: &mut W,
) -> Result<()> {
    log::info!("Creating pipeline for '{}'", pipeline.qualified_table());
    api.create_pipeline(pipeline).await.map_err(report)?;
    writeln!(
        out,
        "✅ Created pipeline for '{}'",
        pipeline.qualified_table()
    )?;

    // Every mutation is followed by a full refresh
    let pipelines = api.list_pipelines().await.map_err(report)?;
    print_pipelines(&pipelines, false, out)
}
