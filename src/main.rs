use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    pumpdash::cli::run().await
}
