//! Config command implementation

use anyhow::Result;
use std::path::Path;

use crate::config::AppConfig;

/// Print the effective configuration as TOML
pub fn execute_config_show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default configuration file
pub fn execute_config_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(AppConfig::default_path);

    AppConfig::write_default(&path, force)?;
    println!("✅ Generated default configuration file: {}", path.display());
    println!("ℹ️  Edit base_api to point at your event-pump backend.");
    Ok(())
}
