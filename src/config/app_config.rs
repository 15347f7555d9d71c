//! Application configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{PumpError, Result};

/// Environment variable overriding the backend base URL
pub const BASE_API_ENV: &str = "PUMPDASH_BASE_API";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the event-pump backend, without the `/api/v1` suffix
    pub base_api: String,
    /// Timeout for a single HTTP request
    pub request_timeout_secs: u64,
    /// UI configuration
    pub ui: UiConfig,
}

/// UI-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Interval between UI ticks (notification expiry, redraw)
    pub tick_rate_ms: u64,
    /// How long backend error messages stay visible
    pub error_notification_secs: u64,
    /// How long the generic request failure message stays visible
    pub failure_notification_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_api: "http://localhost:8088".to_string(),
            request_timeout_secs: 10,
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            error_notification_secs: 6,
            failure_notification_secs: 3,
        }
    }
}

impl AppConfig {
    /// Default location: `<config_dir>/pumpdash/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pumpdash")
            .join("config.toml")
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| {
            PumpError::Config(format!("failed to parse '{}': {}", path.display(), e))
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Resolve the effective configuration: file, then environment, then CLI flag
    pub fn resolve(config_path: Option<&Path>, base_api_flag: Option<&str>) -> Result<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);
        let env_base_api = std::env::var(BASE_API_ENV).ok();

        let mut config = Self::load_or_default(&path)?;
        config.apply_overrides(env_base_api.as_deref(), base_api_flag);
        config.validate()?;
        Ok(config)
    }

    /// Later sources win; blank values are ignored
    pub fn apply_overrides(&mut self, env_base_api: Option<&str>, flag_base_api: Option<&str>) {
        for value in [env_base_api, flag_base_api].into_iter().flatten() {
            if !value.trim().is_empty() {
                self.base_api = value.trim().to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_api)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PumpError::Config(format!(
                "base_api must be an http(s) URL, got '{}'",
                self.base_api
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(PumpError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(PumpError::Config(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Write the default configuration, refusing to clobber an existing file unless forced
    pub fn write_default(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(PumpError::Config(format!(
                "'{}' already exists, use --force to overwrite",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::default().to_toml()?)?;
        Ok(())
    }
}
