use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tokio::fs;

use hyquery::{DEFAULT_PORT, DEFAULT_TIMEOUT};

/// Defaults file for the CLI. Command-line flags take precedence over
/// anything set here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub port: u16,
    pub timeout_ms: u64,
    pub full: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            port: DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            full: false,
        }
    }
}

impl CliConfig {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
