//! Configuration Management
//!
//! Optional settings file for nbaudit. Command-line flags take precedence.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Region to start the scan in
    #[serde(default)]
    pub region: Option<String>,
    /// SageMaker endpoint override
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nbaudit").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`; missing or invalid files yield defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid config {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Could not read config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Set region and save to `path`
    pub fn set_region(&mut self, region: &str, path: &Path) -> Result<()> {
        self.region = Some(region.to_string());
        self.save_to(path)
    }

    /// Get effective region (CLI > config > built-in default)
    pub fn effective_region(&self, cli: Option<&str>) -> String {
        cli.map(str::to_string)
            .or_else(|| self.region.clone())
            .unwrap_or_else(|| crate::DEFAULT_REGION.to_string())
    }

    /// Get effective endpoint override (CLI > config)
    pub fn effective_endpoint(&self, cli: Option<&str>) -> Option<String> {
        cli.map(str::to_string).or_else(|| self.endpoint_url.clone())
    }
}
