//! fisr Configuration
//!
//! Handles parsing and management of fisr.toml configuration files.

use crate::bench::BenchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config file name searched for by [`FisrConfig::find_and_load`].
pub const CONFIG_FILE: &str = "fisr.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching fisr.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FisrConfig {
    /// Part I: single-value comparison
    #[serde(default)]
    pub demo: DemoConfig,

    /// Part II: timing comparison
    #[serde(default)]
    pub bench: BenchConfig,
}

impl FisrConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: FisrConfig = toml::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                log::info!("using config {}", config_path.display());
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                log::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Single-value comparison settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Value whose layout and inverse square root are shown
    #[serde(default = "default_demo_value")]
    pub value: f32,
}

fn default_demo_value() -> f32 {
    18.75
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            value: default_demo_value(),
        }
    }
}
