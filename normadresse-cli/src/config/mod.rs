//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use normadresse_core::DEFAULT_MAX_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Shortening configuration
    #[serde(default)]
    pub shorten: ShortenConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Shortening-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ShortenConfig {
    /// Default maximum length in characters
    pub max_length: usize,

    /// Rule file used instead of the embedded French rules
    pub rules: Option<PathBuf>,
}

impl Default for ShortenConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            rules: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }
}
