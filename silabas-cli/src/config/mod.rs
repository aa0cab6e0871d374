//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use silabas_core::{Options, PrefixStrategy, Region};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Syllabification options
    #[serde(default)]
    pub syllabification: SyllabificationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Engine options described by the `[syllabification]` section
    pub fn options(&self) -> Result<Options> {
        let section = &self.syllabification;
        let region = section
            .region
            .parse::<Region>()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let prefix_strategy = section
            .prefix_strategy
            .parse::<PrefixStrategy>()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(Options {
            include_hiatus: section.include_hiatus,
            region,
            prefix_strategy,
        })
    }
}

/// Syllabification-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SyllabificationConfig {
    /// Split hiatus sequences
    pub include_hiatus: bool,

    /// Region code (es_ES, es_MX, ...)
    pub region: String,

    /// Prefix strategy (phonetic, morphological, adaptive)
    pub prefix_strategy: String,
}

impl Default for SyllabificationConfig {
    fn default() -> Self {
        Self {
            include_hiatus: true,
            region: Region::default().code().to_string(),
            prefix_strategy: PrefixStrategy::default().name().to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Separator placed between syllables in text output
    pub separator: String,

    /// Append exception tags
    pub show_exceptions: bool,

    /// Append division points
    pub show_points: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            separator: "-".to_string(),
            show_exceptions: false,
            show_points: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Memoized results kept in memory (0 disables)
    pub cache_capacity: usize,

    /// Process words in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            cache_capacity: silabas_api::DEFAULT_CACHE_CAPACITY,
            parallel: false,
            threads: 0,
        }
    }
}
