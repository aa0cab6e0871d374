//! High-level configuration API

use crate::error::Result;
use silabas_core::{Options, PrefixStrategy, Region};

/// Default number of memoized results
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Processor configuration: syllabification options plus cache sizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Options applied to every word
    pub options: Options,
    /// Maximum memoized results; 0 disables the memo
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: Options::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Split hiatus sequences (default true)
    pub fn include_hiatus(mut self, include: bool) -> Self {
        self.config.options.include_hiatus = include;
        self
    }

    /// Set the region
    pub fn region(mut self, region: Region) -> Self {
        self.config.options.region = region;
        self
    }

    /// Set the region from a code such as `es_MX`
    pub fn region_code(self, code: &str) -> Result<Self> {
        let region = code.parse::<Region>()?;
        Ok(self.region(region))
    }

    /// Set the prefix strategy
    pub fn prefix_strategy(mut self, strategy: PrefixStrategy) -> Self {
        self.config.options.prefix_strategy = strategy;
        self
    }

    /// Set the prefix strategy by name (`phonetic`, `morfologica`, ...)
    pub fn prefix_strategy_name(self, name: &str) -> Result<Self> {
        let strategy = name.parse::<PrefixStrategy>()?;
        Ok(self.prefix_strategy(strategy))
    }

    /// Set the memo capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        Ok(self.config)
    }
}
