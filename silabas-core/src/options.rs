//! Per-call options: hiatus mode, regional variant and prefix strategy

use crate::classifier::normalize;
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Regional variant; only es_MX changes a rule (tl kept together)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Spain (peninsular norm)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "es_ES"))]
    EsEs,
    /// Mexico
    #[cfg_attr(feature = "serde", serde(rename = "es_MX"))]
    EsMx,
    /// Argentina
    #[cfg_attr(feature = "serde", serde(rename = "es_AR"))]
    EsAr,
    /// Colombia
    #[cfg_attr(feature = "serde", serde(rename = "es_CO"))]
    EsCo,
    /// United States
    #[cfg_attr(feature = "serde", serde(rename = "es_US"))]
    EsUs,
}

impl Region {
    /// All supported regions
    pub const ALL: [Region; 5] = [
        Region::EsEs,
        Region::EsMx,
        Region::EsAr,
        Region::EsCo,
        Region::EsUs,
    ];

    /// Locale code such as `es_MX`
    pub fn code(&self) -> &'static str {
        match self {
            Region::EsEs => "es_ES",
            Region::EsMx => "es_MX",
            Region::EsAr => "es_AR",
            Region::EsCo => "es_CO",
            Region::EsUs => "es_US",
        }
    }

    /// Whether `tl` is an inseparable onset in this region
    pub fn keeps_tl_together(&self) -> bool {
        matches!(self, Region::EsMx)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Region::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ParseOptionError::region(s))
    }
}

/// How a leading prefix is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrefixStrategy {
    /// Ignore prefixes; uniform phonetic rules
    #[default]
    Phonetic,
    /// Always cut after a detected prefix
    Morphological,
    /// Cut only when the boundary letters favour it
    Adaptive,
}

impl PrefixStrategy {
    /// All strategies
    pub const ALL: [PrefixStrategy; 3] = [
        PrefixStrategy::Phonetic,
        PrefixStrategy::Morphological,
        PrefixStrategy::Adaptive,
    ];

    /// English name
    pub fn name(&self) -> &'static str {
        match self {
            PrefixStrategy::Phonetic => "phonetic",
            PrefixStrategy::Morphological => "morphological",
            PrefixStrategy::Adaptive => "adaptive",
        }
    }

    /// Spanish name (fonetica, morfologica, adaptativa)
    pub fn spanish_name(&self) -> &'static str {
        match self {
            PrefixStrategy::Phonetic => "fonetica",
            PrefixStrategy::Morphological => "morfologica",
            PrefixStrategy::Adaptive => "adaptativa",
        }
    }
}

impl fmt::Display for PrefixStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrefixStrategy {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // accepts fonética / morfológica as written
        let wanted: String = s.trim().to_lowercase().chars().map(normalize).collect();
        PrefixStrategy::ALL
            .into_iter()
            .find(|p| wanted == p.name() || wanted == p.spanish_name())
            .ok_or_else(|| ParseOptionError::strategy(s))
    }
}

/// Unknown region or strategy name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseOptionError {
    kind: &'static str,
    value: String,
}

impl ParseOptionError {
    fn region(value: &str) -> Self {
        Self {
            kind: "region",
            value: value.to_string(),
        }
    }

    fn strategy(value: &str) -> Self {
        Self {
            kind: "prefix strategy",
            value: value.to_string(),
        }
    }
}

/// Options for one syllabification call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Split hiatus sequences into separate syllables
    pub include_hiatus: bool,
    /// Regional variant
    pub region: Region,
    /// Prefix handling
    pub prefix_strategy: PrefixStrategy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            include_hiatus: true,
            region: Region::EsEs,
            prefix_strategy: PrefixStrategy::Phonetic,
        }
    }
}

impl Options {
    /// Set hiatus mode
    pub fn with_hiatus(mut self, include_hiatus: bool) -> Self {
        self.include_hiatus = include_hiatus;
        self
    }

    /// Set region
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Set prefix strategy
    pub fn with_prefix_strategy(mut self, strategy: PrefixStrategy) -> Self {
        self.prefix_strategy = strategy;
        self
    }
}
