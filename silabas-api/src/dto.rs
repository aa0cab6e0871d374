//! Data Transfer Objects for API

use silabas_core::{Options, PrefixStrategy, Region, Syllabification};
use std::fmt;

/// Memo key: the trimmed word plus every option that can change the result
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Trimmed word, case preserved
    pub word: String,
    /// Hiatus mode
    pub include_hiatus: bool,
    /// Region
    pub region: Region,
    /// Prefix strategy
    pub prefix_strategy: PrefixStrategy,
}

impl CacheKey {
    /// Key for `word` under `options`
    pub fn new(word: &str, options: &Options) -> Self {
        Self {
            word: word.to_string(),
            include_hiatus: options.include_hiatus,
            region: options.region,
            prefix_strategy: options.prefix_strategy,
        }
    }
}

/// Where a result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Source {
    /// Freshly computed
    Computed,
    /// Served from the memo
    Cache,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Computed => f.write_str("computed"),
            Source::Cache => f.write_str("cache"),
        }
    }
}

/// Result of processing one word
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Output {
    /// The word as analyzed (trimmed)
    pub word: String,
    /// Syllables in order
    pub syllables: Vec<String>,
    /// Letter offsets where each new syllable begins
    pub division_points: Vec<usize>,
    /// Exception identifiers, first-seen order
    pub exceptions: Vec<String>,
    /// Computed or served from the memo
    pub source: Source,
    /// Wall time for this call in milliseconds
    pub elapsed_ms: f64,
}

impl Output {
    pub(crate) fn from_result(word: String, result: &Syllabification, source: Source, elapsed_ms: f64) -> Self {
        Self {
            word,
            syllables: result.syllables.clone(),
            division_points: result.division_points.clone(),
            exceptions: result.exception_names(),
            source,
            elapsed_ms,
        }
    }

    /// Syllables joined by `separator`
    pub fn joined(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }

    /// Serialize to a JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
