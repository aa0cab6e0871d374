//! Public API for the silabas Spanish syllabifier
//!
//! Wraps the core engine with a bounded memo of recent results, timing
//! and provenance metadata, and HTML rendering.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod dto;
pub mod error;
pub mod html;

use cache::MemoCache;
use silabas_core::{Options, Syllabification, SyllabificationEngine, Word};
use std::time::Instant;
use tracing::{debug, trace};

// Re-export key types
pub use config::{Config, ConfigBuilder, DEFAULT_CACHE_CAPACITY};
pub use dto::{CacheKey, Output, Source};
pub use error::{ApiError, Result};
pub use html::{render_html, render_html_with_class};
pub use silabas_core::{ExceptionTag, PrefixStrategy, Region};

/// Main entry point: syllabifies words and memoizes the results
///
/// A processor is `Sync`; share it by reference (or `Arc`) across threads.
#[derive(Debug)]
pub struct SyllableProcessor {
    config: Config,
    cache: MemoCache<CacheKey, Syllabification>,
}

impl SyllableProcessor {
    /// Processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Processor with custom configuration
    pub fn with_config(config: Config) -> Self {
        let cache = MemoCache::new(config.cache_capacity);
        Self { config, cache }
    }

    /// Process `word` with the configured options
    pub fn process(&self, word: &str) -> Result<Output> {
        self.process_with(word, &self.config.options)
    }

    /// Process `word` with explicit options
    pub fn process_with(&self, word: &str, options: &Options) -> Result<Output> {
        let started = Instant::now();
        let parsed = Word::parse(word)?;
        let text = parsed.text();
        let key = CacheKey::new(&text, options);

        if let Some(hit) = self.cache.get(&key) {
            trace!(word = %text, "memo hit");
            return Ok(Output::from_result(text, &hit, Source::Cache, elapsed_ms(started)));
        }

        let result = SyllabificationEngine::new(*options).syllabify_word(&parsed);
        let elapsed = elapsed_ms(started);
        debug!(word = %text, elapsed_ms = elapsed, "computed");

        let output = Output::from_result(text, &result, Source::Computed, elapsed);
        self.cache.put(key, result);
        Ok(output)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of memoized results
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all memoized results
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl Default for SyllableProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

// Convenience functions

/// Syllables of `word` with default options, no memo
pub fn syllabify(word: &str) -> Result<Vec<String>> {
    Ok(silabas_core::syllabify(word)?.syllables)
}

/// Syllables of `word` joined by `separator`
pub fn hyphenate(word: &str, separator: &str) -> Result<String> {
    Ok(silabas_core::syllabify(word)?.joined(separator))
}

/// HTML markup for `word` with default options
pub fn syllabify_html(word: &str) -> Result<String> {
    let result = silabas_core::syllabify(word)?;
    Ok(render_html(&result.syllables))
}
