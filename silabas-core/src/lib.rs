//! Spanish orthographic syllabification following the RAE rules
//!
//! Splits a single Spanish word into syllables, reporting the division
//! points and the named rules that fired along the way. The engine handles
//! diphthongs, triphthongs and hiatus (with or without an intercalated h),
//! consonant clusters, digraphs, the qu/gu spelling units, y as a final
//! vowel, the tl cluster by region and optional prefix-aware splitting.
//!
//! # Example
//!
//! ```rust
//! use silabas_core::{syllabify, syllabify_with, Options, PrefixStrategy};
//!
//! let result = syllabify("elefante").unwrap();
//! assert_eq!(result.syllables, vec!["e", "le", "fan", "te"]);
//! assert_eq!(result.division_points, vec![1, 3, 6]);
//!
//! let options = Options::default().with_prefix_strategy(PrefixStrategy::Morphological);
//! let result = syllabify_with("subrayar", &options).unwrap();
//! assert_eq!(result.joined("-"), "sub-ra-yar");
//! ```

pub mod boundary;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod exceptions;
pub mod nucleus;
pub mod options;
pub mod prefix;
pub mod syllabification;
pub mod tables;
pub mod word;

pub use engine::SyllabificationEngine;
pub use error::{CoreError, InvalidWordReason, Result};
pub use exceptions::{ExceptionLog, ExceptionTag};
pub use options::{Options, ParseOptionError, PrefixStrategy, Region};
pub use syllabification::Syllabification;
pub use word::{validate, Word};

/// Split `word` with default options (hiatus split, es_ES, phonetic)
pub fn syllabify(word: &str) -> Result<Syllabification> {
    SyllabificationEngine::default().syllabify(word)
}

/// Split `word` with explicit options
pub fn syllabify_with(word: &str, options: &Options) -> Result<Syllabification> {
    SyllabificationEngine::new(*options).syllabify(word)
}
