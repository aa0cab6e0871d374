//! Validated input word
//!
//! A [`Word`] is built once per call and never mutated. All indices used by
//! the engine are character offsets into it; validation guarantees one
//! `char` per Spanish letter, so character offsets are letter offsets.

use crate::classifier::normalize;
use crate::error::{CoreError, InvalidWordReason, Result};
use regex::Regex;
use std::sync::OnceLock;

static SPANISH_WORD: OnceLock<Regex> = OnceLock::new();

fn spanish_word_pattern() -> &'static Regex {
    SPANISH_WORD.get_or_init(|| {
        Regex::new(r"^[a-záéíóúüñA-ZÁÉÍÓÚÜÑ]+$").expect("constant pattern compiles")
    })
}

/// Check that `word` is non-empty and made only of Spanish letters
pub fn validate(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(CoreError::InvalidWord {
            word: String::new(),
            reason: InvalidWordReason::Empty,
        });
    }
    if !spanish_word_pattern().is_match(word) {
        return Err(CoreError::InvalidWord {
            word: word.to_string(),
            reason: InvalidWordReason::InvalidCharacters,
        });
    }
    Ok(())
}

/// Immutable view of a word in its three forms
#[derive(Debug, Clone)]
pub struct Word {
    original: Vec<char>,
    lower: Vec<char>,
    normalized: Vec<char>,
}

impl Word {
    /// Trim, validate and index a word
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        validate(trimmed)?;
        Ok(Self::from_validated(trimmed))
    }

    pub(crate) fn from_validated(text: &str) -> Self {
        let original: Vec<char> = text.chars().collect();
        // every accepted letter lowercases to exactly one char
        let lower: Vec<char> = original
            .iter()
            .map(|c| c.to_lowercase().next().unwrap_or(*c))
            .collect();
        let normalized = lower.iter().map(|&c| normalize(c)).collect();
        Self {
            original,
            lower,
            normalized,
        }
    }

    /// Length in letters
    #[inline]
    pub fn len(&self) -> usize {
        self.original.len()
    }

    /// Always false for a parsed word
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Lowercase letter at `index`
    #[inline]
    pub fn lower_at(&self, index: usize) -> Option<char> {
        self.lower.get(index).copied()
    }

    /// Lowercase, accent-stripped letter at `index`
    #[inline]
    pub fn normalized_at(&self, index: usize) -> Option<char> {
        self.normalized.get(index).copied()
    }

    /// Original text (case and accents preserved)
    pub fn text(&self) -> String {
        self.original.iter().collect()
    }

    /// Original letters in `start..end`
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.original[start..end.min(self.len())].iter().collect()
    }

    /// Lowercase letters in `start..end`
    pub fn lower_slice(&self, start: usize, end: usize) -> String {
        self.lower[start..end.min(self.len())].iter().collect()
    }

    /// Lowercase form starts with `prefix`
    pub fn starts_with_lower(&self, prefix: &str) -> bool {
        let mut letters = self.lower.iter();
        prefix.chars().all(|p| letters.next() == Some(&p))
    }
}
