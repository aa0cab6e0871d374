//! Result of splitting one word

use crate::exceptions::ExceptionTag;

/// Syllables of a word with the positions that separate them
///
/// Concatenating `syllables` yields the input word exactly (case and accents
/// preserved). `division_points` are strictly increasing letter offsets in
/// `1..len`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Syllabification {
    /// Syllables in order
    pub syllables: Vec<String>,
    /// Letter offsets where a new syllable begins
    pub division_points: Vec<usize>,
    /// Rules that fired, first-seen order
    pub exceptions: Vec<ExceptionTag>,
}

impl Syllabification {
    /// Number of syllables
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    /// True only when nothing was produced
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Syllables joined by `separator`
    pub fn joined(&self, separator: &str) -> String {
        self.syllables.join(separator)
    }

    /// The reconstructed word
    pub fn word(&self) -> String {
        self.syllables.concat()
    }

    /// Exception identifiers as strings
    pub fn exception_names(&self) -> Vec<String> {
        self.exceptions.iter().map(ToString::to_string).collect()
    }

    /// Whether any tag flags a gap in the rule tables
    pub fn has_rule_gap(&self) -> bool {
        self.exceptions.iter().any(ExceptionTag::is_rule_gap)
    }
}
