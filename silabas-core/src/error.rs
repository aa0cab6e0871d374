//! Core error types (deterministic only)

use thiserror::Error;

/// Why a word was rejected before analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWordReason {
    /// Nothing left after trimming
    Empty,
    /// Contains something other than Spanish letters
    InvalidCharacters,
}

/// Core algorithm errors (no I/O, no external failures)
///
/// Rule gaps are never reported here; they surface as
/// [`ExceptionTag`](crate::ExceptionTag)s on an otherwise successful result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The input is not a single Spanish word
    #[error("invalid word: {}", describe(.word, .reason))]
    InvalidWord {
        /// The offending input, after trimming
        word: String,
        /// What made it invalid
        reason: InvalidWordReason,
    },
}

fn describe(word: &str, reason: &InvalidWordReason) -> String {
    match reason {
        InvalidWordReason::Empty => "empty word".to_string(),
        InvalidWordReason::InvalidCharacters => format!("invalid characters in '{word}'"),
    }
}

impl CoreError {
    /// The rejected word, if any
    pub fn word(&self) -> &str {
        match self {
            CoreError::InvalidWord { word, .. } => word,
        }
    }
}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
