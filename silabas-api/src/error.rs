//! API error types

use silabas_core::{CoreError, ParseOptionError};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The word was rejected before analysis
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<ParseOptionError> for ApiError {
    fn from(err: ParseOptionError) -> Self {
        ApiError::Config(err.to_string())
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
