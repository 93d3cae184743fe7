//! Centralized error types for custgraph.

use thiserror::Error;

/// Main error type for customer store operations.
#[derive(Error, Debug)]
pub enum CustError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for custgraph operations.
pub type CustResult<T> = Result<T, CustError>;

impl CustError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap any backend failure as a store error.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }

    /// The underlying message, without the variant prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Store(msg) | Self::Template(msg) => msg,
        }
    }
}
