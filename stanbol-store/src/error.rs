//! Error types for store access

use thiserror::Error;

/// Store access errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The query cannot be evaluated (empty pattern, literal subject, ...)
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The backing store could not be read
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        StoreError::InvalidQuery(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        StoreError::Unavailable(msg.into())
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
