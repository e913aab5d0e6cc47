//! Error types for enhancement parsing
//!
//! Every failure aborts the whole parse: callers receive either a complete
//! [`AnnotationGraph`](crate::AnnotationGraph) or one of these errors, never a
//! partially populated graph.

use stanbol_store::StoreError;
use std::sync::Arc;
use thiserror::Error;

/// Enhancement parsing errors
#[derive(Error, Debug)]
pub enum EnhancementError {
    /// A query against the triple store failed
    #[error("Store query failed: {0}")]
    StoreQueryFailed(#[from] StoreError),

    /// A required field is missing or a value cannot be parsed
    #[error("Malformed enhancement <{uri}>: {reason}")]
    MalformedEnhancement { uri: Arc<str>, reason: String },

    /// A relation target never resolved to a parsed enhancement
    #[error("Unresolved relation from <{from}> to <{to}>")]
    UnresolvedRelation { from: Arc<str>, to: Arc<str> },

    /// Relation resolution exceeded the configured number of steps
    #[error("Relation resolution exceeded {0} steps")]
    ResolutionLimit(usize),

    /// Parse options could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EnhancementError {
    /// Create a malformed-enhancement error
    pub fn malformed(uri: &Arc<str>, reason: impl Into<String>) -> Self {
        EnhancementError::MalformedEnhancement {
            uri: uri.clone(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the response content rather than the store
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            EnhancementError::MalformedEnhancement { .. }
                | EnhancementError::UnresolvedRelation { .. }
        )
    }
}

/// Result type for enhancement parsing
pub type Result<T> = std::result::Result<T, EnhancementError>;
