//! Error types for the search crate.

use fuzzrank_core::{Error as CoreError, ErrorCode};
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while reading and ranking candidates.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Reading the candidate stream failed
    #[error("Failed to read candidates: {0}")]
    Io(#[from] std::io::Error),

    /// Scoring weights break the score invariants
    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),

    /// Reader or ranking options are out of range
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl From<SearchError> for CoreError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Io(e) => CoreError::from(e).with_context("While reading candidates"),
            SearchError::InvalidWeights(msg) => {
                CoreError::new(ErrorCode::InvalidConfigValue, format!("Invalid scoring weights: {}", msg))
            }
            SearchError::InvalidOptions(msg) => CoreError::new(ErrorCode::InvalidInput, msg),
        }
    }
}
