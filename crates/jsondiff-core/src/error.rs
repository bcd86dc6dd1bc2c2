//! Error types for document parsing.
//!
//! Comparison itself cannot fail; only turning raw text into a tree can.

use thiserror::Error;

/// Errors that can occur before a comparison starts.
#[derive(Error, Debug)]
pub enum DiffError {
    /// The input text was not valid JSON. The inner error carries the
    /// line and column where parsing stopped.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout jsondiff-core.
pub type Result<T> = std::result::Result<T, DiffError>;
