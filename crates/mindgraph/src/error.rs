//! Error types for mindgraph operations.
//!
//! This module provides the main error type [`MindgraphError`] which wraps
//! every failure a pipeline run can end with. All of them are recoverable:
//! a failed run leaves the previously loaded document untouched.

use std::io;

use thiserror::Error;

use mindgraph_parser::error::ParseError;

use crate::validate::ValidationError;

/// The main error type for mindgraph operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured parse
/// error so callers can render labeled snippets.
#[derive(Debug, Error)]
pub enum MindgraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Invalid document: {0}")]
    Validation(#[from] ValidationError),

    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("No mind-map is loaded")]
    NoDocument,
}

impl MindgraphError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
