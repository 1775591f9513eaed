// src/error.rs
//! Typed error surface for the analysis core.
//!
//! Malformed configuration fails fast before any processing; tokenizer
//! failures are propagated verbatim from the adapter boundary. Empty input
//! is never an error — every component returns a well-formed zero result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Rejected before processing begins: non-positive thresholds, or a
    /// sentiment lexicon whose positive and negative sets overlap.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Error from the external tokenizer, passed through unchanged.
    /// No partial aggregate state is exposed when this occurs.
    #[error("tokenizer failed: {0}")]
    Tokenizer(#[source] anyhow::Error),
}

impl AnalysisError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
