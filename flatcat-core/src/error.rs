//! Error types for pattern resolution

use thiserror::Error;

/// Errors produced during pattern resolution
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No pattern expanded to any regular file
    #[error("no files matched any of the patterns: {patterns:?}")]
    NoMatches {
        /// The original pattern list, kept for diagnostics
        patterns: Vec<String>,
    },
}
