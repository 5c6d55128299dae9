//! Error types for annealing runs and history playback.

use thiserror::Error;

/// Main error type for this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnealError {
    /// A run parameter or initial state was rejected at construction.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A history consumer walked past the last recorded state.
    #[error("History exhausted: index {index} out of range for {len} recorded states")]
    ExhaustedSequence {
        /// Requested index.
        index: usize,
        /// Number of recorded states.
        len: usize,
    },

    /// `run` was called on an engine that has already finished.
    #[error("Annealing run already completed")]
    AlreadyRun,
}

/// Result type alias for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealError>;
