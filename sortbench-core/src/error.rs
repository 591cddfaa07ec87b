//! Error taxonomy for the engine.

use crate::algorithms::Algorithm;
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors produced by dataset generation and the benchmark harness
#[derive(Debug, Error)]
pub enum SortBenchError {
    /// Requested size is negative or above the harness limit
    #[error("Invalid dataset size: {size} (must be between 0 and {max})")]
    InvalidSize {
        /// Size as requested by the caller
        size: i64,
        /// Largest size the harness accepts
        max: usize,
    },

    /// Generator upper bound of zero leaves no values to draw from
    #[error("Invalid upper bound: {0} (must be at least 1)")]
    InvalidUpperBound(u32),

    /// Dataset or one of its per-algorithm copies could not be allocated
    #[error("Failed to allocate {len} elements: {source}")]
    AllocationFailure {
        /// Number of elements requested
        len: usize,
        /// Underlying reservation failure
        #[source]
        source: TryReserveError,
    },

    /// Algorithm id that is not in the registry
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Output of an algorithm failed the sortedness check
    #[error("{algorithm} produced unsorted output at index {index}")]
    SortIncorrect {
        /// Algorithm that produced the output
        algorithm: Algorithm,
        /// First index `i` with `data[i] > data[i + 1]`
        index: usize,
    },
}

/// Result alias used across the engine
pub type Result<T> = std::result::Result<T, SortBenchError>;
