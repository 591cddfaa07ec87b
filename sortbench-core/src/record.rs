//! Result Record
//!
//! The value handed back to callers for display. The harness keeps no
//! reference to it after returning.

use crate::algorithms::Algorithm;
use crate::error::{Result, SortBenchError};
use crate::instrument::SortStats;
use serde::{Deserialize, Serialize};

/// Counters, timing and verdict for one algorithm run on one dataset size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Algorithm that ran
    pub algorithm: Algorithm,
    /// Display name of the algorithm
    pub algorithm_name: String,
    /// Number of elements sorted
    pub size: usize,
    /// Element comparisons
    pub compare_count: u64,
    /// Element relocations
    pub move_count: u64,
    /// Elapsed time of the sort call on the monotonic clock, in milliseconds
    pub elapsed_ms: f64,
    /// Whether the output passed the sortedness check
    pub sorted: bool,
    /// First adjacent pair found out of order, when the check failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_inversion: Option<usize>,
}

impl ResultRecord {
    /// Package a finished instrumentation record
    pub fn new(size: usize, stats: &SortStats, first_inversion: Option<usize>) -> Self {
        Self {
            algorithm: stats.algorithm(),
            algorithm_name: stats.algorithm_name().to_string(),
            size,
            compare_count: stats.compare_count(),
            move_count: stats.move_count(),
            elapsed_ms: stats.elapsed_ms(),
            sorted: first_inversion.is_none(),
            first_inversion,
        }
    }

    /// Turn a failed sortedness check into [`SortBenchError::SortIncorrect`]
    pub fn ensure_sorted(&self) -> Result<()> {
        match self.first_inversion {
            None => Ok(()),
            Some(index) => Err(SortBenchError::SortIncorrect {
                algorithm: self.algorithm,
                index,
            }),
        }
    }
}
