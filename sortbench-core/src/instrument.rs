//! Instrumentation Record
//!
//! Per-run operation counters threaded through every sorting routine by
//! exclusive reference. A record is created fresh for each algorithm
//! invocation and never reused.

use crate::algorithms::Algorithm;
use crate::measure::as_millis_f64;
use std::time::Duration;

/// Counters and elapsed time for one sort call
#[derive(Debug, Clone, PartialEq)]
pub struct SortStats {
    algorithm: Algorithm,
    compare_count: u64,
    move_count: u64,
    elapsed: Option<Duration>,
}

impl SortStats {
    /// Fresh record with zeroed counters
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            compare_count: 0,
            move_count: 0,
            elapsed: None,
        }
    }

    /// Count one element-to-element ordering test
    #[inline(always)]
    pub fn record_compare(&mut self) {
        self.compare_count += 1;
    }

    /// Count one element relocation
    #[inline(always)]
    pub fn record_move(&mut self) {
        self.move_count += 1;
    }

    /// Set the elapsed time once the timed region has closed.
    ///
    /// Only the first call takes effect.
    pub fn finish(&mut self, elapsed: Duration) {
        debug_assert!(self.elapsed.is_none(), "elapsed time recorded twice");
        self.elapsed.get_or_insert(elapsed);
    }

    /// Algorithm this record belongs to
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Display name of the algorithm
    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.display_name()
    }

    /// Element comparisons performed so far
    pub fn compare_count(&self) -> u64 {
        self.compare_count
    }

    /// Element relocations performed so far
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Elapsed time, if the run has finished
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Elapsed time in fractional milliseconds (0.0 until finished)
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.map(as_millis_f64).unwrap_or(0.0)
    }
}
