//! Statistics Computation
//!
//! Summaries are computed once every trial has finished, so the parallelism
//! here never overlaps a timed region.

use super::execution::TrialSet;
use rayon::prelude::*;
use sortbench_stats::{TimingSummary, summarize};

/// Compute a timing summary for each trial set (parallelized with Rayon)
pub fn compute_statistics(sets: &[TrialSet]) -> Vec<TimingSummary> {
    sets.par_iter()
        .map(|set| summarize(&set.elapsed_samples()))
        .collect()
}
