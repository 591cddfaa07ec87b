//! Summary Statistics
//!
//! One summary per (algorithm, size) pair. Unlike the operation counters,
//! elapsed times vary between trials, so they are reported as a distribution.

use crate::percentiles::percentile_of_sorted;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Distribution of elapsed times, in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Number of trials summarised
    pub samples: usize,
    /// Arithmetic mean
    pub mean_ms: f64,
    /// 50th percentile
    pub median_ms: f64,
    /// Sample standard deviation (0 with fewer than two trials)
    pub std_dev_ms: f64,
    /// Fastest trial
    pub min_ms: f64,
    /// Slowest trial
    pub max_ms: f64,
    /// 95th percentile
    pub p95_ms: f64,
}

impl TimingSummary {
    /// Relative standard deviation in percent
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean_ms == 0.0 {
            0.0
        } else {
            (self.std_dev_ms / self.mean_ms) * 100.0
        }
    }
}

/// Summarise elapsed-time samples (milliseconds)
pub fn summarize(samples_ms: &[f64]) -> TimingSummary {
    if samples_ms.is_empty() {
        return TimingSummary::default();
    }

    let mut sorted = samples_ms.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    TimingSummary {
        samples: n,
        mean_ms: mean,
        median_ms: percentile_of_sorted(&sorted, 50.0),
        std_dev_ms: std_dev,
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
        p95_ms: percentile_of_sorted(&sorted, 95.0),
    }
}
