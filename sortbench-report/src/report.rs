//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sortbench_core::{Algorithm, ResultRecord};
use sortbench_stats::TimingSummary;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub results: Vec<AlgorithmResult>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    pub schema_version: u32,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Generator seed shared by every dataset in the run
    pub seed: u32,
    /// Exclusive upper bound on generated values
    pub upper_bound: u32,
    /// Trials per algorithm and size
    pub repeat: usize,
    /// Dataset sizes, in execution order
    pub sizes: Vec<usize>,
}

/// One algorithm on one dataset size, aggregated over its trials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub name: String,
    pub size: usize,
    pub status: RunStatus,
    pub compare_count: u64,
    pub move_count: u64,
    pub timing: TimingSummary,
    pub failure: Option<FailureInfo>,
}

/// Outcome of the sortedness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Sorted,
    Incorrect,
}

/// Failure information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureInfo {
    pub kind: String,
    pub message: String,
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Trials executed across all sizes and algorithms
    pub total_runs: usize,
    /// Trials whose output verified as sorted
    pub sorted: usize,
    /// Trials whose output failed verification
    pub incorrect: usize,
    /// Wall-clock time of the whole command
    pub total_duration_ms: f64,
}

impl AlgorithmResult {
    /// Aggregate the trials of one algorithm on one size.
    ///
    /// Counts come from the first trial; any incorrect trial marks the
    /// whole result incorrect.
    pub fn from_trials(trials: &[ResultRecord], timing: TimingSummary) -> Option<Self> {
        let first = trials.first()?;
        let failed = trials.iter().find(|r| !r.sorted);

        let failure = failed.map(|r| FailureInfo {
            kind: "unsorted".to_string(),
            message: match r.first_inversion {
                Some(index) => format!(
                    "{} left elements {} and {} out of order",
                    r.algorithm_name,
                    index,
                    index + 1
                ),
                None => format!("{} left its output out of order", r.algorithm_name),
            },
        });

        Some(Self {
            algorithm: first.algorithm,
            name: first.algorithm_name.clone(),
            size: first.size,
            status: if failure.is_some() {
                RunStatus::Incorrect
            } else {
                RunStatus::Sorted
            },
            compare_count: first.compare_count,
            move_count: first.move_count,
            timing,
            failure,
        })
    }
}

impl Report {
    /// Whether any algorithm produced unsorted output
    pub fn has_failures(&self) -> bool {
        self.summary.incorrect > 0
    }

    /// Distinct sizes in the order they appear in `results`
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = Vec::new();
        for result in &self.results {
            if !sizes.contains(&result.size) {
                sizes.push(result.size);
            }
        }
        sizes
    }
}
