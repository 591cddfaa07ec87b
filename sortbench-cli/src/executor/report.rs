//! Report Building

use super::execution::TrialSet;
use sortbench_core::Harness;
use sortbench_report::{
    AlgorithmResult, Report, ReportMeta, ReportSummary, RunStatus, SCHEMA_VERSION,
};
use sortbench_stats::TimingSummary;

/// Build a complete Report from executed trial sets and their summaries
pub fn build_report(
    sets: &[TrialSet],
    stats: &[TimingSummary],
    harness: &Harness,
    repeat: usize,
    total_duration_ms: f64,
) -> Report {
    let mut summary = ReportSummary {
        total_duration_ms,
        ..Default::default()
    };
    let mut results = Vec::with_capacity(sets.len());
    let mut sizes: Vec<usize> = Vec::new();

    for (set, timing) in sets.iter().zip(stats) {
        if !sizes.contains(&set.size) {
            sizes.push(set.size);
        }
        summary.total_runs += set.trials.len();
        let incorrect = set.trials.iter().filter(|r| !r.sorted).count();
        summary.incorrect += incorrect;
        summary.sorted += set.trials.len() - incorrect;

        if let Some(result) = AlgorithmResult::from_trials(&set.trials, timing.clone()) {
            if result.status == RunStatus::Incorrect {
                tracing::error!(
                    algorithm = %result.algorithm,
                    size = result.size,
                    "algorithm produced unsorted output; its statistics are not meaningful"
                );
            }
            results.push(result);
        }
    }

    Report {
        meta: ReportMeta {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
            seed: harness.generator().seed(),
            upper_bound: harness.generator().upper_bound(),
            repeat,
            sizes,
        },
        results,
        summary,
    }
}
