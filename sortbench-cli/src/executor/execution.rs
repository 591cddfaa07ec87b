//! Benchmark Execution
//!
//! Every (size, algorithm) pair runs `repeat` times, each trial on a fresh
//! copy of the one dataset generated for that size. Trials run one after
//! another; nothing is measured concurrently.

use crate::planner::ExecutionPlan;
use indicatif::{ProgressBar, ProgressStyle};
use sortbench_core::{Algorithm, Harness, ResultRecord};

/// Configuration for plan execution
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// Trials per algorithm and size
    pub repeat: usize,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            repeat: 1,
            show_progress: true,
        }
    }
}

/// All trials of one algorithm on one dataset size
#[derive(Debug, Clone)]
pub struct TrialSet {
    /// Algorithm that ran
    pub algorithm: Algorithm,
    /// Dataset size
    pub size: usize,
    /// One record per trial, in execution order
    pub trials: Vec<ResultRecord>,
}

impl TrialSet {
    /// Elapsed time of every trial, in milliseconds
    pub fn elapsed_samples(&self) -> Vec<f64> {
        self.trials.iter().map(|r| r.elapsed_ms).collect()
    }

    /// Whether every trial reported the same operation counts
    pub fn counts_consistent(&self) -> bool {
        self.trials.windows(2).all(|w| {
            w[0].compare_count == w[1].compare_count && w[0].move_count == w[1].move_count
        })
    }
}

/// Execute plans against a harness
pub struct Executor {
    harness: Harness,
    config: ExecutionConfig,
}

impl Executor {
    /// Create an executor over the given harness
    pub fn new(harness: Harness, config: ExecutionConfig) -> Self {
        Self { harness, config }
    }

    /// Harness used for every run
    pub fn harness(&self) -> &Harness {
        &self.harness
    }

    /// Execute every pair in the plan.
    ///
    /// All sizes are validated before the first dataset is generated, so an
    /// invalid size aborts the command without partial output.
    pub fn execute(&self, plan: &ExecutionPlan) -> sortbench_core::Result<Vec<TrialSet>> {
        for &size in &plan.sizes {
            self.harness.validate_size(size)?;
        }

        let repeat = self.config.repeat.max(1);
        let pb = self.progress_bar((plan.len() * repeat) as u64);
        let mut sets = Vec::with_capacity(plan.len());

        for &size in &plan.sizes {
            let dataset = self.harness.dataset(size)?;
            tracing::debug!(size, algorithms = plan.algorithms.len(), repeat, "running size");

            for &algorithm in &plan.algorithms {
                pb.set_message(format!("{} n={}", algorithm, dataset.len()));

                let mut trials = Vec::with_capacity(repeat);
                for _ in 0..repeat {
                    trials.push(self.harness.run_on(algorithm, &dataset)?);
                    pb.inc(1);
                }

                let set = TrialSet {
                    algorithm,
                    size: dataset.len(),
                    trials,
                };
                if !set.counts_consistent() {
                    tracing::warn!(
                        algorithm = %algorithm,
                        size = set.size,
                        "operation counts differ between trials on identical input"
                    );
                }
                sets.push(set);
            }
        }

        pb.finish_and_clear();
        Ok(sets)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}
