//! Benchmark Harness
//!
//! Generates one dataset per request, gives every algorithm its own copy,
//! times the sort call on the monotonic clock, verifies the output and
//! packages a [`ResultRecord`].
//!
//! ```text
//!   size ──► DatasetGenerator ──► dataset
//!                                    │  duplicate (per algorithm)
//!                                    ▼
//!                     Timer ─► Algorithm::sort ─► Timer::stop
//!                                    │
//!                                    ▼
//!                         first_inversion (verifier)
//!                                    │
//!                                    ▼
//!                              ResultRecord
//! ```
//!
//! Runs are strictly sequential. Nothing is shared between runs except the
//! read-only source dataset.

use crate::algorithms::{Algorithm, SortFn};
use crate::dataset::{DatasetGenerator, duplicate};
use crate::error::{Result, SortBenchError};
use crate::instrument::SortStats;
use crate::measure::Timer;
use crate::record::ResultRecord;
use crate::verify::first_inversion;

/// Largest dataset the default harness accepts
pub const MAX_DATASET_SIZE: usize = 1_000_000;

/// Runs algorithms against generated datasets
#[derive(Debug, Clone)]
pub struct Harness {
    generator: DatasetGenerator,
    max_size: usize,
}

impl Harness {
    /// Create a harness with an explicit generator and size limit
    pub fn new(generator: DatasetGenerator, max_size: usize) -> Self {
        Self {
            generator,
            max_size,
        }
    }

    /// Generator used for every dataset
    pub fn generator(&self) -> &DatasetGenerator {
        &self.generator
    }

    /// Largest accepted dataset size
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Reject negative sizes and sizes above the limit before allocating
    pub fn validate_size(&self, size: i64) -> Result<usize> {
        usize::try_from(size)
            .ok()
            .filter(|&len| len <= self.max_size)
            .ok_or(SortBenchError::InvalidSize {
                size,
                max: self.max_size,
            })
    }

    /// Validate `size` and generate the dataset for it
    pub fn dataset(&self, size: i64) -> Result<Vec<i32>> {
        self.validate_size(size)?;
        self.generator.generate(size)
    }

    /// Run one algorithm on an independent copy of `dataset`
    pub fn run_on(&self, algorithm: Algorithm, dataset: &[i32]) -> Result<ResultRecord> {
        self.run_with(algorithm, algorithm.sort_fn(), dataset)
    }

    /// Time `sort` on a copy of `dataset` and verify its output, recording
    /// the run under `algorithm`
    pub(crate) fn run_with(
        &self,
        algorithm: Algorithm,
        sort: SortFn,
        dataset: &[i32],
    ) -> Result<ResultRecord> {
        let mut data = duplicate(dataset)?;
        let mut stats = SortStats::new(algorithm);

        let timer = Timer::start();
        sort(&mut data, &mut stats);
        let elapsed = timer.stop();
        stats.finish(elapsed);

        let inversion = first_inversion(&data);
        match inversion {
            Some(index) => tracing::error!(
                algorithm = %algorithm,
                size = data.len(),
                index,
                left = data[index],
                right = data[index + 1],
                "sorted output is out of order"
            ),
            None => tracing::debug!(
                algorithm = %algorithm,
                size = data.len(),
                compares = stats.compare_count(),
                moves = stats.move_count(),
                elapsed_ms = stats.elapsed_ms(),
                "sort finished"
            ),
        }

        Ok(ResultRecord::new(data.len(), &stats, inversion))
    }

    /// Run one algorithm on a freshly generated dataset of `size`
    pub fn run_one(&self, algorithm: Algorithm, size: i64) -> Result<ResultRecord> {
        let dataset = self.dataset(size)?;
        self.run_on(algorithm, &dataset)
    }

    /// Run `algorithms`, in the given order, on copies of one dataset of `size`
    pub fn run_selected(&self, algorithms: &[Algorithm], size: i64) -> Result<Vec<ResultRecord>> {
        let dataset = self.dataset(size)?;
        tracing::info!(
            size,
            algorithms = algorithms.len(),
            seed = self.generator.seed(),
            "starting sweep"
        );
        algorithms
            .iter()
            .map(|&algorithm| self.run_on(algorithm, &dataset))
            .collect()
    }

    /// Run every registered algorithm, in registry order, on one dataset of `size`
    pub fn run_sweep(&self, size: i64) -> Result<Vec<ResultRecord>> {
        self.run_selected(&Algorithm::ALL, size)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(DatasetGenerator::default(), MAX_DATASET_SIZE)
    }
}

/// Run one algorithm on the default dataset of `size`
pub fn run_one(algorithm: Algorithm, size: i64) -> Result<ResultRecord> {
    Harness::default().run_one(algorithm, size)
}

/// Run all eight algorithms on the default dataset of `size`
pub fn run_sweep(size: i64) -> Result<Vec<ResultRecord>> {
    Harness::default().run_sweep(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_returns_registry_order() {
        let records = run_sweep(200).unwrap();
        let order: Vec<_> = records.iter().map(|r| r.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        assert!(records.iter().all(|r| r.sorted && r.size == 200));
    }

    #[test]
    fn test_empty_and_single_runs_report_zero_counts() {
        for size in [0, 1] {
            for record in run_sweep(size).unwrap() {
                assert_eq!(record.compare_count, 0, "{}", record.algorithm);
                assert_eq!(record.move_count, 0, "{}", record.algorithm);
                assert!(record.elapsed_ms >= 0.0);
                assert!(record.sorted);
            }
        }
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = run_one(Algorithm::Bubble, -5).unwrap_err();
        assert!(matches!(err, SortBenchError::InvalidSize { size: -5, .. }));
    }

    #[test]
    fn test_size_above_limit_rejected() {
        let harness = Harness::new(DatasetGenerator::default(), 100);
        assert!(harness.run_one(Algorithm::Radix, 100).is_ok());
        let err = harness.run_one(Algorithm::Radix, 101).unwrap_err();
        assert!(matches!(err, SortBenchError::InvalidSize { size: 101, max: 100 }));
    }

    #[test]
    fn test_run_on_leaves_source_untouched() {
        let harness = Harness::default();
        let dataset = vec![5, 3, 3, 1];
        let record = harness.run_on(Algorithm::Insertion, &dataset).unwrap();
        assert_eq!(dataset, vec![5, 3, 3, 1]);
        assert_eq!((record.compare_count, record.move_count), (6, 5));
    }

    #[test]
    fn test_run_one_is_deterministic() {
        let a = run_one(Algorithm::Quicksort, 500).unwrap();
        let b = run_one(Algorithm::Quicksort, 500).unwrap();
        assert_eq!(a.compare_count, b.compare_count);
        assert_eq!(a.move_count, b.move_count);
    }

    fn leave_unsorted(_data: &mut [i32], stats: &mut SortStats) {
        stats.record_compare();
    }

    #[test]
    fn test_unsorted_output_is_flagged() {
        let harness = Harness::default();
        let record = harness
            .run_with(Algorithm::Bubble, leave_unsorted, &[2, 1])
            .unwrap();
        assert!(!record.sorted);
        assert_eq!(record.first_inversion, Some(0));
        assert_eq!(record.compare_count, 1);
        assert!(matches!(
            record.ensure_sorted(),
            Err(SortBenchError::SortIncorrect {
                algorithm: Algorithm::Bubble,
                index: 0
            })
        ));
    }

    #[test]
    fn test_inversion_reported_past_sorted_prefix() {
        let record = Harness::default()
            .run_with(Algorithm::Mergesort, leave_unsorted, &[1, 2, 3, 9, 4])
            .unwrap();
        assert!(!record.sorted);
        assert_eq!(record.first_inversion, Some(3));
    }

    #[test]
    fn test_run_selected_keeps_requested_order() {
        let harness = Harness::default();
        let records = harness
            .run_selected(&[Algorithm::Radix, Algorithm::Bubble], 50)
            .unwrap();
        assert_eq!(records[0].algorithm, Algorithm::Radix);
        assert_eq!(records[1].algorithm, Algorithm::Bubble);
    }
}
