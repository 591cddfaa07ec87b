#![warn(missing_docs)]
//! # SortBench
//!
//! Instrumented benchmarking engine for classical sorting algorithms.
//!
//! Every algorithm sorts an independent copy of the same deterministic
//! dataset while counting element comparisons and element moves, and the
//! harness verifies the output before reporting it:
//! - **Eight algorithms**: bubble, selection, insertion, shell, quicksort,
//!   heapsort, mergesort and LSD radix sort behind one `SortFn` signature
//! - **Reproducible data**: a seeded linear congruential generator
//! - **Correctness first**: every record carries a `sorted` flag
//! - **Reports**: human tables, JSON and CSV
//!
//! ## Quick Start
//!
//! ```no_run
//! use sortbench::{Algorithm, run_one, run_sweep};
//!
//! let record = run_one(Algorithm::Quicksort, 10_000)?;
//! println!("{} compares, {} moves", record.compare_count, record.move_count);
//!
//! for record in run_sweep(1_000)? {
//!     assert!(record.sorted);
//! }
//! # Ok::<(), sortbench::SortBenchError>(())
//! ```
//!
//! ## Sorting With Instrumentation
//!
//! ```
//! use sortbench::{Algorithm, SortStats};
//!
//! let mut data = vec![5, 3, 3, 1];
//! let mut stats = SortStats::new(Algorithm::Insertion);
//! Algorithm::Insertion.sort(&mut data, &mut stats);
//! assert_eq!(data, [1, 3, 3, 5]);
//! assert_eq!(stats.compare_count(), 6);
//! ```

// Re-export core types
pub use sortbench_core::{
    Algorithm, AlgorithmEntry, Complexity, DEFAULT_SEED, DEFAULT_UPPER_BOUND, DatasetGenerator,
    Harness, Lcg, MAX_DATASET_SIZE, REGISTRY, Result, ResultRecord, SortBenchError, SortFn,
    SortStats, first_inversion, is_sorted, run_one, run_sweep,
};

// Re-export the algorithms module for direct access to each sort function
pub use sortbench_core::algorithms;

// Re-export stats
pub use sortbench_stats::{TimingSummary, summarize};

// Re-export report types
pub use sortbench_report::{
    AlgorithmResult, OutputFormat, Report, ReportMeta, ReportSummary, RunStatus,
    generate_csv_report, generate_json_report,
};

// Re-export CLI entry points
pub use sortbench_cli::{Cli, SortBenchConfig, run, run_with_cli};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Algorithm, Harness, ResultRecord, SortBenchError, SortStats, run_one, run_sweep,
    };
}
