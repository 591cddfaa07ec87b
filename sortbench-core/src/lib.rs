#![warn(missing_docs)]
//! SortBench Core - Instrumented Sorting Engine
//!
//! This crate provides the measurement engine behind `sortbench`:
//! - Deterministic dataset generation (`DatasetGenerator`)
//! - Eight classical sorting algorithms with uniform operation counting
//! - Per-run instrumentation record (`SortStats`)
//! - Sortedness verification
//! - The benchmark harness (`run_one`, `run_sweep`)

pub mod algorithms;
mod dataset;
mod error;
mod harness;
mod instrument;
mod measure;
mod record;
mod verify;

pub use algorithms::{Algorithm, AlgorithmEntry, Complexity, REGISTRY, SortFn};
pub use dataset::{DEFAULT_SEED, DEFAULT_UPPER_BOUND, DatasetGenerator, Lcg, duplicate};
pub use error::{Result, SortBenchError};
pub use harness::{Harness, MAX_DATASET_SIZE, run_one, run_sweep};
pub use instrument::SortStats;
pub use measure::{Timer, as_millis_f64};
pub use record::ResultRecord;
pub use verify::{first_inversion, is_sorted};
