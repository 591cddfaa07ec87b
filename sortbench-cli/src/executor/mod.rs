//! Benchmark Executor
//!
//! Runs a plan and turns its records into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionPlan (algorithms × sizes)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  One dataset per size, `repeat` trials per algorithm
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Timing summaries (parallel, after all runs)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Report with metadata and summary counts
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable tables
//! └─────────────┘
//! ```

mod execution;
mod formatting;
mod report;
mod statistics;

pub use execution::{ExecutionConfig, Executor, TrialSet};
pub use formatting::{format_algorithm_list, format_human_output};
pub use report::build_report;
pub use statistics::compute_statistics;
