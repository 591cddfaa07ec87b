#![warn(missing_docs)]
//! SortBench Statistics
//!
//! Summarises the elapsed times collected when an algorithm is run several
//! times on copies of the same dataset:
//! - Central tendency (mean, median)
//! - Dispersion (sample std dev, min, max, coefficient of variation)
//! - Percentiles with linear interpolation

mod percentiles;
mod summary;

pub use percentiles::{compute_percentile, percentile_of_sorted};
pub use summary::{TimingSummary, summarize};
