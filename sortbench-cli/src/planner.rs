//! Run Planner
//!
//! Decides which algorithms and dataset sizes a command runs.
//!
//! - Algorithms: optional single selection, then regex filtering on the id.
//!   Registry order is always kept so sweeps stay comparable.
//! - Sizes: requested order, duplicates dropped.

use regex::Regex;
use sortbench_core::Algorithm;

/// Execution plan for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Algorithms to run, in registry order
    pub algorithms: Vec<Algorithm>,
    /// Dataset sizes to run, in execution order
    pub sizes: Vec<i64>,
}

impl ExecutionPlan {
    /// Number of (size, algorithm) pairs
    pub fn len(&self) -> usize {
        self.algorithms.len() * self.sizes.len()
    }

    /// Whether the plan runs nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build an execution plan from the registry
pub fn build_plan(
    only: Option<Algorithm>,
    filter: Option<&Regex>,
    sizes: impl IntoIterator<Item = i64>,
) -> ExecutionPlan {
    let algorithms = Algorithm::ALL
        .into_iter()
        .filter(|a| only.is_none_or(|o| o == *a))
        .filter(|a| filter.is_none_or(|re| re.is_match(a.id())))
        .collect();

    ExecutionPlan {
        algorithms,
        sizes: dedup_sizes(sizes),
    }
}

/// Drop repeated sizes, keeping the first occurrence
fn dedup_sizes(sizes: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut unique = Vec::new();
    for size in sizes {
        if !unique.contains(&size) {
            unique.push(size);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_keeps_registry_order() {
        let plan = build_plan(None, None, [1000]);
        assert_eq!(plan.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(plan.len(), 8);
    }

    #[test]
    fn test_single_algorithm() {
        let plan = build_plan(Some(Algorithm::Heapsort), None, [10, 20]);
        assert_eq!(plan.algorithms, vec![Algorithm::Heapsort]);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_regex_filter() {
        let re = Regex::new("sort$").unwrap();
        let plan = build_plan(None, Some(&re), [10]);
        assert_eq!(
            plan.algorithms,
            vec![Algorithm::Quicksort, Algorithm::Heapsort, Algorithm::Mergesort]
        );
    }

    #[test]
    fn test_filter_excluding_everything() {
        let re = Regex::new("^bogo").unwrap();
        let plan = build_plan(None, Some(&re), [10]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_sizes_deduplicated_in_order() {
        let plan = build_plan(None, None, [100, 1000, 100, 5000, 1000]);
        assert_eq!(plan.sizes, vec![100, 1000, 5000]);
    }
}
