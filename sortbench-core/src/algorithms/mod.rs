//! Algorithm Library
//!
//! Eight independent sorting routines sharing one signature:
//!
//! ```text
//! fn(&mut [i32], &mut SortStats)
//! ```
//!
//! Every routine sorts ascending in place (merge and radix sort go through an
//! auxiliary buffer) and updates the record with the same conventions:
//!
//! | Algorithm | Compare                          | Move                                   |
//! |-----------|----------------------------------|----------------------------------------|
//! | Bubble    | adjacent pair test               | adjacent exchange                      |
//! | Selection | candidate vs current minimum     | exchange of minimum into place         |
//! | Insertion | shifted-element test             | right shift                            |
//! | Shell     | pair test at current gap         | shift at current gap                   |
//! | Quicksort | element vs pivot                 | partition exchange, pivot placement    |
//! | Heapsort  | parent vs child in sift-down     | sift-down swap, root extraction swap   |
//! | Mergesort | pairwise test during merge       | element placed into merge output       |
//! | Radix     | key inspected while counting     | placement into bucketed output         |
//!
//! Exchanges of an element with itself are never performed or counted.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;
mod shell;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;

use crate::error::SortBenchError;
use crate::instrument::SortStats;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signature shared by every sorting routine
pub type SortFn = fn(&mut [i32], &mut SortStats);

/// The closed set of benchmarked algorithms, in registry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Bubble sort with early exit
    Bubble,
    /// Selection sort
    Selection,
    /// Straight insertion sort
    Insertion,
    /// Shell sort with halving gaps
    Shell,
    /// Recursive quicksort, Lomuto partition, last element as pivot
    Quicksort,
    /// Array-backed binary max-heap sort
    Heapsort,
    /// Top-down merge sort
    Mergesort,
    /// LSD base-10 radix sort
    Radix,
}

/// Asymptotic class used when listing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    /// O(n²)
    Quadratic,
    /// Between O(n log n) and O(n²), gap-sequence dependent
    SubQuadratic,
    /// O(n log n)
    Linearithmic,
    /// O(d·n), non-comparison based
    Linear,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Quadratic => "O(n^2)",
            Complexity::SubQuadratic => "O(n^1.5)",
            Complexity::Linearithmic => "O(n log n)",
            Complexity::Linear => "O(d*n)",
        };
        f.write_str(s)
    }
}

/// Immutable pairing of an algorithm with its routine and metadata
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmEntry {
    /// Which algorithm this entry describes
    pub algorithm: Algorithm,
    /// Human-readable name
    pub name: &'static str,
    /// Sorting routine
    pub sort: SortFn,
    /// Asymptotic class
    pub complexity: Complexity,
    /// Whether equal keys keep their relative order
    pub stable: bool,
}

/// Process-wide registry, in the fixed sweep order
pub static REGISTRY: [AlgorithmEntry; 8] = [
    AlgorithmEntry {
        algorithm: Algorithm::Bubble,
        name: "Bubble Sort",
        sort: bubble_sort,
        complexity: Complexity::Quadratic,
        stable: true,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Selection,
        name: "Selection Sort",
        sort: selection_sort,
        complexity: Complexity::Quadratic,
        stable: false,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Insertion,
        name: "Insertion Sort",
        sort: insertion_sort,
        complexity: Complexity::Quadratic,
        stable: true,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Shell,
        name: "Shell Sort",
        sort: shell_sort,
        complexity: Complexity::SubQuadratic,
        stable: false,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Quicksort,
        name: "Quick Sort",
        sort: quick_sort,
        complexity: Complexity::Linearithmic,
        stable: false,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Heapsort,
        name: "Heap Sort",
        sort: heap_sort,
        complexity: Complexity::Linearithmic,
        stable: false,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Mergesort,
        name: "Merge Sort",
        sort: merge_sort,
        complexity: Complexity::Linearithmic,
        stable: true,
    },
    AlgorithmEntry {
        algorithm: Algorithm::Radix,
        name: "Radix Sort",
        sort: radix_sort,
        complexity: Complexity::Linear,
        stable: true,
    },
];

impl Algorithm {
    /// All algorithms in registry order
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Shell,
        Algorithm::Quicksort,
        Algorithm::Heapsort,
        Algorithm::Mergesort,
        Algorithm::Radix,
    ];

    /// Registry entry for this algorithm
    pub fn entry(self) -> &'static AlgorithmEntry {
        &REGISTRY[self as usize]
    }

    /// Stable lowercase identifier (`bubble`, `quicksort`, ...)
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Shell => "shell",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Heapsort => "heapsort",
            Algorithm::Mergesort => "mergesort",
            Algorithm::Radix => "radix",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        self.entry().name
    }

    /// Sorting routine
    pub fn sort_fn(self) -> SortFn {
        self.entry().sort
    }

    /// Sort `data` in place, counting operations into `stats`
    pub fn sort(self, data: &mut [i32], stats: &mut SortStats) {
        (self.sort_fn())(data, stats)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SortBenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "bubble" | "bubblesort" | "1" => Ok(Algorithm::Bubble),
            "selection" | "selectionsort" | "2" => Ok(Algorithm::Selection),
            "insertion" | "insertionsort" | "3" => Ok(Algorithm::Insertion),
            "shell" | "shellsort" | "4" => Ok(Algorithm::Shell),
            "quick" | "quicksort" | "5" => Ok(Algorithm::Quicksort),
            "heap" | "heapsort" | "6" => Ok(Algorithm::Heapsort),
            "merge" | "mergesort" | "7" => Ok(Algorithm::Mergesort),
            "radix" | "radixsort" | "8" => Ok(Algorithm::Radix),
            _ => Err(SortBenchError::UnknownAlgorithm(s.to_string())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_enum() {
        for (index, entry) in REGISTRY.iter().enumerate() {
            assert_eq!(entry.algorithm as usize, index);
            assert_eq!(Algorithm::ALL[index], entry.algorithm);
        }
    }

    #[test]
    fn test_parse_ids_and_aliases() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("Quick-Sort".parse::<Algorithm>().unwrap(), Algorithm::Quicksort);
        assert_eq!("merge_sort".parse::<Algorithm>().unwrap(), Algorithm::Mergesort);
        assert_eq!("8".parse::<Algorithm>().unwrap(), Algorithm::Radix);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "bogo".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, SortBenchError::UnknownAlgorithm(ref s) if s == "bogo"));
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Algorithm::Heapsort).unwrap();
        assert_eq!(json, "\"heapsort\"");
    }

    #[test]
    fn test_every_algorithm_sorts_reference_input() {
        for algorithm in Algorithm::ALL {
            let (output, _, _) = test_support::run(algorithm, &[5, 3, 3, 1]);
            assert_eq!(output, vec![1, 3, 3, 5], "{algorithm}");
        }
    }
}
