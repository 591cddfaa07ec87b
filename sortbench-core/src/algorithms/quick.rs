//! Quicksort with Lomuto partitioning and the last element as pivot.

use crate::instrument::SortStats;

/// Recursive quicksort.
///
/// Recursion goes into the smaller partition and the larger one is handled
/// by the loop, so stack depth stays logarithmic even on adversarial input.
/// Operation counts are the same as plain two-way recursion.
pub fn quick_sort(data: &mut [i32], stats: &mut SortStats) {
    sort_partition(data, stats);
}

fn sort_partition(mut data: &mut [i32], stats: &mut SortStats) {
    while data.len() > 1 {
        let pivot = partition(data, stats);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            sort_partition(left, stats);
            data = right;
        } else {
            sort_partition(right, stats);
            data = left;
        }
    }
}

/// Partition around `data[last]`; returns the pivot's final index.
fn partition(data: &mut [i32], stats: &mut SortStats) -> usize {
    let last = data.len() - 1;
    let pivot = data[last];
    let mut store = 0;

    for j in 0..last {
        stats.record_compare();
        if data[j] < pivot {
            if store != j {
                data.swap(store, j);
                stats.record_move();
            }
            store += 1;
        }
    }

    if store != last {
        data.swap(store, last);
        stats.record_move();
    }
    store
}
