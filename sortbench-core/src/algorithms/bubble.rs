//! Bubble sort with early exit.

use crate::instrument::SortStats;

/// Exchange adjacent out-of-order pairs until a full pass makes no exchange.
pub fn bubble_sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            stats.record_compare();
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.record_move();
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
