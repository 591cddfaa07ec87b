//! Top-down merge sort through one auxiliary buffer sized to the input.

use crate::instrument::SortStats;

/// Sort by recursive halving; every element written to the merge output is a move.
pub fn merge_sort(data: &mut [i32], stats: &mut SortStats) {
    if data.len() <= 1 {
        return;
    }
    let mut buffer = vec![0; data.len()];
    sort_range(data, &mut buffer, stats);
}

fn sort_range(data: &mut [i32], buffer: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    // The left half takes the middle element on odd lengths.
    let mid = (n - 1) / 2 + 1;
    {
        let (left, right) = data.split_at_mut(mid);
        let (left_buf, right_buf) = buffer.split_at_mut(mid);
        sort_range(left, left_buf, stats);
        sort_range(right, right_buf, stats);
    }
    merge(data, mid, buffer, stats);
}

/// Merge the sorted runs `data[..mid]` and `data[mid..]`.
fn merge(data: &mut [i32], mid: usize, buffer: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < mid && j < n {
        stats.record_compare();
        if data[i] <= data[j] {
            buffer[k] = data[i];
            i += 1;
        } else {
            buffer[k] = data[j];
            j += 1;
        }
        k += 1;
        stats.record_move();
    }

    for &value in data[i..mid].iter().chain(&data[j..n]) {
        buffer[k] = value;
        k += 1;
        stats.record_move();
    }

    data.copy_from_slice(&buffer[..n]);
}
