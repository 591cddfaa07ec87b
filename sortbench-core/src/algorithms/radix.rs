//! LSD radix sort, base 10, one stable counting pass per digit.

use crate::instrument::SortStats;

const RADIX: usize = 10;

/// Sort non-negative integers digit by digit, least significant first.
///
/// Each key inspected during a counting scan is counted as one compare, and
/// each placement into the bucketed output is a move. Passes continue while
/// `max / exp > 0`.
///
/// # Preconditions
///
/// Every element must be non-negative. Negative input is a precondition
/// violation: debug builds assert on it, and release builds may panic on an
/// out-of-range digit or leave the data unordered.
pub fn radix_sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    debug_assert!(
        data.iter().all(|&v| v >= 0),
        "radix sort requires non-negative input"
    );

    let max = data.iter().copied().max().unwrap_or(0) as i64;
    let mut output = vec![0; n];
    let mut exp: i64 = 1;

    while max / exp > 0 {
        let digit = |value: i32| ((value as i64 / exp) % RADIX as i64) as usize;

        let mut counts = [0usize; RADIX];
        for &value in data.iter() {
            counts[digit(value)] += 1;
            stats.record_compare();
        }

        for d in 1..RADIX {
            counts[d] += counts[d - 1];
        }

        // Walk backwards so equal digits keep their relative order
        for &value in data.iter().rev() {
            let d = digit(value);
            counts[d] -= 1;
            output[counts[d]] = value;
            stats.record_move();
        }

        data.copy_from_slice(&output);
        exp *= RADIX as i64;
    }
}
