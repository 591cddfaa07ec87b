//! Heapsort over an array-backed binary max-heap (children at `2i+1`, `2i+2`).

use crate::instrument::SortStats;

/// Build the heap bottom-up, then repeatedly move the root behind the heap.
pub fn heap_sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();

    for i in (0..n / 2).rev() {
        sift_down(data, n, i, stats);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        stats.record_move();
        sift_down(data, end, 0, stats);
    }
}

/// Restore the heap property below `root` within `data[..len]`.
fn sift_down(data: &mut [i32], len: usize, mut root: usize, stats: &mut SortStats) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len {
            stats.record_compare();
            if data[left] > data[largest] {
                largest = left;
            }
        }
        if right < len {
            stats.record_compare();
            if data[right] > data[largest] {
                largest = right;
            }
        }

        if largest == root {
            return;
        }

        data.swap(root, largest);
        stats.record_move();
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{check_sorts_correctly, check_trivial_inputs, run};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_sorts_correctly() {
        check_sorts_correctly(Algorithm::Heapsort);
    }

    #[test]
    fn test_trivial_inputs() {
        check_trivial_inputs(Algorithm::Heapsort);
    }

    #[test]
    fn test_two_elements() {
        let (output, compares, moves) = run(Algorithm::Heapsort, &[2, 1]);
        assert_eq!(output, vec![1, 2]);
        assert_eq!((compares, moves), (1, 1));
    }

    #[test]
    fn test_reference_counts() {
        let (_, compares, moves) = run(Algorithm::Heapsort, &[5, 3, 3, 1]);
        assert_eq!((compares, moves), (6, 4));
        let (_, compares, moves) = run(Algorithm::Heapsort, &[1, 2, 3, 4, 5]);
        assert_eq!((compares, moves), (12, 10));
    }
}
