//! Selection sort.

use crate::instrument::SortStats;

/// Repeatedly select the minimum of the unsorted suffix and swap it into place.
pub fn selection_sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            stats.record_compare();
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
            stats.record_move();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{check_sorts_correctly, check_trivial_inputs, run};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_sorts_correctly() {
        check_sorts_correctly(Algorithm::Selection);
    }

    #[test]
    fn test_trivial_inputs() {
        check_trivial_inputs(Algorithm::Selection);
    }

    #[test]
    fn test_compares_are_quadratic_regardless_of_order() {
        // n(n-1)/2 tests for n = 5, whatever the input order
        assert_eq!(run(Algorithm::Selection, &[1, 2, 3, 4, 5]).1, 10);
        assert_eq!(run(Algorithm::Selection, &[5, 4, 3, 2, 1]).1, 10);
    }

    #[test]
    fn test_in_place_minimum_is_not_moved() {
        let (_, _, moves) = run(Algorithm::Selection, &[1, 2, 3, 4, 5]);
        assert_eq!(moves, 0);
        let (_, _, moves) = run(Algorithm::Selection, &[5, 4, 3, 2, 1]);
        assert_eq!(moves, 2);
    }

    #[test]
    fn test_reference_counts() {
        let (_, compares, moves) = run(Algorithm::Selection, &[5, 3, 3, 1]);
        assert_eq!((compares, moves), (6, 1));
    }
}
