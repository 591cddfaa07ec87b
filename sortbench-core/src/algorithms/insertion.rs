//! Straight insertion sort.

use crate::instrument::SortStats;

/// Shift larger elements right and drop each key into its slot.
///
/// The failing test that stops the inner scan is counted as a compare.
/// Writing the key back is not a move; only right shifts are.
pub fn insertion_sort(data: &mut [i32], stats: &mut SortStats) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            stats.record_compare();
            if data[j - 1] > key {
                data[j] = data[j - 1];
                stats.record_move();
                j -= 1;
            } else {
                break;
            }
        }
        data[j] = key;
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{check_sorts_correctly, check_trivial_inputs, run};
    use crate::algorithms::Algorithm;

    #[test]
    fn test_sorts_correctly() {
        check_sorts_correctly(Algorithm::Insertion);
    }

    #[test]
    fn test_trivial_inputs() {
        check_trivial_inputs(Algorithm::Insertion);
    }

    #[test]
    fn test_sorted_input_is_linear() {
        let (_, compares, moves) = run(Algorithm::Insertion, &[1, 2, 3, 4, 5]);
        assert_eq!((compares, moves), (4, 0));
    }

    #[test]
    fn test_reference_counts() {
        let (_, compares, moves) = run(Algorithm::Insertion, &[5, 3, 3, 1]);
        assert_eq!((compares, moves), (6, 5));
        let (_, compares, moves) = run(Algorithm::Insertion, &[170, 45, 75, 90, 802, 24, 2, 66]);
        assert_eq!((compares, moves), (22, 18));
    }
}
