//! Correctness Verifier
//!
//! Post-condition check run by the harness after every sort.

/// True iff every adjacent pair satisfies `data[i] <= data[i + 1]`
pub fn is_sorted(data: &[i32]) -> bool {
    first_inversion(data).is_none()
}

/// Index of the first adjacent pair that is out of order
pub fn first_inversion(data: &[i32]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_inputs_are_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[42]));
    }

    #[test]
    fn test_non_decreasing_with_duplicates() {
        assert!(is_sorted(&[1, 3, 3, 5]));
        assert!(is_sorted(&[7, 7, 7]));
    }

    #[test]
    fn test_detects_inversion() {
        assert!(!is_sorted(&[1, 2, 4, 3]));
        assert_eq!(first_inversion(&[1, 2, 4, 3]), Some(2));
        assert_eq!(first_inversion(&[2, 1]), Some(0));
        assert_eq!(first_inversion(&[1, 2, 3]), None);
    }
}
