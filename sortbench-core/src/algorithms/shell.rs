//! Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.

use crate::instrument::SortStats;

/// Gapped insertion sort, counting compares and shifts at every gap.
pub fn shell_sort(data: &mut [i32], stats: &mut SortStats) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap {
                stats.record_compare();
                if data[j - gap] > temp {
                    data[j] = data[j - gap];
                    stats.record_move();
                    j -= gap;
                } else {
                    break;
                }
            }
            data[j] = temp;
        }
        gap /= 2;
    }
}
