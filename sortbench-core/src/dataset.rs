//! Dataset Generation
//!
//! Deterministic pseudo-random integer datasets. Every algorithm in one
//! comparison round sorts a copy of the same generated dataset, so the
//! generator is seeded with a fixed value unless the caller supplies one.
//!
//! Each element combines two successive outputs of a 32-bit linear
//! congruential generator (`(r1 << 15) ^ r2`) and reduces the result
//! modulo the generator's upper bound.

use crate::error::{Result, SortBenchError};

/// Seed used when the caller does not supply one
pub const DEFAULT_SEED: u32 = 123_456_789;

/// Exclusive upper bound used by the sweep batch
pub const DEFAULT_UPPER_BOUND: u32 = 1_000_000;

const LCG_MULTIPLIER: u32 = 1_103_515_245;
const LCG_INCREMENT: u32 = 12_345;

/// 32-bit linear congruential generator producing 15-bit outputs
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator from a seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next output in `[0, 32768)`
    #[inline]
    pub fn next_output(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state / 65_536) % 32_768
    }

    /// Combine two successive outputs into one 30-bit value
    #[inline]
    pub fn next_combined(&mut self) -> u32 {
        let high = self.next_output();
        let low = self.next_output();
        (high << 15) ^ low
    }
}

/// Produces datasets of signed integers in `[0, upper_bound)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetGenerator {
    seed: u32,
    upper_bound: u32,
}

impl DatasetGenerator {
    /// Create a generator with an explicit seed and exclusive upper bound.
    ///
    /// Fails with [`SortBenchError::InvalidUpperBound`] when `upper_bound` is 0.
    pub fn new(seed: u32, upper_bound: u32) -> Result<Self> {
        if upper_bound == 0 {
            return Err(SortBenchError::InvalidUpperBound(upper_bound));
        }
        Ok(Self { seed, upper_bound })
    }

    /// Seed every generated dataset starts from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Exclusive upper bound on generated values
    pub fn upper_bound(&self) -> u32 {
        self.upper_bound
    }

    /// Generate exactly `size` elements.
    ///
    /// The generator restarts from its seed on every call, so two calls with
    /// the same size return identical datasets. A negative size fails with
    /// [`SortBenchError::InvalidSize`]; zero yields an empty dataset.
    pub fn generate(&self, size: i64) -> Result<Vec<i32>> {
        let len = usize::try_from(size).map_err(|_| SortBenchError::InvalidSize {
            size,
            max: usize::MAX,
        })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|source| SortBenchError::AllocationFailure { len, source })?;

        let mut lcg = Lcg::new(self.seed);
        // Combined values are below 2^30, so the reduced value always fits in i32.
        data.extend((0..len).map(|_| (lcg.next_combined() % self.upper_bound) as i32));
        Ok(data)
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

/// Copy a dataset into a freshly allocated buffer.
///
/// Allocation failure is reported instead of aborting the process.
pub fn duplicate(data: &[i32]) -> Result<Vec<i32>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(data.len())
        .map_err(|source| SortBenchError::AllocationFailure {
            len: data.len(),
            source,
        })?;
    copy.extend_from_slice(data);
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sequence_is_stable() {
        let data = DatasetGenerator::default().generate(6).unwrap();
        assert_eq!(data, vec![884843, 981817, 277479, 858937, 455060, 179873]);
    }

    #[test]
    fn test_smaller_upper_bound() {
        let generator = DatasetGenerator::new(DEFAULT_SEED, 100_000).unwrap();
        let data = generator.generate(6).unwrap();
        assert_eq!(data, vec![84843, 81817, 77479, 58937, 55060, 79873]);
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = DatasetGenerator::new(42, 1000).unwrap();
        assert_eq!(generator.generate(500).unwrap(), generator.generate(500).unwrap());
    }

    #[test]
    fn test_values_within_bounds() {
        let generator = DatasetGenerator::new(7, 10).unwrap();
        let data = generator.generate(10_000).unwrap();
        assert_eq!(data.len(), 10_000);
        assert!(data.iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = DatasetGenerator::new(1, DEFAULT_UPPER_BOUND).unwrap();
        let b = DatasetGenerator::new(2, DEFAULT_UPPER_BOUND).unwrap();
        assert_ne!(a.generate(100).unwrap(), b.generate(100).unwrap());
    }

    #[test]
    fn test_empty_dataset() {
        let data = DatasetGenerator::default().generate(0).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_negative_size_rejected() {
        let err = DatasetGenerator::default().generate(-1).unwrap_err();
        assert!(matches!(err, SortBenchError::InvalidSize { size: -1, .. }));
    }

    #[test]
    fn test_zero_upper_bound_rejected() {
        let err = DatasetGenerator::new(DEFAULT_SEED, 0).unwrap_err();
        assert!(matches!(err, SortBenchError::InvalidUpperBound(0)));
    }

    #[test]
    fn test_lcg_output_range() {
        let mut lcg = Lcg::new(DEFAULT_SEED);
        for _ in 0..1000 {
            assert!(lcg.next_output() < 32_768);
            assert!(lcg.next_combined() < (1 << 30));
        }
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = vec![3, 1, 2];
        let mut copy = duplicate(&original).unwrap();
        copy.sort_unstable();
        assert_eq!(original, vec![3, 1, 2]);
        assert_eq!(copy, vec![1, 2, 3]);
    }
}
