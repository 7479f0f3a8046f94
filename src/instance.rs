//! Problem instance generation.
//!
//! A [`ProblemInstance`] is an ordered sequence of distinct integers drawn
//! uniformly without replacement from a half-open range. It is created once
//! per run and shared read-only by every other component: value index `i`
//! is permanently bound to bit position `i` of every genotype.

use crate::error::{Error, Result};
use rand::Rng;

/// The fixed set of values to split into two subsets.
///
/// Immutable after creation. Values are distinct but not sorted — the
/// sequence order is the order the sampler produced, and that order is
/// what genotype bit positions refer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    values: Vec<u32>,
}

impl ProblemInstance {
    /// Draws `count` distinct values uniformly from `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SamplingExhausted`] when `count` exceeds the size
    /// of the range.
    pub fn sample<R: Rng>(count: usize, low: u32, high: u32, rng: &mut R) -> Result<Self> {
        let available = high.saturating_sub(low) as usize;
        if count > available {
            return Err(Error::SamplingExhausted {
                requested: count,
                available,
            });
        }

        let values = rand::seq::index::sample(rng, available, count)
            .into_iter()
            .map(|offset| low + offset as u32)
            .collect();

        Ok(Self { values })
    }

    /// Wraps an explicit value sequence.
    ///
    /// Intended for tests and for replaying known instances; no
    /// distinctness check is performed.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// The value bound to bit position `i`.
    pub fn value(&self, i: usize) -> u32 {
        self.values[i]
    }

    /// All values, in bit-position order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of values (equals the gene length of every genotype).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the instance holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_sample_produces_distinct_values() {
        let mut rng = create_rng(42);
        let instance = ProblemInstance::sample(100, 1, 10_000, &mut rng).unwrap();

        assert_eq!(instance.len(), 100);
        let unique: HashSet<u32> = instance.values().iter().copied().collect();
        assert_eq!(unique.len(), 100, "values must be distinct");
    }

    #[test]
    fn test_sample_respects_range() {
        let mut rng = create_rng(7);
        let instance = ProblemInstance::sample(100, 1, 10_000, &mut rng).unwrap();

        for &v in instance.values() {
            assert!((1..10_000).contains(&v), "value {v} outside [1, 10000)");
        }
    }

    #[test]
    fn test_sample_exhausts_full_range() {
        let mut rng = create_rng(3);
        let instance = ProblemInstance::sample(5, 10, 15, &mut rng).unwrap();

        let mut values = instance.values().to_vec();
        values.sort_unstable();
        assert_eq!(values, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_sample_exhausted_error() {
        let mut rng = create_rng(42);
        let err = ProblemInstance::sample(10, 0, 5, &mut rng).unwrap_err();

        match err {
            Error::SamplingExhausted {
                requested,
                available,
            } => {
                assert_eq!(requested, 10);
                assert_eq!(available, 5);
            }
            other => panic!("expected SamplingExhausted, got {other:?}"),
        }
    }

    #[test]
    fn test_sample_inverted_range_is_empty() {
        let mut rng = create_rng(42);
        assert!(ProblemInstance::sample(1, 10, 5, &mut rng).is_err());
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let a = ProblemInstance::sample(50, 1, 1000, &mut create_rng(99)).unwrap();
        let b = ProblemInstance::sample(50, 1, 1000, &mut create_rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_total() {
        let instance = ProblemInstance::from_values(vec![5, 3, 8, 1]);
        assert_eq!(instance.total(), 17);
    }
}
