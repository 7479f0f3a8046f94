//! Genotype representation and population encoding.
//!
//! A [`Genotype`] is a fixed-length bit sequence encoding a candidate
//! two-way partition: bit `i` routes instance value `i` into subset zero
//! (bit clear) or subset one (bit set). Every well-formed genotype carries
//! exactly as many zero-bits as one-bits.
//!
//! The one-bit count is maintained alongside the bits, so balance checks
//! never rescan the sequence.

use crate::error::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A fixed-length bit sequence with a maintained one-bit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genotype {
    bits: Vec<bool>,
    ones: usize,
}

impl Genotype {
    /// Builds a genotype from raw bits, counting ones once up front.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        let ones = bits.iter().filter(|&&b| b).count();
        Self { bits, ones }
    }

    /// Creates a balanced genotype of even `length`: `length / 2` zeros and
    /// `length / 2` ones, independently shuffled.
    ///
    /// # Panics
    ///
    /// Panics if `length` is odd. [`generate_population`] performs the
    /// checked variant of this construction.
    pub fn balanced_random<R: Rng>(length: usize, rng: &mut R) -> Self {
        assert!(length % 2 == 0, "balanced genotype requires even length");

        let half = length / 2;
        let mut bits: Vec<bool> = std::iter::repeat(false)
            .take(half)
            .chain(std::iter::repeat(true).take(half))
            .collect();
        bits.shuffle(rng);

        Self { bits, ones: half }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the genotype has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bit at position `i`.
    pub fn bit(&self, i: usize) -> bool {
        self.bits[i]
    }

    /// All bits in position order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Count of one-bits.
    pub fn ones(&self) -> usize {
        self.ones
    }

    /// Count of zero-bits.
    pub fn zeros(&self) -> usize {
        self.bits.len() - self.ones
    }

    /// Flips the bit at position `i`, keeping the one-count current.
    pub fn flip(&mut self, i: usize) {
        if self.bits[i] {
            self.ones -= 1;
        } else {
            self.ones += 1;
        }
        self.bits[i] = !self.bits[i];
    }

    /// Whether zero-bits and one-bits are equally many.
    pub fn is_balanced(&self) -> bool {
        self.zeros() == self.ones
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Predicate gating which crossover children are admitted into the next
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationPolicy {
    /// Accept only genotypes whose zero-count and one-count both equal
    /// `length / 2`. This is the balance invariant and the default.
    #[default]
    Strict,

    /// Accept a genotype unless it has at least one zero-bit *and* a
    /// one-count different from `length / 2`.
    ///
    /// The missing zero-count check means the all-ones genotype is always
    /// accepted even though it is maximally unbalanced. Kept selectable so
    /// the looser behavior stays observable and testable.
    Legacy,
}

impl ValidationPolicy {
    /// Applies the policy to a candidate genotype.
    pub fn accepts(self, gene: &Genotype) -> bool {
        let half = gene.len() / 2;
        match self {
            ValidationPolicy::Strict => gene.zeros() == half && gene.ones() == half,
            ValidationPolicy::Legacy => !(gene.zeros() > 0 && gene.ones() != half),
        }
    }
}

/// Encodes the initial population: `size` balanced genotypes of even
/// `length`, each with an independent random permutation of bit positions.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] when `length` is odd — an odd
/// sequence cannot hold equally many zeros and ones.
pub fn generate_population<R: Rng>(
    size: usize,
    length: usize,
    rng: &mut R,
) -> Result<Vec<Genotype>> {
    if length % 2 != 0 {
        return Err(Error::InvalidConfiguration {
            reason: format!("gene length must be even, got {length}"),
        });
    }

    Ok((0..size)
        .map(|_| Genotype::balanced_random(length, rng))
        .collect())
}
