//! Genotype-to-phenotype mapping.
//!
//! The partitioner routes each instance value into one of two subsets
//! according to the corresponding genotype bit: bit clear → subset zero,
//! bit set → subset one. Every value lands in exactly one subset, so the
//! two subsets together are always the full instance.

use crate::genotype::Genotype;
use crate::instance::ProblemInstance;

/// The two integer subsets a genotype encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phenotype {
    /// Values at zero-bit positions.
    pub subset_zero: Vec<u32>,
    /// Values at one-bit positions.
    pub subset_one: Vec<u32>,
}

impl Phenotype {
    /// Sum of subset zero.
    pub fn sum_zero(&self) -> u32 {
        self.subset_zero.iter().sum()
    }

    /// Sum of subset one.
    pub fn sum_one(&self) -> u32 {
        self.subset_one.iter().sum()
    }

    /// Absolute difference between the two subset sums.
    ///
    /// This is the quantity the whole algorithm minimizes.
    pub fn difference(&self) -> u32 {
        self.sum_zero().abs_diff(self.sum_one())
    }
}

/// Maps one genotype to its phenotype.
///
/// # Panics
///
/// Panics if the genotype length differs from the instance length; the
/// two are bound together at initialization.
pub fn partition(genotype: &Genotype, instance: &ProblemInstance) -> Phenotype {
    assert_eq!(
        genotype.len(),
        instance.len(),
        "genotype length must match instance length"
    );

    let mut subset_zero = Vec::with_capacity(genotype.zeros());
    let mut subset_one = Vec::with_capacity(genotype.ones());
    for (i, &bit) in genotype.bits().iter().enumerate() {
        if bit {
            subset_one.push(instance.value(i));
        } else {
            subset_zero.push(instance.value(i));
        }
    }

    Phenotype {
        subset_zero,
        subset_one,
    }
}

/// Maps a whole population, preserving order.
pub fn partition_population(
    population: &[Genotype],
    instance: &ProblemInstance,
) -> Vec<Phenotype> {
    population
        .iter()
        .map(|genotype| partition(genotype, instance))
        .collect()
}
