//! Genetic operators: single-point crossover and balance-preserving
//! mutation.
//!
//! Crossover recombines two parents at one cut point; children are
//! admitted by a [`ValidationPolicy`] and the breeding loop is bounded by
//! an attempt budget. Mutation flips bits independently at a percentage
//! rate, but keeps a flip set only when it swaps equally many zeros and
//! ones — anything else would break the balance invariant, so the whole
//! mutation is discarded.

use crate::error::{Error, Result};
use crate::genotype::{Genotype, ValidationPolicy};
use rand::Rng;

/// Recombines two parents at `point`: the first child takes
/// `parent_one[..=point]` and `parent_two[point + 1..]`, the second child
/// the mirror image.
///
/// # Panics
///
/// Panics if the parents differ in length or `point + 1` is not a valid
/// split (the useful cut points are `0..=length - 2`).
pub fn single_point_crossover(
    parent_one: &Genotype,
    parent_two: &Genotype,
    point: usize,
) -> (Genotype, Genotype) {
    let length = parent_one.len();
    assert_eq!(length, parent_two.len(), "parents must have equal length");
    assert!(
        point + 1 < length,
        "crossover point {point} leaves no suffix to exchange"
    );

    let splice = |prefix: &Genotype, suffix: &Genotype| {
        let bits = prefix.bits()[..=point]
            .iter()
            .chain(&suffix.bits()[point + 1..])
            .copied()
            .collect();
        Genotype::from_bits(bits)
    };

    (
        splice(parent_one, parent_two),
        splice(parent_two, parent_one),
    )
}

/// Breeds the next generation from a selected parent pool.
///
/// Repeats until `target` children are accepted: draw two parents
/// uniformly with replacement (self-pairing included), draw a cut point
/// uniformly from `0..=length - 2`, and admit each resulting child
/// independently through `policy`. Rejected children are discarded and
/// retried.
///
/// # Errors
///
/// Returns [`Error::CrossoverStalled`] when `max_attempts` pairings pass
/// without completing the generation.
///
/// # Panics
///
/// Panics if the pool is empty or its genes are shorter than two bits.
pub fn breed<R: Rng>(
    pool: &[Genotype],
    target: usize,
    policy: ValidationPolicy,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Genotype>> {
    assert!(!pool.is_empty(), "cannot breed from an empty pool");
    let length = pool[0].len();
    assert!(length >= 2, "genes must have at least two bits");

    let mut next_generation = Vec::with_capacity(target);
    let mut attempts = 0usize;

    while next_generation.len() < target {
        if attempts >= max_attempts {
            return Err(Error::CrossoverStalled {
                accepted: next_generation.len(),
                attempts,
            });
        }
        attempts += 1;

        let parent_one = &pool[rng.random_range(0..pool.len())];
        let parent_two = &pool[rng.random_range(0..pool.len())];
        let point = rng.random_range(0..length - 1);

        let (child_one, child_two) = single_point_crossover(parent_one, parent_two, point);
        for child in [child_one, child_two] {
            if next_generation.len() >= target {
                break;
            }
            if policy.accepts(&child) {
                debug_assert!(
                    policy != ValidationPolicy::Strict || child.is_balanced(),
                    "strict validation admitted an unbalanced child"
                );
                next_generation.push(child);
            }
        }
    }

    log::trace!(
        "bred {} children in {} attempts",
        next_generation.len(),
        attempts
    );
    Ok(next_generation)
}

/// Mutates a gene at `rate_percent`, preserving balance all-or-nothing.
///
/// Each bit flips when an independent draw from `[0, 100)` falls below
/// the rate. Flips of zero-bits and one-bits are tallied separately; the
/// mutated gene is returned only when the tallies match, otherwise the
/// input is returned unchanged.
pub fn mutation<R: Rng>(gene: &Genotype, rate_percent: f64, rng: &mut R) -> Genotype {
    let mut bits = Vec::with_capacity(gene.len());
    let mut flipped_zeros = 0usize;
    let mut flipped_ones = 0usize;

    for &bit in gene.bits() {
        if rng.random_range(0.0..100.0) < rate_percent {
            bits.push(!bit);
            if bit {
                flipped_ones += 1;
            } else {
                flipped_zeros += 1;
            }
        } else {
            bits.push(bit);
        }
    }

    if flipped_zeros == flipped_ones {
        Genotype::from_bits(bits)
    } else {
        gene.clone()
    }
}
