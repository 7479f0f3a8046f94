//! Roulette-wheel parent selection.
//!
//! Weights come from the frequency table's rank buckets: bucket `i`
//! weighs `i`, so the member aligned with the highest rank bucket is the
//! most likely pick. Weights are normalized into cumulative percentage
//! thresholds, rounded to two decimals in ascending rank order, and each
//! draw walks the thresholds until one covers it.
//!
//! The final threshold is clamped to exactly 100 — rounding must never
//! leave a draw with nothing to select.

use crate::fitness::FrequencyTable;
use crate::genotype::Genotype;
use rand::Rng;

/// Cumulative percentage thresholds over the table's rank buckets.
///
/// `thresholds[i]` covers every draw `u` with `u <= thresholds[i]` not
/// already covered by an earlier bucket. Values are rounded to two
/// decimals; the last one is exactly `100.0`.
pub fn cumulative_thresholds(table: &FrequencyTable) -> Vec<f64> {
    let n = table.len();
    let total: f64 = (n * n.saturating_sub(1) / 2) as f64;
    if total == 0.0 {
        return vec![100.0; n];
    }

    let mut thresholds = Vec::with_capacity(n);
    let mut cumulative = 0.0;
    for rank in 0..n {
        cumulative += rank as f64 / total;
        thresholds.push((cumulative * 100.0 * 100.0).round() / 100.0);
    }
    *thresholds.last_mut().expect("n > 0") = 100.0;
    thresholds
}

/// Draws `count` parents with replacement, roulette-style.
///
/// Each draw samples `u ~ Uniform(0, 100)` and selects the first
/// population member whose cumulative threshold reaches `u`. The returned
/// pool replaces any previous selection.
///
/// # Panics
///
/// Panics if the population is empty or its size differs from the
/// table's bucket count.
pub fn roulette_selection<R: Rng>(
    count: usize,
    population: &[Genotype],
    table: &FrequencyTable,
    rng: &mut R,
) -> Vec<Genotype> {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert_eq!(
        population.len(),
        table.len(),
        "population size must match bucket count"
    );

    let thresholds = cumulative_thresholds(table);

    (0..count)
        .map(|_| {
            let u = rng.random_range(0.0..100.0);
            let idx = select_index(&thresholds, u);
            population[idx].clone()
        })
        .collect()
}

/// First index whose threshold covers `u`.
fn select_index(thresholds: &[f64], u: f64) -> usize {
    thresholds
        .iter()
        .position(|&t| t >= u)
        .unwrap_or(thresholds.len() - 1)
}
