//! Engine configuration.
//!
//! [`EngineConfig`] holds every parameter of a partitioning run.

use crate::error::{Error, Result};
use crate::genotype::ValidationPolicy;

/// Configuration for the partitioning engine.
///
/// Defaults match the canonical problem shape: 100 distinct values in
/// `[1, 10000)`, 100-bit genotypes, a population of 20, a selection pool
/// of 10, and a 1% per-bit mutation rate.
///
/// # Builder Pattern
///
/// ```
/// use numpart::{EngineConfig, ValidationPolicy};
///
/// let config = EngineConfig::default()
///     .with_population_size(40)
///     .with_selection_count(16)
///     .with_validation(ValidationPolicy::Legacy)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of distinct values in the problem instance.
    ///
    /// Must equal `gene_length`: value index `i` is bound to bit
    /// position `i`.
    pub instance_size: usize,

    /// Bit length of every genotype. Must be even.
    pub gene_length: usize,

    /// Number of individuals per generation.
    pub population_size: usize,

    /// Size of the parent pool the selector hands to the breeder.
    ///
    /// Must not exceed `population_size`.
    pub selection_count: usize,

    /// Per-bit mutation threshold as a percentage in `[0, 100]`.
    ///
    /// Each bit flips when an independent uniform draw from `[0, 100)`
    /// falls below this value.
    pub mutation_rate: f64,

    /// Inclusive lower bound of the instance value range.
    pub value_low: u32,

    /// Exclusive upper bound of the instance value range.
    pub value_high: u32,

    /// Maximum parent pairings per breeding call before the generation is
    /// declared stalled.
    pub max_crossover_attempts: usize,

    /// Predicate gating crossover children.
    pub validation: ValidationPolicy,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            instance_size: 100,
            gene_length: 100,
            population_size: 20,
            selection_count: 10,
            mutation_rate: 1.0,
            value_low: 1,
            value_high: 10_000,
            max_crossover_attempts: 10_000,
            validation: ValidationPolicy::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the instance size and gene length together.
    ///
    /// The two must always match, so a single setter covers both.
    pub fn with_problem_size(mut self, n: usize) -> Self {
        self.instance_size = n;
        self.gene_length = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the selection pool size.
    pub fn with_selection_count(mut self, n: usize) -> Self {
        self.selection_count = n;
        self
    }

    /// Sets the per-bit mutation percentage, clamped to `[0, 100]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 100.0);
        self
    }

    /// Sets the half-open value range `[low, high)` for instance sampling.
    pub fn with_value_range(mut self, low: u32, high: u32) -> Self {
        self.value_low = low;
        self.value_high = high;
        self
    }

    /// Sets the breeding attempt budget.
    pub fn with_max_crossover_attempts(mut self, attempts: usize) -> Self {
        self.max_crossover_attempts = attempts;
        self
    }

    /// Sets the child validation policy.
    pub fn with_validation(mut self, policy: ValidationPolicy) -> Self {
        self.validation = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] describing the first
    /// parameter found inconsistent.
    pub fn validate(&self) -> Result<()> {
        if self.gene_length % 2 != 0 {
            return Err(invalid(format!(
                "gene_length must be even, got {}",
                self.gene_length
            )));
        }
        if self.gene_length != self.instance_size {
            return Err(invalid(format!(
                "gene_length ({}) must equal instance_size ({})",
                self.gene_length, self.instance_size
            )));
        }
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1".into()));
        }
        if self.selection_count == 0 {
            return Err(invalid("selection_count must be at least 1".into()));
        }
        if self.selection_count > self.population_size {
            return Err(invalid(format!(
                "selection_count ({}) must not exceed population_size ({})",
                self.selection_count, self.population_size
            )));
        }
        if !(0.0..=100.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be within [0, 100], got {}",
                self.mutation_rate
            )));
        }
        if self.value_high <= self.value_low {
            return Err(invalid(format!(
                "value range [{}, {}) is empty",
                self.value_low, self.value_high
            )));
        }
        if self.max_crossover_attempts == 0 {
            return Err(invalid("max_crossover_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> Error {
    Error::InvalidConfiguration { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.instance_size, 100);
        assert_eq!(config.gene_length, 100);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.selection_count, 10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        assert_eq!(config.value_low, 1);
        assert_eq!(config.value_high, 10_000);
        assert_eq!(config.max_crossover_attempts, 10_000);
        assert_eq!(config.validation, ValidationPolicy::Strict);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_problem_size(50)
            .with_population_size(30)
            .with_selection_count(15)
            .with_mutation_rate(2.5)
            .with_value_range(1, 500)
            .with_max_crossover_attempts(5_000)
            .with_validation(ValidationPolicy::Legacy)
            .with_seed(42);

        assert_eq!(config.instance_size, 50);
        assert_eq!(config.gene_length, 50);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.selection_count, 15);
        assert!((config.mutation_rate - 2.5).abs() < 1e-10);
        assert_eq!((config.value_low, config.value_high), (1, 500));
        assert_eq!(config.max_crossover_attempts, 5_000);
        assert_eq!(config.validation, ValidationPolicy::Legacy);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_odd_gene_length() {
        let config = EngineConfig::default().with_problem_size(99);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mismatched_lengths() {
        let mut config = EngineConfig::default();
        config.gene_length = 80;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must equal instance_size"));
    }

    #[test]
    fn test_validate_selection_count_too_large() {
        let config = EngineConfig::default()
            .with_population_size(10)
            .with_selection_count(11);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_selection_count() {
        let config = EngineConfig::default().with_selection_count(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_value_range() {
        let config = EngineConfig::default().with_value_range(100, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_attempt_budget() {
        let config = EngineConfig::default().with_max_crossover_attempts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mutation_rate_clamped() {
        let config = EngineConfig::default().with_mutation_rate(250.0);
        assert!((config.mutation_rate - 100.0).abs() < 1e-10);

        let config = EngineConfig::default().with_mutation_rate(-3.0);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }
}
