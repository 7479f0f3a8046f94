//! Generational pipeline and the engine facade.
//!
//! One generation is Partition → Fitness → Selection → Crossover. The
//! pipeline exists twice here, deliberately:
//!
//! - [`evaluate`] and [`advance`] are pure functions over explicit
//!   [`GenerationState`] values — composable and trivially testable.
//! - [`Engine`] owns the cross-step concerns a driver needs: the problem
//!   instance, the RNG, the accumulated [`FrequencyHistory`], and the
//!   best solution seen so far.
//!
//! The engine never prints or terminates a run by itself; an external
//! driver calls [`Engine::step`] in a loop and decides when to stop,
//! typically via [`Engine::check_convergence`].

use crate::config::EngineConfig;
use crate::convergence::{evaluate_convergence, Converged};
use crate::error::{Error, Result};
use crate::fitness::{fitness_assessment, FrequencyHistory, FrequencyTable};
use crate::genotype::{generate_population, Genotype};
use crate::instance::ProblemInstance;
use crate::operators::{breed, mutation};
use crate::partition::{partition_population, Phenotype};
use crate::random::create_rng;
use crate::selection::roulette_selection;
use rand::rngs::StdRng;
use rand::Rng;

/// Everything the fitness step derives from one population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Phenotypes, aligned to population order.
    pub phenotypes: Vec<Phenotype>,
    /// Fitness ranks, aligned to population order.
    pub fitnesses: Vec<usize>,
    /// This generation's rank-bucketed differences.
    pub frequency: FrequencyTable,
}

/// A population together with its generation counter.
///
/// Counters start at 1 and advance once per completed breeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationState {
    /// The current population.
    pub population: Vec<Genotype>,
    /// Generation counter.
    pub generation: u64,
}

/// Partitions and ranks a population. Pure.
pub fn evaluate(instance: &ProblemInstance, population: &[Genotype]) -> Evaluation {
    let phenotypes = partition_population(population, instance);
    let (fitnesses, frequency) = fitness_assessment(&phenotypes);
    Evaluation {
        phenotypes,
        fitnesses,
        frequency,
    }
}

/// Runs one full generation cycle on a state value.
///
/// Evaluates the state's population, selects a parent pool from it, and
/// breeds the successor population. Returns the successor state alongside
/// the evaluation of the population that produced it.
///
/// # Errors
///
/// Propagates [`Error::CrossoverStalled`] from the breeding loop.
pub fn advance<R: Rng>(
    instance: &ProblemInstance,
    state: &GenerationState,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<(GenerationState, Evaluation)> {
    let evaluation = evaluate(instance, &state.population);
    let pool = roulette_selection(
        config.selection_count,
        &state.population,
        &evaluation.frequency,
        rng,
    );
    let population = breed(
        &pool,
        config.population_size,
        config.validation,
        config.max_crossover_attempts,
        rng,
    )?;

    Ok((
        GenerationState {
            population,
            generation: state.generation + 1,
        },
        evaluation,
    ))
}

/// The best partition a run has produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Values at zero-bit positions.
    pub subset_zero: Vec<u32>,
    /// Values at one-bit positions.
    pub subset_one: Vec<u32>,
    /// Absolute difference of the subset sums.
    pub difference: u32,
    /// Generation in which this partition was evaluated.
    pub generation: u64,
}

/// Stateful facade over the generational pipeline.
///
/// # Usage
///
/// ```
/// use numpart::{Engine, EngineConfig};
///
/// let mut engine = Engine::new(EngineConfig::default().with_seed(42))?;
/// for _ in 0..25 {
///     engine.step()?;
///     if !engine.check_convergence(100).is_empty() {
///         break;
///     }
/// }
/// let best = engine.best_solution().expect("at least one step ran");
/// println!("difference {} at generation {}", best.difference, best.generation);
/// # Ok::<(), numpart::Error>(())
/// ```
#[derive(Debug)]
pub struct Engine<R: Rng = StdRng> {
    config: EngineConfig,
    instance: ProblemInstance,
    state: GenerationState,
    history: FrequencyHistory,
    best: Option<Solution>,
    rng: R,
}

impl Engine<StdRng> {
    /// Builds an engine from a validated configuration.
    ///
    /// Samples the problem instance and encodes the initial population.
    /// The RNG is seeded from `config.seed`, or from entropy when the
    /// seed is `None`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfiguration`] for inconsistent parameters,
    /// [`Error::SamplingExhausted`] when the value range cannot supply
    /// the instance.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = create_rng(config.seed.unwrap_or_else(rand::random));
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Engine<R> {
    /// Builds an engine around an injected generator.
    ///
    /// Deterministic tests construct their RNG explicitly; `config.seed`
    /// is ignored on this path.
    pub fn with_rng(config: EngineConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let instance = ProblemInstance::sample(
            config.instance_size,
            config.value_low,
            config.value_high,
            &mut rng,
        )?;
        let population =
            generate_population(config.population_size, config.gene_length, &mut rng)?;

        Ok(Self {
            history: FrequencyHistory::new(config.population_size),
            state: GenerationState {
                population,
                generation: 1,
            },
            best: None,
            config,
            instance,
            rng,
        })
    }

    /// Runs one generation: Partition → Fitness → Selection → Crossover.
    ///
    /// Absorbs the generation's frequency table into the history, updates
    /// the best-solution tracker, and returns the new generation counter.
    ///
    /// # Errors
    ///
    /// [`Error::CrossoverStalled`] when the breeding budget runs out; the
    /// engine is left on the old population, so the caller may retry.
    pub fn step(&mut self) -> Result<u64> {
        let (next, evaluation) =
            advance(&self.instance, &self.state, &self.config, &mut self.rng)?;

        self.history.absorb(&evaluation.frequency);
        self.track_best(&evaluation);

        log::debug!(
            "generation {} evaluated, best difference so far {}",
            self.state.generation,
            self.best
                .as_ref()
                .map(|s| s.difference)
                .unwrap_or(u32::MAX),
        );

        self.state = next;
        Ok(self.state.generation)
    }

    /// Applies the mutation operator through the engine's RNG, at the
    /// configured rate.
    ///
    /// # Errors
    ///
    /// [`Error::InvariantViolation`] if a balanced input comes back
    /// unbalanced — the operator's all-or-nothing rule makes that an
    /// internal defect, never a recoverable event.
    pub fn mutate(&mut self, gene: &Genotype) -> Result<Genotype> {
        let rate = self.config.mutation_rate;
        self.mutate_with_rate(gene, rate)
    }

    /// Applies the mutation operator at an explicit rate.
    pub fn mutate_with_rate(&mut self, gene: &Genotype, rate_percent: f64) -> Result<Genotype> {
        let mutated = mutation(gene, rate_percent, &mut self.rng);
        if gene.is_balanced() && !mutated.is_balanced() {
            return Err(Error::InvariantViolation {
                detail: format!(
                    "mutation turned a balanced gene into {} ones / {} zeros",
                    mutated.ones(),
                    mutated.zeros()
                ),
            });
        }
        Ok(mutated)
    }

    /// Reports every recorded difference strictly below `threshold`.
    pub fn check_convergence(&self, threshold: u32) -> Vec<Converged> {
        evaluate_convergence(&self.history, threshold)
    }

    /// The smallest-difference partition evaluated so far, if any
    /// generation has been evaluated.
    pub fn best_solution(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Current generation counter (1 before the first step).
    pub fn generation(&self) -> u64 {
        self.state.generation
    }

    /// The current population.
    pub fn population(&self) -> &[Genotype] {
        &self.state.population
    }

    /// The problem instance this run partitions.
    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    /// The accumulated frequency history.
    pub fn history(&self) -> &FrequencyHistory {
        &self.history
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Clears the accumulated history; subsequent convergence checks see
    /// only generations evaluated after this call.
    pub fn reset_history(&mut self) {
        self.history.reset();
    }

    fn track_best(&mut self, evaluation: &Evaluation) {
        let candidate = evaluation
            .phenotypes
            .iter()
            .min_by_key(|phenotype| phenotype.difference());

        if let Some(phenotype) = candidate {
            let difference = phenotype.difference();
            if self
                .best
                .as_ref()
                .map_or(true, |best| difference < best.difference)
            {
                self.best = Some(Solution {
                    subset_zero: phenotype.subset_zero.clone(),
                    subset_one: phenotype.subset_one.clone(),
                    difference,
                    generation: self.state.generation,
                });
            }
        }
    }
}
