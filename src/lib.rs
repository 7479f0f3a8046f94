//! Two-way number partitioning via a genetic algorithm.
//!
//! Given a fixed set of distinct integers, find a split into two subsets
//! whose sums are as close as possible. Candidate splits are encoded as
//! balanced bit sequences — as many zeros as ones — and evolved with
//! rank-based fitness, roulette-wheel selection, and validity-filtered
//! single-point crossover.
//!
//! # Components
//!
//! - [`ProblemInstance`]: the values to partition, sampled once per run
//! - [`Genotype`] / [`generate_population`]: balanced bit-sequence encoding
//! - [`partition`]: genotype → [`Phenotype`] (the two subsets)
//! - [`fitness_assessment`]: positional ranks + per-generation
//!   [`FrequencyTable`]; [`FrequencyHistory`] accumulates across steps
//! - [`roulette_selection`]: rank-weighted parent pool
//! - [`operators`]: single-point crossover, attempt-budgeted breeding,
//!   balance-preserving mutation
//! - [`evaluate_convergence`]: recorded differences below a threshold
//! - [`Engine`]: stateful facade composing one [`Engine::step`] per
//!   generation; [`advance`] is the same cycle as a pure function
//!
//! The generational driver loop stays outside this crate: callers decide
//! how many steps to run, when to consult the convergence checker, and
//! whether to apply [`Engine::mutate`] between steps.
//!
//! # Example
//!
//! ```
//! use numpart::{Engine, EngineConfig};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(7))?;
//! for _ in 0..50 {
//!     engine.step()?;
//! }
//! let best = engine.best_solution().expect("generations were evaluated");
//! assert!(best.subset_zero.len() + best.subset_one.len() == 100);
//! # Ok::<(), numpart::Error>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Hayes (2002), "The Easiest Hard Problem", *American Scientist* 90(2)
//! - Ruml et al. (1996), "Easily Searched Encodings for Number
//!   Partitioning", *J. Optimization Theory and Applications* 89(2)

mod config;
mod convergence;
mod engine;
mod error;
mod fitness;
mod genotype;
mod instance;
pub mod operators;
mod partition;
pub mod random;
mod selection;

pub use config::EngineConfig;
pub use convergence::{evaluate_convergence, Converged};
pub use engine::{advance, evaluate, Engine, Evaluation, GenerationState, Solution};
pub use error::{Error, Result};
pub use fitness::{fitness_assessment, FrequencyHistory, FrequencyTable};
pub use genotype::{generate_population, Genotype, ValidationPolicy};
pub use instance::ProblemInstance;
pub use partition::{partition, partition_population, Phenotype};
pub use selection::{cumulative_thresholds, roulette_selection};
