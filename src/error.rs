//! Error taxonomy for the partitioning engine.
//!
//! Four failure classes exist: bad parameters ([`Error::InvalidConfiguration`]),
//! an instance request larger than its value range
//! ([`Error::SamplingExhausted`]), an exhausted breeding budget
//! ([`Error::CrossoverStalled`]), and a broken balance invariant
//! ([`Error::InvariantViolation`]).
//!
//! Only `CrossoverStalled` is recoverable — the caller may retry the
//! generation or abort. `InvariantViolation` always indicates an internal
//! defect.

/// Errors produced by the partitioning engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Initialization parameters are inconsistent (odd gene length,
    /// mismatched instance/gene lengths, oversized selection pool, ...).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Which parameter combination was rejected.
        reason: String,
    },

    /// More distinct values were requested than the sampling range holds.
    #[error("cannot draw {requested} distinct values from a range of {available}")]
    SamplingExhausted {
        /// Number of distinct values requested.
        requested: usize,
        /// Size of the half-open sampling range.
        available: usize,
    },

    /// The breeding loop spent its full attempt budget without producing
    /// a complete next generation.
    #[error("crossover stalled: {accepted} children accepted after {attempts} attempts")]
    CrossoverStalled {
        /// Children accepted before the budget ran out.
        accepted: usize,
        /// Parent pairings attempted.
        attempts: usize,
    },

    /// A genotype failed the zero/one balance invariant after an operation
    /// that must preserve it.
    #[error("balance invariant violated: {detail}")]
    InvariantViolation {
        /// What was observed.
        detail: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
