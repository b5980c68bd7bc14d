//! Error types.

use thiserror::Error;

/// Errors surfaced by the evolutionary operators and the runner.
///
/// None of these are transient: the algorithm is deterministic apart from
/// its random draws, so retrying with the same inputs cannot succeed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolveError {
    /// An argument violates an operator contract (mismatched genome lengths,
    /// malformed genome text, invalid configuration).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The population is empty where at least one genome is required.
    #[error("population must not be empty")]
    EmptyPopulation,

    /// A fitness value cannot be used as a selection weight.
    #[error("fitness {value} of genome {index} is not a valid selection weight")]
    InvalidFitness { index: usize, value: f64 },
}

pub type Result<T> = std::result::Result<T, EvolveError>;
