//! Run configuration.
//!
//! [`EvolutionConfig`] holds the termination limits and the random seed of
//! a run. Strategies live on the problem, not here.

use crate::error::{EvolveError, Result};
use crate::types::Fitness;

/// Configuration for the evolution loop.
///
/// # Example
///
/// ```
/// use u_bitga::EvolutionConfig;
///
/// let config = EvolutionConfig::new(13u32)
///     .with_generation_limit(500)
///     .with_seed(42);
///
/// assert_eq!(config.fitness_limit, 13);
/// assert_eq!(config.generation_limit, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig<F: Fitness> {
    /// The run stops as soon as the best genome reaches this fitness.
    pub fitness_limit: F,

    /// Maximum number of generations (ranking passes) before termination.
    pub generation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl<F: Fitness> EvolutionConfig<F> {
    /// Default generation budget.
    pub const DEFAULT_GENERATION_LIMIT: usize = 100;

    /// Creates a configuration with the given target fitness, a generation
    /// limit of [`DEFAULT_GENERATION_LIMIT`](Self::DEFAULT_GENERATION_LIMIT)
    /// and no fixed seed.
    pub fn new(fitness_limit: F) -> Self {
        Self {
            fitness_limit,
            generation_limit: Self::DEFAULT_GENERATION_LIMIT,
            seed: None,
        }
    }

    /// Sets the target fitness.
    pub fn with_fitness_limit(mut self, limit: F) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
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
    /// [`EvolveError::InvalidArgument`] if the generation limit is zero or
    /// the fitness limit is not comparable with itself (NaN).
    pub fn validate(&self) -> Result<()> {
        if self.generation_limit == 0 {
            return Err(EvolveError::InvalidArgument(
                "generation_limit must be at least 1".into(),
            ));
        }
        if self.fitness_limit.partial_cmp(&self.fitness_limit).is_none() {
            return Err(EvolveError::InvalidArgument(format!(
                "fitness_limit {:?} is not comparable",
                self.fitness_limit
            )));
        }
        Ok(())
    }
}
