//! Binary-genome genetic algorithm.
//!
//! A population of fixed-length bit strings is ranked, selected, recombined,
//! and mutated under a user-supplied fitness function until a target fitness
//! is reached or a generation budget runs out.
//!
//! # Core Traits
//!
//! - [`Fitness`]: An orderable score; higher is better
//! - [`EvolutionProblem`]: Problem definition — populate and fitness, with
//!   overridable selection, crossover, and mutation
//!
//! # Key Types
//!
//! - [`Genome`]: A fixed-length sequence of binary genes
//! - [`EvolutionConfig`]: Fitness limit, generation limit, seed
//! - [`EvolutionRunner`]: Executes the evolutionary loop
//! - [`EvolutionResult`]: Ranked final population and exit generation
//! - [`FnProblem`]: Strategies supplied as plain functions
//!
//! # Standard Strategies
//!
//! - [`generate_population`]: uniform random bit strings
//! - [`selection_pair`]: fitness-proportionate sampling with replacement
//! - [`single_point_crossover`]: splice at one random interior point
//! - [`mutation`]: independent bit-flip trials
//!
//! # Example
//!
//! ```
//! use u_bitga::{EvolutionConfig, EvolutionRunner, FnProblem, Genome, Termination};
//!
//! let target: Genome = "1011001110".parse().unwrap();
//! let problem = FnProblem::random(10, target.len(), move |g: &Genome| {
//!     g.hamming_similarity(&target)
//! });
//! let config = EvolutionConfig::new(10).with_generation_limit(1000).with_seed(42);
//!
//! let result = EvolutionRunner::run(&problem, &config).unwrap();
//! if result.termination == Termination::FitnessReached {
//!     assert_eq!(result.best().to_string(), "1011001110");
//! }
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
mod operators;
pub mod random;
mod runner;
mod selection;
mod strategies;
mod types;

pub use config::EvolutionConfig;
pub use error::{EvolveError, Result};
pub use operators::{
    generate_genome, generate_population, mutation, single_point_crossover, MutationParams,
};
pub use runner::{EvolutionResult, EvolutionRunner, Termination, ELITE_COUNT};
pub use selection::{population_fitness, selection_pair, sort_population};
pub use strategies::{CrossoverFn, FitnessFn, FnProblem, MutationFn, PopulateFn, SelectionFn};
pub use types::{EvolutionProblem, Fitness, Gene, Genome, Population};
