//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] drives the generations:
//! populate → (rank → terminate? → elites + select → crossover → mutate) → repeat.

use crate::config::EvolutionConfig;
use crate::error::{EvolveError, Result};
use crate::random::rng_from_seed;
use crate::selection::{population_fitness, sort_population};
use crate::types::{EvolutionProblem, Fitness, Genome, Population};
use rand::Rng;

/// Number of top-ranked genomes copied unchanged into the next generation.
pub const ELITE_COUNT: usize = 2;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The best genome reached the fitness limit.
    FitnessReached,
    /// The generation limit was exhausted.
    GenerationLimit,
}

/// Result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<F: Fitness> {
    /// Final population, ranked best first.
    pub population: Population,

    /// Fitness of `population[0]`.
    pub best_fitness: F,

    /// Zero-based index of the generation at which the loop exited.
    ///
    /// When the fitness limit is reached this is the generation in which it
    /// was observed. When the limit is exhausted it is
    /// `generation_limit - 1`, not `generation_limit`.
    pub generation: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best fitness of every ranking pass, including the final one.
    pub fitness_history: Vec<f64>,
}

impl<F: Fitness> EvolutionResult<F> {
    /// The best genome of the final population.
    pub fn best(&self) -> &Genome {
        &self.population[0]
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = EvolutionConfig::new(target).with_seed(42);
/// let result = EvolutionRunner::run(&problem, &config)?;
/// println!("best {} after {} generations", result.best(), result.generation);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolution with a generator seeded from `config.seed`.
    pub fn run<P: EvolutionProblem>(
        problem: &P,
        config: &EvolutionConfig<P::Fitness>,
    ) -> Result<EvolutionResult<P::Fitness>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the evolution drawing from the given generator.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// - [`EvolveError::InvalidArgument`] for an invalid config or a
    ///   crossover length mismatch.
    /// - [`EvolveError::EmptyPopulation`] if `populate` returns no genomes.
    /// - Any error raised by the problem's selection or crossover.
    pub fn run_with_rng<P: EvolutionProblem, R: Rng>(
        problem: &P,
        config: &EvolutionConfig<P::Fitness>,
        rng: &mut R,
    ) -> Result<EvolutionResult<P::Fitness>> {
        config.validate()?;

        let fitness = |g: &Genome| problem.fitness(g);

        // 1. Initialize population
        let mut population = problem.populate(rng);
        if population.is_empty() {
            return Err(EvolveError::EmptyPopulation);
        }
        log::debug!(
            "initial population: {} genomes of length {}",
            population.len(),
            population[0].len()
        );

        let mut fitness_history = Vec::with_capacity(config.generation_limit + 1);
        let mut termination = Termination::GenerationLimit;
        let mut generation = 0;

        // 2. Evolutionary loop
        for gen in 0..config.generation_limit {
            generation = gen;

            population = sort_population(population, fitness);
            let best_fitness = fitness(&population[0]);
            fitness_history.push(best_fitness.to_f64());
            problem.on_generation(gen, best_fitness);

            log::trace!(
                "generation {}: best {:?}, total {:?}",
                gen,
                best_fitness,
                population_fitness(&population, fitness)
            );

            if best_fitness >= config.fitness_limit {
                termination = Termination::FitnessReached;
                break;
            }

            population = next_generation(problem, &population, rng)?;
        }

        // 3. Final ranking (the last reproduced generation is still unsorted)
        let population = if termination == Termination::FitnessReached {
            population
        } else {
            let ranked = sort_population(population, fitness);
            fitness_history.push(fitness(&ranked[0]).to_f64());
            ranked
        };
        let best_fitness = fitness(&population[0]);

        log::info!(
            "evolution finished at generation {} ({:?}), best fitness {:?}",
            generation,
            termination,
            best_fitness
        );

        Ok(EvolutionResult {
            population,
            best_fitness,
            generation,
            termination,
            fitness_history,
        })
    }
}

/// Builds the next generation from a ranked population.
///
/// The top [`ELITE_COUNT`] genomes are carried over as copies, then
/// `len / 2 - 1` offspring pairs are appended. Odd sizes therefore shrink by
/// one and populations below four collapse to their elites.
fn next_generation<P: EvolutionProblem, R: Rng>(
    problem: &P,
    ranked: &[Genome],
    rng: &mut R,
) -> Result<Population> {
    let elite_count = ELITE_COUNT.min(ranked.len());
    let pairs = (ranked.len() / 2).saturating_sub(1);

    let mut next_gen = Vec::with_capacity(elite_count + 2 * pairs);
    next_gen.extend_from_slice(&ranked[..elite_count]);

    for _ in 0..pairs {
        let (a, b) = problem.select(ranked, rng)?;
        let (child_a, child_b) = problem.crossover(&a, &b, rng)?;
        next_gen.push(problem.mutate(child_a, rng));
        next_gen.push(problem.mutate(child_b, rng));
    }

    Ok(next_gen)
}

// ============================================================================
// Tests
// ============================================================================
