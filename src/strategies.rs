//! Strategies as first-class values.
//!
//! [`FnProblem`] holds one function per strategy, so a caller can swap a
//! single strategy without writing a full [`EvolutionProblem`] impl.
//! Unset strategies default to the standard operators.

use crate::error::Result;
use crate::operators::{generate_population, mutation, single_point_crossover, MutationParams};
use crate::selection::selection_pair;
use crate::types::{EvolutionProblem, Fitness, Genome, Population};
use rand::{Rng, RngCore};
use std::fmt;

/// Creates generation 0.
pub type PopulateFn = Box<dyn Fn(&mut dyn RngCore) -> Population>;

/// Scores a genome.
pub type FitnessFn<F> = Box<dyn Fn(&Genome) -> F>;

/// Picks two parents given the population and the fitness function.
pub type SelectionFn<F> =
    Box<dyn Fn(&[Genome], &dyn Fn(&Genome) -> F, &mut dyn RngCore) -> Result<(Genome, Genome)>>;

/// Recombines two parents.
pub type CrossoverFn = Box<dyn Fn(&Genome, &Genome, &mut dyn RngCore) -> Result<(Genome, Genome)>>;

/// Mutates a fresh offspring.
pub type MutationFn = Box<dyn Fn(Genome, &mut dyn RngCore) -> Genome>;

/// A problem assembled from strategy functions.
///
/// # Example
///
/// ```
/// use u_bitga::{EvolutionConfig, EvolutionRunner, FnProblem, Genome, MutationParams};
///
/// let target: Genome = "1100110011".parse().unwrap();
/// let problem = FnProblem::random(10, 10, move |g: &Genome| g.hamming_similarity(&target))
///     .with_mutation_params(MutationParams::new(2, 0.5));
///
/// let config = EvolutionConfig::new(10).with_generation_limit(50).with_seed(1);
/// let result = EvolutionRunner::run(&problem, &config).unwrap();
/// assert!(result.generation < 50);
/// ```
pub struct FnProblem<F: Fitness> {
    populate: PopulateFn,
    fitness: FitnessFn<F>,
    selection: SelectionFn<F>,
    crossover: CrossoverFn,
    mutation: MutationFn,
}

impl<F: Fitness> FnProblem<F> {
    /// Creates a problem from a populate and a fitness function, with the
    /// standard selection, crossover, and mutation.
    pub fn new<P, E>(populate: P, fitness: E) -> Self
    where
        P: Fn(&mut dyn RngCore) -> Population + 'static,
        E: Fn(&Genome) -> F + 'static,
    {
        Self {
            populate: Box::new(populate),
            fitness: Box::new(fitness),
            selection: Box::new(default_selection::<F>),
            crossover: Box::new(default_crossover),
            mutation: Box::new(default_mutation),
        }
    }

    /// Creates a problem whose initial population is `population_size`
    /// uniformly random genomes of `genome_length` genes.
    pub fn random<E>(population_size: usize, genome_length: usize, fitness: E) -> Self
    where
        E: Fn(&Genome) -> F + 'static,
    {
        Self::new(
            move |rng| generate_population(population_size, genome_length, rng),
            fitness,
        )
    }

    /// Replaces the selection strategy.
    pub fn with_selection<S>(mut self, selection: S) -> Self
    where
        S: Fn(&[Genome], &dyn Fn(&Genome) -> F, &mut dyn RngCore) -> Result<(Genome, Genome)>
            + 'static,
    {
        self.selection = Box::new(selection);
        self
    }

    /// Replaces the crossover strategy.
    pub fn with_crossover<C>(mut self, crossover: C) -> Self
    where
        C: Fn(&Genome, &Genome, &mut dyn RngCore) -> Result<(Genome, Genome)> + 'static,
    {
        self.crossover = Box::new(crossover);
        self
    }

    /// Replaces the mutation strategy.
    pub fn with_mutation<M>(mut self, mutation: M) -> Self
    where
        M: Fn(Genome, &mut dyn RngCore) -> Genome + 'static,
    {
        self.mutation = Box::new(mutation);
        self
    }

    /// Uses the standard bit-flip mutation with custom parameters.
    pub fn with_mutation_params(self, params: MutationParams) -> Self {
        self.with_mutation(move |genome, rng| mutation(genome, params, rng))
    }
}

fn default_selection<F: Fitness>(
    population: &[Genome],
    fitness: &dyn Fn(&Genome) -> F,
    rng: &mut dyn RngCore,
) -> Result<(Genome, Genome)> {
    selection_pair(population, fitness, rng)
}

fn default_crossover(a: &Genome, b: &Genome, rng: &mut dyn RngCore) -> Result<(Genome, Genome)> {
    single_point_crossover(a, b, rng)
}

fn default_mutation(genome: Genome, rng: &mut dyn RngCore) -> Genome {
    mutation(genome, MutationParams::default(), rng)
}

impl<F: Fitness> EvolutionProblem for FnProblem<F> {
    type Fitness = F;

    fn populate<R: Rng>(&self, rng: &mut R) -> Population {
        let rng: &mut dyn RngCore = rng;
        (self.populate)(rng)
    }

    fn fitness(&self, genome: &Genome) -> F {
        (self.fitness)(genome)
    }

    fn select<R: Rng>(&self, population: &[Genome], rng: &mut R) -> Result<(Genome, Genome)> {
        let rng: &mut dyn RngCore = rng;
        (self.selection)(population, &*self.fitness, rng)
    }

    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        let rng: &mut dyn RngCore = rng;
        (self.crossover)(a, b, rng)
    }

    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome {
        let rng: &mut dyn RngCore = rng;
        (self.mutation)(genome, rng)
    }
}

impl<F: Fitness> fmt::Debug for FnProblem<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn ones(g: &Genome) -> usize {
        g.count_ones()
    }

    #[test]
    fn test_random_populate() {
        let problem = FnProblem::random(6, 9, ones);
        let mut rng = create_rng(42);
        let pop = problem.populate(&mut rng);
        assert_eq!(pop.len(), 6);
        assert!(pop.iter().all(|g| g.len() == 9));
    }

    #[test]
    fn test_default_strategies() {
        let problem = FnProblem::random(4, 8, ones);
        let mut rng = create_rng(42);
        let pop = problem.populate(&mut rng);

        let (a, b) = problem.select(&pop, &mut rng).unwrap();
        let (c1, c2) = problem.crossover(&a, &b, &mut rng).unwrap();
        assert_eq!(c1.len(), 8);
        assert_eq!(c2.len(), 8);
        assert_eq!(problem.mutate(c1, &mut rng).len(), 8);
    }

    #[test]
    fn test_custom_strategies_are_used() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);

        let problem = FnProblem::random(4, 8, ones)
            .with_selection(|pop, _fitness, _rng| Ok((pop[0].clone(), pop[0].clone())))
            .with_crossover(|a, b, _rng| Ok((b.clone(), a.clone())))
            .with_mutation(move |genome, _rng| {
                counter.set(counter.get() + 1);
                genome
            });

        let mut rng = create_rng(42);
        let pop = problem.populate(&mut rng);
        let (a, b) = problem.select(&pop, &mut rng).unwrap();
        assert_eq!(a, pop[0]);
        assert_eq!(b, pop[0]);

        let x: Genome = "11110000".parse().unwrap();
        let y: Genome = "00001111".parse().unwrap();
        let (c1, c2) = problem.crossover(&x, &y, &mut rng).unwrap();
        assert_eq!(c1, y);
        assert_eq!(c2, x);

        problem.mutate(c1, &mut rng);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_mutation_params_override() {
        let problem = FnProblem::random(1, 16, ones).with_mutation_params(MutationParams::new(4, 0.0));
        let mut rng = create_rng(42);
        let g: Genome = "1010101010101010".parse().unwrap();
        assert_eq!(problem.mutate(g.clone(), &mut rng), g);
    }
}
