//! Fitness-proportionate parent selection and population ranking.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{EvolveError, Result};
use crate::types::{Fitness, Genome, Population};
use rand::Rng;
use std::cmp::Ordering;

/// Sum of `fitness` over the population.
///
/// A diagnostic aggregate; selection computes per-genome weights itself.
/// Integer totals saturate rather than overflow.
pub fn population_fitness<F, E>(population: &[Genome], fitness: E) -> F
where
    F: Fitness,
    E: Fn(&Genome) -> F,
{
    population
        .iter()
        .fold(F::zero(), |total, genome| total.plus(fitness(genome)))
}

/// Sorts the population by fitness, best (highest) first.
///
/// Each genome is evaluated once. Incomparable values (NaN) are ranked
/// last; equal-fitness genomes keep their relative order.
pub fn sort_population<F, E>(population: Population, fitness: E) -> Population
where
    F: Fitness,
    E: Fn(&Genome) -> F,
{
    let mut scored: Vec<(F, Genome)> = population
        .into_iter()
        .map(|genome| (fitness(&genome), genome))
        .collect();
    scored.sort_by(|a, b| descending(&a.0, &b.0));
    scored.into_iter().map(|(_, genome)| genome).collect()
}

/// Total descending order: comparable values best first, then NaN.
fn descending<F: PartialOrd>(a: &F, b: &F) -> Ordering {
    let a_nan = a.partial_cmp(a).is_none();
    let b_nan = b.partial_cmp(b).is_none();
    match (a_nan, b_nan) {
        (false, false) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Picks two parents by fitness-weighted sampling with replacement.
///
/// Each genome's weight is its fitness, so the same genome may be returned
/// twice. When every weight is zero the draw falls back to uniform sampling
/// instead of failing.
///
/// # Errors
/// - [`EvolveError::EmptyPopulation`] if `population` is empty.
/// - [`EvolveError::InvalidFitness`] if any fitness is negative or not finite.
///
/// # Complexity
/// O(n) per call (one evaluation pass plus two linear scans)
pub fn selection_pair<F, E, R>(
    population: &[Genome],
    fitness: E,
    rng: &mut R,
) -> Result<(Genome, Genome)>
where
    F: Fitness,
    E: Fn(&Genome) -> F,
    R: Rng + ?Sized,
{
    if population.is_empty() {
        return Err(EvolveError::EmptyPopulation);
    }

    let mut weights = selection_weights(population, fitness)?;
    let mut total: f64 = weights.iter().sum();
    if !total.is_finite() {
        // Finite weights can still overflow when summed; scale into [0, 1].
        let max = weights.iter().cloned().fold(0.0, f64::max);
        weights.iter_mut().for_each(|w| *w /= max);
        total = weights.iter().sum();
    }

    let (i, j) = if total > 0.0 {
        (
            roulette(&weights, total, rng),
            roulette(&weights, total, rng),
        )
    } else {
        log::debug!(
            "all {} selection weights are zero, sampling parents uniformly",
            population.len()
        );
        let n = population.len();
        (rng.random_range(0..n), rng.random_range(0..n))
    };

    Ok((population[i].clone(), population[j].clone()))
}

/// Evaluates every genome and checks that the result is a usable weight.
fn selection_weights<F, E>(population: &[Genome], fitness: E) -> Result<Vec<f64>>
where
    F: Fitness,
    E: Fn(&Genome) -> F,
{
    population
        .iter()
        .enumerate()
        .map(|(index, genome)| {
            let value = fitness(genome).to_f64();
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(EvolveError::InvalidFitness { index, value })
            }
        })
        .collect()
}

/// Roulette wheel: index `i` is drawn with probability `weights[i] / total`.
///
/// Requires `total > 0`.
fn roulette<R: Rng + ?Sized>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // Floating-point fallback: last genome with a non-zero weight.
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}
