//! Core types: the binary genome, the fitness contract, and the strategy
//! interface between the engine and a concrete problem.

use crate::error::{EvolveError, Result};
use crate::operators::{mutation, single_point_crossover, MutationParams};
use crate::selection::selection_pair;
use rand::Rng;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A single binary gene. `false` is 0, `true` is 1.
pub type Gene = bool;

/// A generation's worth of genomes.
pub type Population = Vec<Genome>;

/// A fixed-length sequence of binary genes.
///
/// Genomes own their genes; cloning yields an independent copy, so offspring
/// can be mutated without touching their parents.
///
/// The textual form is a string of `0` and `1` characters:
///
/// ```
/// use u_bitga::Genome;
///
/// let g: Genome = "1011".parse().unwrap();
/// assert_eq!(g.len(), 4);
/// assert_eq!(g.count_ones(), 3);
/// assert_eq!(g.to_string(), "1011");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Genome {
    genes: Vec<Gene>,
}

impl Genome {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Builds a genome from `0`/`1` integers.
    ///
    /// Any other value is rejected with [`EvolveError::InvalidArgument`].
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        bits.iter()
            .enumerate()
            .map(|(i, &b)| match b {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(EvolveError::InvalidArgument(format!(
                    "gene {i} has value {other}, expected 0 or 1"
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the genome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The genes as a slice.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// The gene at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Gene> {
        self.genes.get(index).copied()
    }

    /// Complements the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Number of genes set to 1.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Number of positions at which `self` and `other` carry the same gene.
    ///
    /// Only the overlapping prefix is compared when lengths differ.
    pub fn hamming_similarity(&self, other: &Genome) -> usize {
        self.genes
            .iter()
            .zip(&other.genes)
            .filter(|(a, b)| a == b)
            .count()
    }

    /// Consumes the genome, returning its genes.
    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }
}

impl From<Vec<Gene>> for Genome {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = EvolveError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(EvolveError::InvalidArgument(format!(
                    "unexpected character {other:?} at position {i}"
                ))),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

/// Marker trait for fitness values.
///
/// Higher fitness is better (maximization). Fitness doubles as the
/// selection weight, so values used with the default selection must be
/// non-negative and finite.
///
/// Built-in implementations exist for the primitive integer and float types.
pub trait Fitness: PartialOrd + Copy + Send + Sync + fmt::Debug + 'static {
    /// The additive identity, used when totalling a population.
    fn zero() -> Self;

    /// Sums two fitness values. Integer sums saturate at the type's bounds.
    fn plus(self, other: Self) -> Self;

    /// Converts the fitness to `f64` for weighting and statistics.
    fn to_f64(self) -> f64;
}

macro_rules! impl_fitness {
    ($($t:ty => $zero:expr, $plus:ident);* $(;)?) => {
        $(
            impl Fitness for $t {
                fn zero() -> Self {
                    $zero
                }

                fn plus(self, other: Self) -> Self {
                    <$t>::$plus(self, other)
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

// Integer totals saturate instead of overflowing.
impl_fitness! {
    u8 => 0, saturating_add;
    u16 => 0, saturating_add;
    u32 => 0, saturating_add;
    u64 => 0, saturating_add;
    usize => 0, saturating_add;
    i32 => 0, saturating_add;
    i64 => 0, saturating_add;
    f32 => 0.0, add;
    f64 => 0.0, add;
}

/// Defines an evolutionary search problem.
///
/// Users supply how to create the initial population and how to score a
/// genome. Selection, crossover, and mutation default to the standard
/// strategies ([`selection_pair`], [`single_point_crossover`], [`mutation`]
/// with [`MutationParams::default`]) and can be overridden individually.
///
/// # Example
///
/// ```
/// use rand::Rng;
/// use u_bitga::{generate_population, EvolutionProblem, Genome, Population};
///
/// struct OneMax;
///
/// impl EvolutionProblem for OneMax {
///     type Fitness = usize;
///
///     fn populate<R: Rng>(&self, rng: &mut R) -> Population {
///         generate_population(20, 16, rng)
///     }
///
///     fn fitness(&self, genome: &Genome) -> usize {
///         genome.count_ones()
///     }
/// }
/// ```
pub trait EvolutionProblem {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Creates generation 0. Called exactly once per run.
    fn populate<R: Rng>(&self, rng: &mut R) -> Population;

    /// Scores a genome. Must be pure: the engine and the selection strategy
    /// evaluate the same genome several times per generation.
    fn fitness(&self, genome: &Genome) -> Self::Fitness;

    /// Picks two parents from the ranked population.
    fn select<R: Rng>(&self, population: &[Genome], rng: &mut R) -> Result<(Genome, Genome)> {
        selection_pair(population, |g| self.fitness(g), rng)
    }

    /// Recombines two parents into two fresh offspring.
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        single_point_crossover(a, b, rng)
    }

    /// Mutates an offspring. Only ever called on freshly created offspring,
    /// never on elites.
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome {
        mutation(genome, MutationParams::default(), rng)
    }

    /// Called after each ranking pass with the current best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Self::Fitness) {}
}
