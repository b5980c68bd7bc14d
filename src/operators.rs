//! Binary genetic operators.
//!
//! Generation, crossover, and mutation for bit-string genomes. Every
//! operator draws from the generator it is handed, so results are
//! reproducible under a fixed seed.
//!
//! # Operators
//!
//! - [`generate_genome`] / [`generate_population`]: uniform random bits
//! - [`single_point_crossover`]: splice two parents at one random cut
//! - [`mutation`]: a fixed number of independent bit-flip trials
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use crate::error::{EvolveError, Result};
use crate::types::{Genome, Population};
use rand::Rng;

// ============================================================================
// Generation
// ============================================================================

/// Creates a genome of exactly `length` genes, each 0 or 1 with equal
/// probability.
pub fn generate_genome<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Genome {
    Genome::new((0..length).map(|_| rng.random_bool(0.5)).collect())
}

/// Creates `size` independent random genomes of `genome_length` genes.
pub fn generate_population<R: Rng + ?Sized>(
    size: usize,
    genome_length: usize,
    rng: &mut R,
) -> Population {
    (0..size)
        .map(|_| generate_genome(genome_length, rng))
        .collect()
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut `p` uniformly from `[1, len - 1]` and returns
/// `(a[..p] ++ b[p..], b[..p] ++ a[p..])`. Both children are freshly
/// allocated. Genomes shorter than 2 genes have no interior cut and are
/// returned unchanged (as copies).
///
/// # Errors
/// [`EvolveError::InvalidArgument`] if the parents differ in length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn single_point_crossover<R: Rng + ?Sized>(
    a: &Genome,
    b: &Genome,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    let n = a.len();
    if n != b.len() {
        return Err(EvolveError::InvalidArgument(format!(
            "genomes must be of the same length, got {} and {}",
            n,
            b.len()
        )));
    }

    if n < 2 {
        return Ok((a.clone(), b.clone()));
    }

    let p = rng.random_range(1..n);
    Ok((splice(a, b, p), splice(b, a, p)))
}

/// `head[..p]` followed by `tail[p..]`.
fn splice(head: &Genome, tail: &Genome, p: usize) -> Genome {
    let mut genes = Vec::with_capacity(head.len());
    genes.extend_from_slice(&head.genes()[..p]);
    genes.extend_from_slice(&tail.genes()[p..]);
    Genome::new(genes)
}

// ============================================================================
// Mutation
// ============================================================================

/// Parameters of [`mutation`].
///
/// # Defaults
///
/// ```
/// use u_bitga::MutationParams;
///
/// let params = MutationParams::default();
/// assert_eq!(params.num_flips, 1);
/// assert_eq!(params.probability, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationParams {
    /// Number of independent flip trials per genome.
    pub num_flips: usize,

    /// Probability that a trial flips its chosen gene (0.0–1.0).
    pub probability: f64,
}

impl Default for MutationParams {
    fn default() -> Self {
        Self {
            num_flips: 1,
            probability: 0.5,
        }
    }
}

impl MutationParams {
    /// Creates mutation parameters. `probability` is clamped to `[0, 1]`;
    /// NaN becomes 0.
    pub fn new(num_flips: usize, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self {
            num_flips,
            probability,
        }
    }
}

/// Bit-flip mutation.
///
/// Runs `params.num_flips` independent trials. Each trial picks a gene
/// uniformly over the whole genome and flips it with probability
/// `params.probability`. The same gene may be picked repeatedly, so its net
/// change is the parity of its successful trials.
///
/// Takes the genome by value: a genome that must survive unchanged (an
/// elite, for instance) has to be cloned by the caller first.
///
/// With `probability = 0.0` no gene ever changes; with `1.0` every trial
/// flips. Empty genomes are returned as is.
///
/// # Complexity
/// O(num_flips)
pub fn mutation<R: Rng + ?Sized>(
    mut genome: Genome,
    params: MutationParams,
    rng: &mut R,
) -> Genome {
    let n = genome.len();
    if n == 0 {
        return genome;
    }
    for _ in 0..params.num_flips {
        let index = rng.random_range(0..n);
        if rng.random::<f64>() < params.probability {
            genome.flip(index);
        }
    }
    genome
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    fn genome_of(len: usize) -> impl Strategy<Value = Genome> {
        prop::collection::vec(any::<bool>(), len).prop_map(Genome::new)
    }

    fn equal_length_pair(min: usize, max: usize) -> impl Strategy<Value = (Genome, Genome)> {
        (min..max).prop_flat_map(|n| (genome_of(n), genome_of(n)))
    }

    // ---- Generation ----

    #[test]
    fn test_generate_population_shape() {
        let mut rng = create_rng(42);
        let pop = generate_population(10, 12, &mut rng);
        assert_eq!(pop.len(), 10);
        assert!(pop.iter().all(|g| g.len() == 12));
    }

    #[test]
    fn test_generate_genome_uses_both_values() {
        let mut rng = create_rng(42);
        let g = generate_genome(256, &mut rng);
        let ones = g.count_ones();
        assert!(ones > 64 && ones < 192, "expected roughly half ones, got {ones}");
    }

    #[test]
    fn test_generate_zero_length() {
        let mut rng = create_rng(42);
        assert!(generate_genome(0, &mut rng).is_empty());
        assert!(generate_population(0, 5, &mut rng).is_empty());
    }

    proptest! {
        #[test]
        fn prop_generate_genome_length(n in 0usize..200, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            prop_assert_eq!(generate_genome(n, &mut rng).len(), n);
        }
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        let a: Genome = "0101".parse().unwrap();
        let b: Genome = "010".parse().unwrap();
        let err = single_point_crossover(&a, &b, &mut rng).unwrap_err();
        assert!(matches!(err, EvolveError::InvalidArgument(_)));
    }

    #[test]
    fn test_crossover_short_genomes_unchanged() {
        let mut rng = create_rng(42);
        for (a, b) in [("", ""), ("1", "0")] {
            let a: Genome = a.parse().unwrap();
            let b: Genome = b.parse().unwrap();
            let (c1, c2) = single_point_crossover(&a, &b, &mut rng).unwrap();
            assert_eq!(c1, a);
            assert_eq!(c2, b);
        }
    }

    #[test]
    fn test_crossover_two_genes_always_swaps_tail() {
        let mut rng = create_rng(42);
        let a: Genome = "00".parse().unwrap();
        let b: Genome = "11".parse().unwrap();
        for _ in 0..20 {
            let (c1, c2) = single_point_crossover(&a, &b, &mut rng).unwrap();
            assert_eq!(c1.to_string(), "01");
            assert_eq!(c2.to_string(), "10");
        }
    }

    #[test]
    fn test_crossover_cut_is_interior() {
        let mut rng = create_rng(7);
        let a: Genome = "00000000".parse().unwrap();
        let b: Genome = "11111111".parse().unwrap();
        for _ in 0..200 {
            let (c1, _) = single_point_crossover(&a, &b, &mut rng).unwrap();
            // c1 = 0^p 1^(n-p) with 1 <= p <= n-1
            let p = c1.genes().iter().take_while(|&&g| !g).count();
            assert!((1..8).contains(&p), "cut {p} out of range in {c1}");
            assert_eq!(c1.count_ones(), 8 - p);
        }
    }

    proptest! {
        #[test]
        fn prop_crossover_mixes_positions((a, b) in equal_length_pair(2, 64), seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let (c1, c2) = single_point_crossover(&a, &b, &mut rng).unwrap();
            prop_assert_eq!(c1.len(), a.len());
            prop_assert_eq!(c2.len(), a.len());
            for i in 0..a.len() {
                let from_a = c1.get(i) == a.get(i) && c2.get(i) == b.get(i);
                let from_b = c1.get(i) == b.get(i) && c2.get(i) == a.get(i);
                prop_assert!(from_a || from_b, "position {} not inherited from the parents", i);
            }
        }

        #[test]
        fn prop_crossover_rejects_mismatch(
            a in prop::collection::vec(any::<bool>(), 0..32),
            b in prop::collection::vec(any::<bool>(), 0..32),
        ) {
            prop_assume!(a.len() != b.len());
            let mut rng = create_rng(0);
            let result = single_point_crossover(&Genome::new(a), &Genome::new(b), &mut rng);
            prop_assert!(matches!(result, Err(EvolveError::InvalidArgument(_))));
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_params_clamp() {
        assert_eq!(MutationParams::new(3, 1.5).probability, 1.0);
        assert_eq!(MutationParams::new(3, -0.5).probability, 0.0);
        assert_eq!(MutationParams::new(3, f64::NAN).probability, 0.0);
    }

    #[test]
    fn test_mutation_single_certain_flip() {
        let mut rng = create_rng(42);
        let g: Genome = "0000000000".parse().unwrap();
        let m = mutation(g, MutationParams::new(1, 1.0), &mut rng);
        assert_eq!(m.count_ones(), 1);
    }

    #[test]
    fn test_mutation_empty_genome() {
        let mut rng = create_rng(42);
        let m = mutation(Genome::default(), MutationParams::new(5, 1.0), &mut rng);
        assert!(m.is_empty());
    }

    proptest! {
        #[test]
        fn prop_mutation_zero_probability_is_identity(
            g in prop::collection::vec(any::<bool>(), 1..64).prop_map(Genome::new),
            k in 0usize..32,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let m = mutation(g.clone(), MutationParams::new(k, 0.0), &mut rng);
            prop_assert_eq!(m, g);
        }

        #[test]
        fn prop_mutation_certain_flips_follow_parity(
            g in prop::collection::vec(any::<bool>(), 1..64).prop_map(Genome::new),
            k in 0usize..32,
            seed in any::<u64>(),
        ) {
            // Replay the trials on a twin generator to recover the sampled indices.
            let mut rng = create_rng(seed);
            let mut replay = create_rng(seed);
            let m = mutation(g.clone(), MutationParams::new(k, 1.0), &mut rng);

            let mut hits = vec![0usize; g.len()];
            for _ in 0..k {
                hits[replay.random_range(0..g.len())] += 1;
                let _: f64 = replay.random();
            }
            for i in 0..g.len() {
                let flipped = m.get(i) != g.get(i);
                prop_assert_eq!(flipped, hits[i] % 2 == 1);
            }
        }
    }
}
