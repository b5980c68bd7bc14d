//! Seedable random source.
//!
//! Every operator takes its randomness from an explicitly passed generator,
//! so a run is fully reproducible from its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// ```
/// use rand::Rng;
/// use u_bitga::random::create_rng;
///
/// let a: u32 = create_rng(7).random();
/// let b: u32 = create_rng(7).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
