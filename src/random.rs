//! Seedable RNG construction.
//!
//! Every stochastic component in this crate takes an explicit
//! `&mut impl Rng`; this module is the single place a concrete generator
//! is constructed, so seeded runs are reproducible end to end.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a `u64` seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
