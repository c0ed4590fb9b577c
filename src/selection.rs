//! Fitness-proportional (roulette-wheel) selection.
//!
//! The population is immutable while one generation is being bred, so the
//! runner computes the fitness vector once and samples it for every parent
//! draw of that generation.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

/// Selects an index with probability proportional to its weight.
///
/// Draws a threshold uniformly from `[0, total)` and scans the weights in
/// their existing order, returning the first index whose running sum
/// reaches the threshold. Floating-point rounding can leave the
/// accumulation just short of `total`; the scan then falls back to the
/// last index, so a non-empty input always yields a valid index.
///
/// # Panics
/// Panics if `weights` is empty.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot select from an empty population");

    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let pick = rng.random_range(0.0..total);
    let mut current = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        current += w;
        if current >= pick {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
