//! Permutation operators: ordered crossover and swap mutation.
//!
//! Both operate on [`Tour`] index permutations and preserve the
//! permutation invariant by construction — no repair step.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::tour::Tour;
use rand::Rng;

/// Ordered Crossover (OX) producing one child from two parents.
///
/// # Algorithm (Davis, 1985)
///
/// 1. Sample two distinct cut indices from `0..len`, sorted
/// 2. Start the child with `parent1[start..end]`, preserving parent1's
///    relative order inside the segment
/// 3. Append every city of `parent2`, in parent2's order, that is not
///    already in the child
///
/// The child has the same length as its parents and contains every city
/// exactly once. Crossing a tour with itself is valid and yields a
/// rotation-like reordering of the same cities. An empty segment cannot
/// occur with distinct cuts, but the fill step tolerates one.
///
/// # Complexity
/// O(n) time, O(n) space — presence is tracked with an index mask.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn ordered_crossover<R: Rng>(parent1: &Tour, parent2: &Tour, rng: &mut R) -> Tour {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if n == 1 {
        return parent1.clone();
    }

    let (start, end) = random_cut(n, rng);

    let mut order = Vec::with_capacity(n);
    let mut taken = vec![false; n];
    for &idx in &parent1.order()[start..end] {
        order.push(idx);
        taken[idx] = true;
    }
    for &idx in parent2.order() {
        if !taken[idx] {
            order.push(idx);
        }
    }

    Tour::new(order)
}

/// Per-position swap mutation.
///
/// Visits every position; with independent probability `rate`, swaps it
/// with a uniformly random partner (which may be the position itself, a
/// no-op). Rate 0 is the identity; rate 1 pairs every position with a
/// random partner. Swaps can never break the permutation invariant.
pub fn swap_mutation<R: Rng>(tour: &mut Tour, rate: f64, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let order = tour.order_mut();
    for i in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(0..n);
            order.swap(i, j);
        }
    }
}

/// Two distinct cut indices in `0..n`, sorted ascending.
fn random_cut<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
