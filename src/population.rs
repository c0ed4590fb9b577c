//! Population initialization.
//!
//! Generation 0 is built from independent uniform shuffles of the city
//! index list. Every later generation is produced by the runner through
//! selection, crossover, and mutation.

use crate::tour::Tour;
use rand::seq::SliceRandom;
use rand::Rng;

/// Creates one uniformly random route over `city_count` cities.
pub fn random_route<R: Rng>(city_count: usize, rng: &mut R) -> Tour {
    let mut order: Vec<usize> = (0..city_count).collect();
    order.shuffle(rng);
    Tour::new(order)
}

/// Creates `size` independent random routes.
///
/// Routes may coincide by chance; duplicates are not corrected.
pub fn initial_population<R: Rng>(city_count: usize, size: usize, rng: &mut R) -> Vec<Tour> {
    (0..size).map(|_| random_route(city_count, rng)).collect()
}
