//! Tour representation: a cyclic permutation of city indices.

use crate::city::City;

/// A candidate solution: an ordering of all cities, implicitly cyclic.
///
/// A tour stores indices into a shared city slice rather than owned cities,
/// so membership and identity checks are plain index comparisons and the
/// city data is never cloned per tour. The permutation invariant — every
/// index in `0..cities.len()` appearing exactly once — must hold after
/// initialization, crossover, and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps an index ordering.
    ///
    /// The caller is responsible for passing a permutation of
    /// `0..cities.len()`; the operators in this crate preserve that
    /// property by construction.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The visiting order as city indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the tour contains no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total travel distance, including the closing edge from the last
    /// city back to the first.
    pub fn length(&self, cities: &[City]) -> f64 {
        let n = self.order.len();
        let mut total = 0.0;
        for i in 0..n {
            let from = &cities[self.order[i]];
            let to = &cities[self.order[(i + 1) % n]];
            total += from.distance(to);
        }
        total
    }

    /// Reciprocal tour length; higher is better.
    ///
    /// Well-defined whenever no two cities share coordinates, which the
    /// runner checks before evolution starts.
    pub fn fitness(&self, cities: &[City]) -> f64 {
        1.0 / self.length(cities)
    }

    /// Resolves the index ordering into owned cities, in visiting order.
    pub fn resolve(&self, cities: &[City]) -> Vec<City> {
        self.order.iter().map(|&i| cities[i].clone()).collect()
    }
}
