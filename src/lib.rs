//! Genetic-algorithm solver for the Euclidean Traveling Salesman Problem.
//!
//! Given a set of 2-D cities, the solver searches for a short closed tour
//! visiting each city exactly once. It is a stochastic heuristic, not an
//! exact solver: each generation, a population of candidate tours is
//! wholly replaced by children bred through fitness-proportional
//! (roulette-wheel) selection, Ordered Crossover (OX), and per-position
//! swap mutation. After the configured number of generations, the
//! shortest tour of the final population is returned.
//!
//! # Key Types
//!
//! - [`City`]: an immutable 2-D point with a stable identifier
//! - [`Tour`]: a cyclic permutation of city indices
//! - [`GaConfig`]: algorithm parameters (population size, generations,
//!   operator rates, seed)
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best route, its length, and per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: ordered crossover and swap mutation over permutations
//! - [`selection`]: roulette-wheel sampling
//! - [`population`]: random route initialization
//!
//! # Example
//!
//! ```
//! use tsp_ga::{City, GaConfig, GaRunner};
//!
//! let cities = vec![
//!     City::new("a", 0.0, 0.0),
//!     City::new("b", 0.0, 1.0),
//!     City::new("c", 1.0, 1.0),
//!     City::new("d", 1.0, 0.0),
//! ];
//!
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(200)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&cities, &config).unwrap();
//! assert_eq!(result.best_route.len(), 4);
//! assert!(result.best_length >= 4.0); // unit-square perimeter is optimal
//! ```
//!
//! The engine is a pure function of (cities, parameters, random source):
//! supply a seed for reproducible runs, omit it for fresh entropy.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod city;
mod config;
mod error;
pub mod operators;
pub mod population;
pub mod random;
mod runner;
pub mod selection;
mod tour;

pub use city::City;
pub use config::GaConfig;
pub use error::TspError;
pub use runner::{GaResult, GaRunner};
pub use tour::Tour;
