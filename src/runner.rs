//! The generational evolution loop.
//!
//! [`GaRunner`] orchestrates the complete process:
//! validation → initialization → (selection → crossover → mutation) × N
//! per generation, with whole-population replacement, then extraction of
//! the best tour from the final population.

use crate::city::City;
use crate::config::GaConfig;
use crate::error::TspError;
use crate::operators::{ordered_crossover, swap_mutation};
use crate::population::initial_population;
use crate::random::create_rng;
use crate::selection::roulette;
use crate::tour::Tour;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The shortest tour in the final population, resolved to cities in
    /// visiting order. The closing edge back to the first city is implied.
    pub best_route: Vec<City>,

    /// Total length of `best_route`, including the closing edge.
    pub best_length: f64,

    /// Number of generations actually executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best tour length in the population at generation 0 and after each
    /// completed generation.
    pub length_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// The engine is single-threaded and synchronous: one call owns its
/// population exclusively and runs to completion. Hosts that need a
/// responsive UI should run the whole call on a worker thread and use
/// [`run_with_cancel`](GaRunner::run_with_cancel) for cooperative
/// cancellation.
///
/// # Usage
///
/// ```
/// use tsp_ga::{City, GaConfig, GaRunner};
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 1.0),
///     City::new("c", 1.0, 1.0),
///     City::new("d", 1.0, 0.0),
/// ];
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&cities, &config).unwrap();
/// assert_eq!(result.best_route.len(), 4);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic algorithm over `cities`.
    ///
    /// Validates the configuration and the city list before consuming any
    /// randomness; on success, returns the best tour of the final
    /// population together with its length.
    pub fn run(cities: &[City], config: &GaConfig) -> Result<GaResult, TspError> {
        Self::run_with_cancel(cities, config, None)
    }

    /// Runs the genetic algorithm with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set, the loop stops between
    /// generations and returns the best tour of the current population
    /// with `cancelled: true`.
    pub fn run_with_cancel(
        cities: &[City],
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult, TspError> {
        config.validate()?;
        validate_cities(cities)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // Generation 0: independent uniform shuffles.
        let mut population = initial_population(cities.len(), config.population_size, &mut rng);

        let mut length_history = Vec::with_capacity(config.generations + 1);
        length_history.push(best_of(&population, cities).1);

        let mut cancelled = false;
        let mut completed = 0;

        for _ in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // The population is immutable while breeding, so one fitness
            // vector serves every selection draw of this generation.
            let fitnesses: Vec<f64> = population.iter().map(|t| t.fitness(cities)).collect();

            let mut next_gen = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let parent1 = &population[roulette(&fitnesses, &mut rng)];
                let parent2 = &population[roulette(&fitnesses, &mut rng)];

                let mut child = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    ordered_crossover(parent1, parent2, &mut rng)
                } else {
                    parent1.clone()
                };

                swap_mutation(&mut child, config.mutation_rate, &mut rng);
                next_gen.push(child);
            }

            // Whole-population replacement: no elitism, no survivors.
            population = next_gen;
            completed += 1;
            length_history.push(best_of(&population, cities).1);
        }

        let (best, best_length) = best_of(&population, cities);
        Ok(GaResult {
            best_route: best.resolve(cities),
            best_length,
            generations: completed,
            cancelled,
            length_history,
        })
    }
}

/// Rejects city lists the engine cannot evolve: fewer than two cities, or
/// exact coordinate collisions that would make fitness undefined.
fn validate_cities(cities: &[City]) -> Result<(), TspError> {
    if cities.len() < 2 {
        return Err(TspError::TooFewCities(cities.len()));
    }
    for i in 0..cities.len() {
        for j in i + 1..cities.len() {
            if cities[i].x == cities[j].x && cities[i].y == cities[j].y {
                return Err(TspError::DuplicateCoordinates {
                    a: cities[i].id.clone(),
                    b: cities[j].id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Shortest tour in the population together with its length.
fn best_of<'a>(population: &'a [Tour], cities: &[City]) -> (&'a Tour, f64) {
    population
        .iter()
        .map(|t| (t, t.length(cities)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .expect("population must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn unit_square() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 1.0),
            City::new("c", 1.0, 1.0),
            City::new("d", 1.0, 0.0),
        ]
    }

    fn random_cities(count: usize, seed: u64) -> Vec<City> {
        let mut rng = create_rng(seed);
        (0..count)
            .map(|i| {
                City::new(
                    format!("C{i}"),
                    rng.random_range(0.0..100.0),
                    rng.random_range(0.0..100.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_unit_square_converges_to_perimeter() {
        let cities = unit_square();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(200)
            .with_mutation_rate(0.02)
            .with_seed(42);

        let result = GaRunner::run(&cities, &config).unwrap();

        assert!(
            (result.best_length - 4.0).abs() < 1e-9,
            "expected the unit-square perimeter, got {}",
            result.best_length
        );
        let ids: HashSet<&str> = result.best_route.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 4, "route must visit all 4 cities exactly once");
        assert_eq!(result.generations, 200);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let cities = random_cities(15, 7);
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(50)
            .with_seed(123);

        let a = GaRunner::run(&cities, &config).unwrap();
        let b = GaRunner::run(&cities, &config).unwrap();

        assert_eq!(a.best_length, b.best_length);
        let ids = |r: &GaResult| -> Vec<String> {
            r.best_route.iter().map(|c| c.id.clone()).collect()
        };
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(a.length_history, b.length_history);
    }

    #[test]
    fn test_result_route_is_a_permutation() {
        let cities = random_cities(12, 3);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(20)
            .with_seed(5);

        let result = GaRunner::run(&cities, &config).unwrap();

        assert_eq!(result.best_route.len(), 12);
        let ids: HashSet<&str> = result.best_route.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_zero_generations_returns_best_of_initial_population() {
        let cities = random_cities(10, 9);
        let config = GaConfig::default()
            .with_population_size(25)
            .with_generations(0)
            .with_seed(1);

        let result = GaRunner::run(&cities, &config).unwrap();

        assert_eq!(result.generations, 0);
        assert_eq!(result.length_history.len(), 1);
        assert!((result.length_history[0] - result.best_length).abs() < 1e-12);
    }

    #[test]
    fn test_length_history_spans_all_generations() {
        let cities = random_cities(8, 2);
        let config = GaConfig::default()
            .with_population_size(15)
            .with_generations(40)
            .with_seed(4);

        let result = GaRunner::run(&cities, &config).unwrap();

        assert_eq!(result.length_history.len(), 41);
        assert!(result.length_history.iter().all(|&l| l.is_finite() && l > 0.0));
        // The final history entry is the reported best.
        assert!((result.length_history[40] - result.best_length).abs() < 1e-12);
    }

    #[test]
    fn test_final_best_improves_on_typical_initial_best() {
        let cities = random_cities(20, 11);
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(150)
            .with_seed(8);

        let result = GaRunner::run(&cities, &config).unwrap();

        assert!(
            result.best_length < result.length_history[0],
            "expected improvement over generation 0: {} vs {}",
            result.best_length,
            result.length_history[0]
        );
    }

    #[test]
    fn test_crossover_rate_zero_still_produces_valid_tours() {
        let cities = random_cities(9, 6);
        let config = GaConfig::default()
            .with_population_size(12)
            .with_generations(30)
            .with_crossover_rate(0.0)
            .with_seed(2);

        let result = GaRunner::run(&cities, &config).unwrap();

        let ids: HashSet<&str> = result.best_route.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_two_cities() {
        let cities = vec![City::new("a", 0.0, 0.0), City::new("b", 0.0, 3.0)];
        let config = GaConfig::default()
            .with_population_size(5)
            .with_generations(10)
            .with_seed(1);

        let result = GaRunner::run(&cities, &config).unwrap();

        assert!((result.best_length - 6.0).abs() < 1e-12);
    }

    // ---- Validation ----

    #[test]
    fn test_too_few_cities() {
        let config = GaConfig::default();
        assert_eq!(
            GaRunner::run(&[], &config),
            Err(TspError::TooFewCities(0))
        );
        assert_eq!(
            GaRunner::run(&[City::new("a", 0.0, 0.0)], &config),
            Err(TspError::TooFewCities(1))
        );
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let cities = unit_square();
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(
            GaRunner::run(&cities, &config),
            Err(TspError::InvalidPopulationSize)
        );

        let config = GaConfig::default().with_mutation_rate(1.5);
        assert!(matches!(
            GaRunner::run(&cities, &config),
            Err(TspError::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_duplicate_coordinates_rejected() {
        let cities = vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 1.0, 1.0),
            City::new("c", 0.0, 0.0),
        ];
        let config = GaConfig::default();
        assert_eq!(
            GaRunner::run(&cities, &config),
            Err(TspError::DuplicateCoordinates {
                a: "a".into(),
                b: "c".into(),
            })
        );
    }

    // ---- Cancellation ----

    #[test]
    fn test_cancellation_stops_between_generations() {
        let cities = random_cities(10, 13);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(100_000)
            .with_seed(42);

        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(10));
            flag.store(true, Ordering::Relaxed);
        });

        let result = GaRunner::run_with_cancel(&cities, &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert!(result.generations < 100_000);
        let ids: HashSet<&str> = result.best_route.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 10, "cancelled run still returns a full tour");
    }

    #[test]
    fn test_pre_set_cancel_flag_returns_initial_best() {
        let cities = random_cities(6, 17);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(500)
            .with_seed(3);

        let cancel = Arc::new(AtomicBool::new(true));
        let result = GaRunner::run_with_cancel(&cities, &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.length_history.len(), 1);
    }
}
