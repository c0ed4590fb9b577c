//! Solver configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::TspError;

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 300);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_generations(500)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population, constant for the whole run.
    ///
    /// Larger populations increase diversity but slow down each generation.
    pub population_size: usize,

    /// Number of whole-population replacement cycles to execute.
    ///
    /// Zero is valid: the result is the best tour of the initial
    /// population.
    pub generations: usize,

    /// Per-position probability of a swap during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that a child is produced by crossover rather than by
    /// cloning its first parent (0.0–1.0).
    ///
    /// The default of 1.0 always applies crossover.
    pub crossover_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from entropy, so repeated runs differ.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 300,
            mutation_rate: 0.02,
            crossover_rate: 1.0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-position mutation probability.
    ///
    /// The value is stored as given; [`validate`](Self::validate) rejects
    /// values outside `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover probability.
    ///
    /// The value is stored as given; [`validate`](Self::validate) rejects
    /// values outside `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before any random draw, so a caller with
    /// invalid parameters can retry cheaply.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.population_size == 0 {
            return Err(TspError::InvalidPopulationSize);
        }
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("crossover_rate", self.crossover_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), TspError> {
    // `contains` is false for NaN, which is rejected along with
    // out-of-range values.
    if !(0.0..=1.0).contains(&value) {
        return Err(TspError::RateOutOfRange { name, value });
    }
    Ok(())
}
