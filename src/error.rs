//! Error taxonomy for solver input validation.

use thiserror::Error;

/// Errors surfaced before any computation begins.
///
/// The runner validates its configuration and city list up front, before a
/// single random draw; once evolution starts, every operator is total and
/// no further errors can occur.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A tour is undefined for fewer than two cities.
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),

    /// The population must contain at least one tour.
    #[error("population_size must be at least 1")]
    InvalidPopulationSize,

    /// An operator probability fell outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Two cities share exact coordinates, so a tour visiting them
    /// back-to-back could have length 0 and undefined fitness.
    #[error("cities {a:?} and {b:?} share the same coordinates")]
    DuplicateCoordinates {
        /// Id of the first city in the colliding pair.
        a: String,
        /// Id of the second city in the colliding pair.
        b: String,
    },
}
