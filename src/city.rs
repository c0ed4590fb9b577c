//! City model and Euclidean distance.

/// A city on the 2-D plane.
///
/// Identity is the `id`: two cities with equal coordinates but different
/// ids are distinct. Cities are immutable after construction and shared
/// read-only across every tour in every generation — tours reference them
/// by index and never clone or mutate them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Stable identifier.
    pub id: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to another city.
    ///
    /// Symmetric, non-negative, and zero iff the coordinates coincide.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
