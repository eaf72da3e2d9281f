//! Projected coordinate type.
//!
//! Network and facility coordinates are in a metric projection (x/y metres),
//! so beeline distances are plain Euclidean distances.  `f64` is used
//! because projected eastings/northings routinely exceed the 7 significant
//! digits an `f32` can hold.

/// A point in the scenario's projected coordinate system, in metres.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance in metres.
    #[inline]
    pub fn distance(self, other: Coord) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[x={:.1} | y={:.1}]", self.x, self.y)
    }
}
