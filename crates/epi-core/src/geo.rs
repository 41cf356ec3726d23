//! Planar coordinates inside the simulation rectangle.

/// A point in `[0, length] × [0, height]`.
///
/// Positions are values: a move replaces the agent's `Position` wholesale.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `true` if both coordinates lie inside the closed rectangle.
    #[inline]
    pub fn within(self, length: f64, height: f64) -> bool {
        (0.0..=length).contains(&self.x) && (0.0..=height).contains(&self.y)
    }

    /// The nearest point of the closed rectangle.  A NaN coordinate maps to 0.
    #[inline]
    pub fn clamped(self, length: f64, height: f64) -> Self {
        Self {
            x: self.x.max(0.0).min(length),
            y: self.y.max(0.0).min(height),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
