use serde::{Deserialize, Serialize};

/// A 2D map position in world units.
///
/// The engine reasons about the top-down radar plane only; height is
/// discarded by the replay decoder before events reach this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// The sentinel position used when an event carries no usable coordinates.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared Euclidean distance, for comparisons that don't need the root.
    #[must_use]
    pub fn distance_squared_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
