#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

/// Represents a position on a plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns euclidean distance to other point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }

    /// Returns integer cell which contains the point. Coordinates are floored, so negative values
    /// are mapped consistently with positive ones.
    pub fn cell(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }

    /// Checks whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
