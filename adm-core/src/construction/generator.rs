#[cfg(test)]
#[path = "../../tests/unit/construction/generator_test.rs"]
mod generator_test;

use crate::models::{Point, PointSet};
use crate::utils::{ExerciseError, ExerciseResult, Random};

const ALPHABET_SIZE: usize = 26;

/// Specifies how random point sets are generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Amount of points.
    pub size: usize,
    /// Exclusive upper bound of x coordinate.
    pub max_x: i32,
    /// Exclusive upper bound of y coordinate.
    pub max_y: i32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { size: 5, max_x: 20, max_y: 10 }
    }
}

impl GeneratorSettings {
    /// Sets amount of points.
    pub fn with_size(mut self, size: Option<usize>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        self
    }

    /// Sets exclusive upper bounds of both coordinates.
    pub fn with_bounds(mut self, max_x: Option<i32>, max_y: Option<i32>) -> Self {
        if let Some(max_x) = max_x {
            self.max_x = max_x;
        }
        if let Some(max_y) = max_y {
            self.max_y = max_y;
        }
        self
    }
}

/// Generates a point set with `settings.size` points labeled `a`, `b`, .. `z`, `aa`, `ab`, ..
/// Each coordinate is an integer drawn uniformly from `[0, max)` of its axis.
pub fn generate_point_set(settings: &GeneratorSettings, random: &dyn Random) -> ExerciseResult<PointSet> {
    if settings.max_x <= 0 || settings.max_y <= 0 {
        return Err(ExerciseError::invalid_argument(format!(
            "coordinate bounds must be positive, got: {}x{}",
            settings.max_x, settings.max_y
        )));
    }

    PointSet::with_points((0..settings.size).map(|index| {
        let x = random.uniform_int(0, settings.max_x - 1);
        let y = random.uniform_int(0, settings.max_y - 1);

        (create_label(index), Point::new(x as f64, y as f64))
    }))
}

/// Creates a spreadsheet column like label for given zero based index: `0 -> a`, `25 -> z`, `26 -> aa`.
pub fn create_label(index: usize) -> String {
    let mut index = index + 1;
    let mut label = Vec::new();

    while index > 0 {
        index -= 1;
        label.push(char::from(b'a' + (index % ALPHABET_SIZE) as u8));
        index /= ALPHABET_SIZE;
    }

    label.into_iter().rev().collect()
}
