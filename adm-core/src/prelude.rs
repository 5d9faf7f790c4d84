//! This module reimports commonly used types.

pub use crate::arithmetic::{bitshift_divide, russian_peasant_multiply};

pub use crate::construction::{GeneratorSettings, build_tour, generate_point_set};

pub use crate::format::{Grid, GridSettings, read_point_set, render_grid, write_point_set};

pub use crate::models::{Point, PointSet, Tour};

pub use crate::utils::DefaultRandom;
pub use crate::utils::ErrorKind;
pub use crate::utils::ExerciseError;
pub use crate::utils::ExerciseResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::Timer;
