//! The construction module contains logic which builds point sets and tours over them.

mod generator;
pub use self::generator::{GeneratorSettings, create_label, generate_point_set};

mod nearest_neighbour;
pub use self::nearest_neighbour::{build_tour, find_nearest_neighbour};
