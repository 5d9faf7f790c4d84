//! The format module contains logic to present point sets and to exchange them as json.

mod grid;
pub use self::grid::{Grid, GridSettings, render_grid};

mod json;
pub use self::json::{read_point_set, write_point_set};
