//! Models module contains the data types shared by construction and rendering logic.

mod point;
pub use self::point::Point;

mod point_set;
pub use self::point_set::PointSet;

mod tour;
pub use self::tour::Tour;
