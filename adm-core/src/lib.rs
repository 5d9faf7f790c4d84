//! Core crate contains building blocks for two introductory algorithm exercises:
//!
//! - a greedy ***nearest neighbour*** tour over a set of labeled points on a plane, with
//!   a plain text grid rendering of the points;
//! - integer multiplication and division expressed only through doubling, halving and addition
//!   (***Russian peasant*** multiplication and bit-shift division).
//!
//! # Examples
//!
//! ```
//! use adm_core::prelude::*;
//!
//! let points = PointSet::with_points(vec![("a", Point::new(0., 0.)), ("b", Point::new(3., 4.))]).unwrap();
//! let tour = build_tour(&points).unwrap();
//!
//! assert_eq!(tour.labels(), &["a".to_string(), "b".to_string()]);
//! assert_eq!(tour.distance(&points), 5.);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod arithmetic;
pub mod construction;
pub mod format;
pub mod models;
pub mod prelude;
pub mod utils;
