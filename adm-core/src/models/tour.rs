#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::PointSet;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// An ordered visitation sequence over labels of a point set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour {
    labels: Vec<String>,
}

impl Tour {
    pub(crate) fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Returns visited labels in visitation order.
    pub fn labels(&self) -> &[String] {
        self.labels.as_slice()
    }

    /// Returns amount of visited labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Checks whether the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the length of the open path through the points, from the first label to the last one.
    /// Legs which refer to a label missing in `points` are not counted.
    pub fn distance(&self, points: &PointSet) -> f64 {
        self.labels
            .windows(2)
            .filter_map(|leg| match (points.get(leg[0].as_str()), points.get(leg[1].as_str())) {
                (Some(from), Some(to)) => Some(from.distance_to(&to)),
                _ => None,
            })
            .sum()
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.labels.join(" "))
    }
}
