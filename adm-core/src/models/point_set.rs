#[cfg(test)]
#[path = "../../tests/unit/models/point_set_test.rs"]
mod point_set_test;

use crate::models::Point;
use crate::utils::{ExerciseError, ExerciseResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A collection of uniquely labeled points.
///
/// Points are kept ordered by label: every "pick any point" decision made by algorithms on top of
/// this collection (start of a tour, tie breaks, overlapping cells) resolves to the lexicographically
/// smallest label.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Point>", into = "BTreeMap<String, Point>")]
pub struct PointSet {
    points: BTreeMap<String, Point>,
}

impl PointSet {
    /// Creates an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a point set from labeled points.
    pub fn with_points<L, I>(points: I) -> ExerciseResult<Self>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, Point)>,
    {
        points.into_iter().try_fold(Self::new(), |mut point_set, (label, point)| {
            point_set.add(label, point)?;
            Ok(point_set)
        })
    }

    /// Adds a labeled point. Fails if the label is empty or already taken, or if the point has
    /// non-finite coordinates.
    pub fn add(&mut self, label: impl Into<String>, point: Point) -> ExerciseResult<()> {
        let label = label.into();

        if label.is_empty() {
            return Err(ExerciseError::invalid_input("point label cannot be empty"));
        }

        if !point.is_finite() {
            return Err(ExerciseError::invalid_input(format!(
                "point '{label}' has non-finite coordinates: ({}, {})",
                point.x(),
                point.y()
            )));
        }

        if self.points.contains_key(&label) {
            return Err(ExerciseError::invalid_input(format!("duplicate point label: '{label}'")));
        }

        self.points.insert(label, point);

        Ok(())
    }

    /// Returns a point with given label.
    pub fn get(&self, label: &str) -> Option<Point> {
        self.points.get(label).copied()
    }

    /// Returns amount of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks whether there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over labeled points ordered by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.points.iter().map(|(label, point)| (label.as_str(), *point))
    }

    /// Iterates over labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.keys().map(|label| label.as_str())
    }
}

impl TryFrom<BTreeMap<String, Point>> for PointSet {
    type Error = ExerciseError;

    fn try_from(points: BTreeMap<String, Point>) -> Result<Self, Self::Error> {
        PointSet::with_points(points)
    }
}

impl From<PointSet> for BTreeMap<String, Point> {
    fn from(point_set: PointSet) -> Self {
        point_set.points
    }
}
