#[cfg(test)]
#[path = "../../tests/unit/construction/nearest_neighbour_test.rs"]
mod nearest_neighbour_test;

use crate::models::{Point, PointSet, Tour};
use crate::utils::{ExerciseError, ExerciseResult};

/// Builds a tour using greedy nearest neighbour heuristic: starting from the point with the smallest
/// label, repeatedly moves to the closest point which is not visited yet. When several points are
/// equally close, the one with the smallest label is taken.
///
/// Runs in O(n^2) time. The point set is not modified, so it can be reused by other consumers.
pub fn build_tour(points: &PointSet) -> ExerciseResult<Tour> {
    let candidates = points.iter().collect::<Vec<_>>();

    if candidates.is_empty() {
        return Err(ExerciseError::invalid_input("cannot build a tour over an empty point set"));
    }

    let mut visited = vec![false; candidates.len()];
    let mut labels = Vec::with_capacity(candidates.len());
    let mut current = Some(0);

    while let Some(index) = current {
        visited[index] = true;

        let (label, point) = candidates[index];
        labels.push(label.to_string());

        current = find_nearest_neighbour(
            &point,
            candidates.iter().enumerate().filter(|(idx, _)| !visited[*idx]).map(|(idx, (_, other))| (idx, *other)),
        );
    }

    Ok(Tour::new(labels))
}

/// Returns the key of the neighbour closest to given point or `None` when there are no neighbours.
/// Ties are resolved in favor of the neighbour which comes first. A neighbour at zero distance is
/// a valid candidate like any other.
pub fn find_nearest_neighbour<K>(point: &Point, neighbours: impl IntoIterator<Item = (K, Point)>) -> Option<K> {
    neighbours
        .into_iter()
        .fold(None, |nearest: Option<(K, f64)>, (key, neighbour)| {
            let distance = point.distance_to(&neighbour);

            match nearest {
                Some((_, best)) if best <= distance => nearest,
                _ => Some((key, distance)),
            }
        })
        .map(|(key, _)| key)
}
