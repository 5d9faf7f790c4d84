#[cfg(test)]
#[path = "../../tests/unit/format/json_test.rs"]
mod json_test;

use crate::models::PointSet;
use crate::utils::ExerciseResult;
use std::io::{BufReader, BufWriter, Read, Write};

/// Reads a point set from json object which maps labels to coordinates, e.g.
/// `{"a": {"x": 1.0, "y": 2.0}}`. Labels must be non-empty and coordinates finite, as
/// [`PointSet::add`] requires. A label repeated inside the object keeps its last value.
pub fn read_point_set<R: Read>(reader: BufReader<R>) -> ExerciseResult<PointSet> {
    Ok(serde_json::from_reader(reader)?)
}

/// Writes a point set as pretty printed json.
pub fn write_point_set<W: Write>(mut writer: BufWriter<W>, points: &PointSet) -> ExerciseResult<()> {
    serde_json::to_writer_pretty(&mut writer, points)?;

    Ok(writer.flush()?)
}
