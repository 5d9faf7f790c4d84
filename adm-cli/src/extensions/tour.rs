//! Builds a nearest neighbour tour together with a grid picture and writes them out.

#[cfg(test)]
#[path = "../../tests/unit/extensions/tour_test.rs"]
mod tour_test;

use adm_core::construction::build_tour;
use adm_core::format::{Grid, GridSettings, render_grid};
use adm_core::models::{PointSet, Tour};
use adm_core::utils::{ExerciseResult, InfoLogger, Timer};
use serde::Serialize;
use std::io::Write;

/// Keeps everything produced by a single tour run.
pub struct TourReport {
    /// Points the tour was built over.
    pub points: PointSet,
    /// Points rendered as a grid.
    pub grid: Grid,
    /// Visitation order.
    pub tour: Tour,
    /// Length of the open path defined by the tour.
    pub distance: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    points: &'a PointSet,
    tour: &'a Tour,
    distance: f64,
}

/// Renders points and builds a nearest neighbour tour over them.
pub fn create_tour_report(points: PointSet, settings: &GridSettings, logger: &InfoLogger) -> ExerciseResult<TourReport> {
    let grid = render_grid(&points, settings)?;
    (logger)(format!("grid rendered: {}x{} cells", grid.columns(), grid.rows()).as_str());

    let tour = Timer::measure_duration_with_callback(
        || build_tour(&points),
        |duration| (logger)(format!("tour over {} points built in {}ms", points.len(), duration.as_millis()).as_str()),
    )?;

    let distance = tour.distance(&points);
    (logger)(format!("tour distance: {distance:.3}").as_str());

    Ok(TourReport { points, grid, tour, distance })
}

/// Writes the grid followed by the tour as plain text.
pub fn write_text_report<W: Write + ?Sized>(writer: &mut W, report: &TourReport) -> ExerciseResult<()> {
    writeln!(writer, "{}", report.grid)?;
    writeln!(writer, "{}", report.tour)?;

    Ok(())
}

/// Writes points, tour and its distance as json.
pub fn write_json_report<W: Write + ?Sized>(writer: &mut W, report: &TourReport) -> ExerciseResult<()> {
    let json = JsonReport { points: &report.points, tour: &report.tour, distance: report.distance };

    serde_json::to_writer_pretty(&mut *writer, &json)?;
    writeln!(writer)?;

    Ok(())
}
