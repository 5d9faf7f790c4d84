#[cfg(test)]
#[path = "../../tests/unit/format/grid_test.rs"]
mod grid_test;

use crate::models::PointSet;
use crate::utils::{ExerciseError, ExerciseResult};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// Limits amount of cells in a rendered grid.
const MAX_GRID_CELLS: usize = 1_000_000;

/// Specifies how a point set is rendered as a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSettings {
    /// A glyph used for cells without a point.
    pub placeholder: char,
    /// Whether the origin `(0, 0)` is always included in the bounding box. Enabled by default, so
    /// non-negative points are drawn from the origin.
    pub anchor_origin: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { placeholder: '·', anchor_origin: true }
    }
}

impl GridSettings {
    /// Sets a glyph for empty cells.
    pub fn with_placeholder(mut self, placeholder: Option<char>) -> Self {
        if let Some(placeholder) = placeholder {
            self.placeholder = placeholder;
        }
        self
    }

    /// Sets whether the origin is included into the bounding box.
    pub fn with_anchor_origin(mut self, anchor_origin: bool) -> Self {
        self.anchor_origin = anchor_origin;
        self
    }
}

/// A rectangular grid of cells where every cell contains either a point label or a placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    origin: (i64, i64),
    columns: usize,
    rows: usize,
    cells: Vec<String>,
}

impl Grid {
    /// Returns coordinates of the top left cell.
    pub fn origin(&self) -> (i64, i64) {
        self.origin
    }

    /// Returns amount of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns amount of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns content of the cell at given column and row counted from the origin.
    pub fn cell(&self, column: usize, row: usize) -> Option<&str> {
        if column < self.columns && row < self.rows {
            self.cells.get(row * self.columns + column).map(|cell| cell.as_str())
        } else {
            None
        }
    }
}

/// Every cell is padded with spaces to the widest label, so columns stay aligned when labels have
/// more than one character.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let width = self.cells.iter().map(|cell| cell.chars().count()).max().unwrap_or(1);

        self.cells.chunks(self.columns).try_for_each(|row| {
            row.iter().try_for_each(|cell| write!(f, "{cell:<width$}"))?;
            writeln!(f)
        })
    }
}

struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

/// Renders points as a grid of `extent_x + 2` columns and `extent_y + 2` rows, where extent is the
/// truncated difference between the largest and the smallest coordinate on the axis. The top left
/// cell corresponds to the floored smallest coordinates, so negative coordinates are supported.
/// With `anchor_origin` the origin joins the bounding box, so the grid starts at `(0, 0)` unless
/// some point lies further left or up.
///
/// A cell shows the label of a point which lies in it. When several points share a cell, the
/// smallest label wins. An empty point set is rendered as a 2x2 grid at the origin.
pub fn render_grid(points: &PointSet, settings: &GridSettings) -> ExerciseResult<Grid> {
    let bounds = points
        .iter()
        .map(|(_, point)| (point.x(), point.y()))
        .chain(settings.anchor_origin.then_some((0., 0.)))
        .fold(None, |bounds: Option<Bounds>, (x, y)| {
            Some(match bounds {
                Some(bounds) => Bounds {
                    min_x: bounds.min_x.min(x),
                    min_y: bounds.min_y.min(y),
                    max_x: bounds.max_x.max(x),
                    max_y: bounds.max_y.max(y),
                },
                None => Bounds { min_x: x, min_y: y, max_x: x, max_y: y },
            })
        })
        .unwrap_or(Bounds { min_x: 0., min_y: 0., max_x: 0., max_y: 0. });

    let columns = ((bounds.max_x - bounds.min_x) as usize).saturating_add(2);
    let rows = ((bounds.max_y - bounds.min_y) as usize).saturating_add(2);

    if columns.saturating_mul(rows) > MAX_GRID_CELLS {
        return Err(ExerciseError::invalid_input(format!(
            "grid of {columns}x{rows} cells exceeds the limit of {MAX_GRID_CELLS} cells"
        )));
    }

    let origin = (bounds.min_x.floor() as i64, bounds.min_y.floor() as i64);

    let mut labels = FxHashMap::default();
    points.iter().for_each(|(label, point)| {
        labels.entry(point.cell()).or_insert(label);
    });

    let placeholder = settings.placeholder.to_string();
    let cells = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (origin.0 + column as i64, origin.1 + row as i64)))
        .map(|cell| labels.get(&cell).map_or_else(|| placeholder.clone(), |label| label.to_string()))
        .collect();

    Ok(Grid { origin, columns, rows, cells })
}
