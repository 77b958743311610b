//! Steepest-descent river tracing
//!
//! Follows water downhill from a start cell by repeatedly moving to the
//! lowest cell of the 3×3 window around the current position:
//!
//! ```text
//!   0  1  2
//!   3  4  5      scan order; the first minimum wins on ties,
//!   6  7  8      4 is the current cell
//! ```
//!
//! Tracing stops when the current cell touches the grid border, when no
//! cell of the window is strictly lower than the current one, or after
//! `step_limit` moves. Every move is a strict drop, so a path never
//! revisits a cell.

use serde::{Deserialize, Serialize};

use crate::maybe_rayon::*;
use geomap_core::raster::{GridIndex, Neighborhood, Raster};
use geomap_core::{Algorithm, Error, Result};

/// Parameters for river tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiverParams {
    /// Maximum number of moves (default 2000)
    pub step_limit: usize,
}

impl Default for RiverParams {
    fn default() -> Self {
        Self { step_limit: 2000 }
    }
}

/// An ordered downhill path. Never empty; the first cell is the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    cells: Vec<GridIndex>,
}

impl Path {
    fn starting_at(start: GridIndex) -> Self {
        Self { cells: vec![start] }
    }

    pub fn start(&self) -> GridIndex {
        self.cells[0]
    }

    pub fn end(&self) -> GridIndex {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, including the start
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A path always holds its start cell, so this is false
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the path moved at all
    pub fn has_flow(&self) -> bool {
        self.cells.len() > 1
    }

    pub fn cells(&self) -> &[GridIndex] {
        &self.cells
    }

    /// Height lost between start and end
    pub fn drop_along(&self, z: &Raster<f64>) -> Result<f64> {
        Ok(z.at(self.start())? - z.at(self.end())?)
    }
}

/// River tracing algorithm
#[derive(Debug, Clone, Default)]
pub struct RiverTracer;

impl Algorithm for RiverTracer {
    type Input = (Raster<f64>, GridIndex);
    type Output = Path;
    type Params = RiverParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "River Tracer"
    }

    fn description(&self) -> &'static str {
        "Trace a steepest-descent flow path from a start cell"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (z, start) = input;
        trace_river(&z, start, params)
    }
}

/// Trace a river downhill from `start`.
///
/// The returned path holds at most `step_limit + 1` cells and heights
/// strictly decrease along it. A start on the border, or at the minimum of
/// its own window, yields a single-cell path.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if `start` lies outside `z`.
pub fn trace_river(z: &Raster<f64>, start: GridIndex, params: RiverParams) -> Result<Path> {
    z.check_index(start)?;

    let window = Neighborhood::Queen3x3.offsets();
    let data = z.data();
    let mut path = Path::starting_at(start);

    for _ in 0..params.step_limit {
        let current = path.end();
        if z.is_border(current) {
            break;
        }

        // Interior cell: every window offset is in bounds
        let mut best = current;
        let mut best_val = f64::INFINITY;
        for (i, &(dr, dc)) in window.iter().enumerate() {
            let r = (current.row as isize + dr) as usize;
            let c = (current.col as isize + dc) as usize;
            let v = data[(r, c)];
            if i == 0 || v < best_val {
                best = GridIndex::new(r, c);
                best_val = v;
            }
        }

        let descends = best_val < data[(current.row, current.col)];
        if !descends {
            break;
        }
        path.cells.push(best);
    }

    Ok(path)
}

/// A detected peak and the river traced from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct River {
    pub peak: GridIndex,
    pub path: Path,
}

/// Trace one river per start cell, in the order given
pub fn trace_rivers(z: &Raster<f64>, peaks: &[GridIndex], params: RiverParams) -> Result<Vec<River>> {
    peaks
        .into_par_iter()
        .map(|&peak| trace_river(z, peak, params).map(|path| River { peak, path }))
        .collect()
}
