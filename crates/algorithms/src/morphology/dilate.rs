//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum value of the square window around
//! it. Enlarges bright regions and shrinks dark regions.

use crate::maybe_rayon::*;
use geomap_core::raster::{Boundary, Neighborhood, Raster};
use geomap_core::{Algorithm, Error, Result};

/// Parameters for morphological dilation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DilateParams {
    /// Half-width of the square window (default 1, a 3x3 window)
    pub radius: usize,
    /// How the element reads past the raster edge
    pub boundary: Boundary,
}

impl Default for DilateParams {
    fn default() -> Self {
        Self {
            radius: 1,
            boundary: Boundary::Nearest,
        }
    }
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Raster<f64>;
    type Output = Raster<f64>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over a square window)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, params)
    }
}

/// Perform morphological dilation on a raster
///
/// Each output pixel is the maximum value within the `(2 * radius + 1)`-wide
/// square around it. Positions past the edge are resolved through
/// `params.boundary`; with [`Boundary::Nearest`] a border cell is compared
/// against the in-bounds part of its neighborhood only. NaN cells never
/// win the comparison.
pub fn dilate(raster: &Raster<f64>, params: DilateParams) -> Result<Raster<f64>> {
    if params.radius == 0 {
        return Err(Error::invalid_parameter(
            "radius",
            0,
            "window radius must be at least 1",
        ));
    }

    let (rows, cols) = raster.shape();
    let data = raster.data();
    let offsets = Neighborhood::Square(params.radius).offsets();
    let boundary = params.boundary;

    let output_data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];

            for (col, out) in row_data.iter_mut().enumerate() {
                let mut max_val = f64::NEG_INFINITY;
                let mut seen = false;

                for &(dr, dc) in &offsets {
                    let nr = boundary.resolve(row as isize + dr, rows);
                    let nc = boundary.resolve(col as isize + dc, cols);
                    let v = data[(nr, nc)];
                    if v.is_nan() {
                        continue;
                    }
                    seen = true;
                    if v > max_val {
                        max_val = v;
                    }
                }

                if seen {
                    *out = max_val;
                }
            }

            row_data
        })
        .collect();

    Raster::from_vec(output_data, rows, cols)
}
