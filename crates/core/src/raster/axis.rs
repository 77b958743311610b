//! Evenly spaced sample axes and the rectangular extent they span

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Evenly spaced sample positions from `start` to `stop`, both included.
///
/// Sample `i` sits at `start + i * step` with `step = (stop - start) / (samples - 1)`;
/// the last sample is exactly `stop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// First sample position
    pub start: f64,
    /// Last sample position
    pub stop: f64,
    /// Number of samples
    pub samples: usize,
}

impl Axis {
    /// Create an axis, rejecting fewer than two samples and
    /// empty, reversed or non-finite spans
    pub fn new(start: f64, stop: f64, samples: usize) -> Result<Self> {
        if samples < 2 {
            return Err(Error::invalid_parameter(
                "samples",
                samples,
                "an axis needs at least 2 samples",
            ));
        }
        if !start.is_finite() || !stop.is_finite() || stop <= start {
            return Err(Error::invalid_parameter(
                "extent",
                format!("[{}, {}]", start, stop),
                "axis bounds must be finite with start < stop",
            ));
        }
        Ok(Self {
            start,
            stop,
            samples,
        })
    }

    /// Distance between consecutive samples
    pub fn step(&self) -> f64 {
        (self.stop - self.start) / (self.samples - 1) as f64
    }

    /// Position of sample `i`
    pub fn value(&self, i: usize) -> f64 {
        if i + 1 == self.samples {
            self.stop
        } else {
            self.start + i as f64 * self.step()
        }
    }

    /// All sample positions
    pub fn values(&self) -> Vec<f64> {
        (0..self.samples).map(|i| self.value(i)).collect()
    }
}

/// Rectangular sampling domain: `x` runs along columns, `y` along rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridExtent {
    pub x: Axis,
    pub y: Axis,
}

impl GridExtent {
    /// Square extent `[min, max]` on both axes with `n` samples each
    pub fn square(min: f64, max: f64, n: usize) -> Result<Self> {
        let axis = Axis::new(min, max, n)?;
        Ok(Self { x: axis, y: axis })
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.y.samples, self.x.samples)
    }

    /// Coordinate matrices: `X[r, c] = x[c]`, `Y[r, c] = y[r]`
    pub fn meshgrid(&self) -> (Raster<f64>, Raster<f64>) {
        let xs = self.x.values();
        let ys = self.y.values();
        let (rows, cols) = self.shape();

        let x = Raster::from_fn(rows, cols, |_, c| xs[c]);
        let y = Raster::from_fn(rows, cols, |r, _| ys[r]);
        (x, y)
    }
}
