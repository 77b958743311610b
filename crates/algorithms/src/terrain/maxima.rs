//! Local maxima (peak) detection
//!
//! A cell is a peak when no cell of its 3×3 neighborhood exceeds it by more
//! than a small tolerance. Border cells are compared against the in-bounds
//! part of their neighborhood only. Flat tops report every cell of the
//! plateau, so callers should treat the result as a set.

use serde::{Deserialize, Serialize};

use geomap_core::raster::{Boundary, GridIndex, Neighborhood, NeighborhoodIterator, Raster};
use geomap_core::{Algorithm, Error, Result};

use crate::morphology::{dilate, DilateParams};

/// Parameters for local maxima detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaximaParams {
    /// Tolerance absorbing floating-point noise (default 1e-12)
    pub epsilon: f64,
}

impl Default for MaximaParams {
    fn default() -> Self {
        Self { epsilon: 1e-12 }
    }
}

/// Local maxima detector
#[derive(Debug, Clone, Default)]
pub struct LocalMaxima;

impl Algorithm for LocalMaxima {
    type Input = Raster<f64>;
    type Output = Vec<GridIndex>;
    type Params = MaximaParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Local Maxima"
    }

    fn description(&self) -> &'static str {
        "Find cells not exceeded by any 3x3 neighbor (within tolerance)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        local_maxima(&input, params)
    }
}

/// Find local maxima of a height field.
///
/// Returns every cell with `z >= max(3×3 neighborhood) - epsilon`, in
/// row-major order. NaN cells are never reported.
///
/// # Errors
/// [`Error::InvalidParameter`] if `epsilon` is negative or not finite.
pub fn local_maxima(z: &Raster<f64>, params: MaximaParams) -> Result<Vec<GridIndex>> {
    validate_epsilon(params.epsilon)?;

    let neighborhood_max = dilate(
        z,
        DilateParams {
            radius: 1,
            boundary: Boundary::Nearest,
        },
    )?;

    let peaks = z
        .data()
        .indexed_iter()
        .zip(neighborhood_max.data().iter())
        .filter(|&((_, &v), &m)| !v.is_nan() && v >= m - params.epsilon)
        .map(|(((r, c), _), _)| GridIndex::new(r, c))
        .collect();

    Ok(peaks)
}

/// Check a single cell against its clamped 3×3 neighborhood
pub fn is_local_maximum(z: &Raster<f64>, index: GridIndex, epsilon: f64) -> Result<bool> {
    validate_epsilon(epsilon)?;
    let center = z.at(index)?;
    if center.is_nan() {
        return Ok(false);
    }

    let ok = NeighborhoodIterator::new(z, index, Neighborhood::Queen3x3, Boundary::Nearest)
        .all(|(_, v)| v.is_nan() || center >= v - epsilon);
    Ok(ok)
}

fn validate_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(Error::invalid_parameter(
            "epsilon",
            epsilon,
            "tolerance must be finite and >= 0",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// 5x5 pyramid peaking at (2, 2)
    fn pyramid() -> Raster<f64> {
        Raster::from_fn(5, 5, |r, c| {
            let d = (r as isize - 2).abs().max((c as isize - 2).abs());
            10.0 - d as f64
        })
    }

    #[test]
    fn test_single_peak() {
        let peaks = local_maxima(&pyramid(), MaximaParams::default()).unwrap();
        assert_eq!(peaks, vec![GridIndex::new(2, 2)]);
    }

    #[test]
    fn test_monotonic_ramp_peaks_at_corner_only() {
        // Strictly increasing toward (4, 4): the clamped corner is the only maximum
        let z = Raster::from_fn(5, 5, |r, c| (r + 2 * c) as f64);
        let peaks = local_maxima(&z, MaximaParams::default()).unwrap();
        assert_eq!(peaks, vec![GridIndex::new(4, 4)]);
    }

    #[test]
    fn test_plateau_reports_all_cells() {
        // Dome rising toward the centre, capped by a flat 2x2 top
        let mut z = Raster::from_fn(6, 6, |r, c| {
            -((r as f64 - 2.5).powi(2) + (c as f64 - 2.5).powi(2))
        });
        for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            z.set(r, c, 5.0).unwrap();
        }
        let peaks: BTreeSet<_> = local_maxima(&z, MaximaParams::default())
            .unwrap()
            .into_iter()
            .collect();
        let expected: BTreeSet<_> = [(2, 2), (2, 3), (3, 2), (3, 3)]
            .into_iter()
            .map(GridIndex::from)
            .collect();
        assert_eq!(peaks, expected);
    }

    #[test]
    fn test_tolerance_absorbs_noise() {
        let mut z = pyramid();
        z.set(2, 3, 10.0 - 1e-14).unwrap();
        let with_tol = local_maxima(&z, MaximaParams::default()).unwrap();
        assert!(with_tol.contains(&GridIndex::new(2, 3)));

        let exact = local_maxima(&z, MaximaParams { epsilon: 0.0 }).unwrap();
        assert_eq!(exact, vec![GridIndex::new(2, 2)]);
    }

    #[test]
    fn test_matches_pointwise_check() {
        let z = Raster::from_fn(9, 11, |r, c| ((r as f64) * 0.7).sin() + ((c as f64) * 0.5).cos());
        let peaks = local_maxima(&z, MaximaParams::default()).unwrap();
        for r in 0..9 {
            for c in 0..11 {
                let idx = GridIndex::new(r, c);
                assert_eq!(
                    is_local_maximum(&z, idx, 1e-12).unwrap(),
                    peaks.contains(&idx),
                    "disagreement at {}",
                    idx
                );
            }
        }
    }

    #[test]
    fn test_rejects_bad_epsilon() {
        assert!(local_maxima(&pyramid(), MaximaParams { epsilon: -1.0 }).is_err());
        assert!(is_local_maximum(&pyramid(), GridIndex::new(0, 0), f64::NAN).is_err());
    }
}
