//! Synthetic terrain generation
//!
//! Samples `z = cos(x / 2) + sin(y / 4)` on an evenly spaced grid and
//! smooths it with a reflective Gaussian. The result is a gentle,
//! deterministic surface with a handful of ridges and valleys, handy for
//! exercising peak detection and flow tracing without external data.

use serde::{Deserialize, Serialize};

use geomap_core::raster::{Boundary, GridExtent, Raster};
use geomap_core::{Algorithm, Error, Result, Surface};

use super::smoothing::{gaussian_smooth, GaussianParams};

/// Parameters for synthetic terrain generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Samples per axis (default 300)
    pub size: usize,
    /// Gaussian smoothing radius in cells (default 3.0)
    pub sigma: f64,
    /// Lower bound of both axes (default -10.0)
    pub min: f64,
    /// Upper bound of both axes (default 10.0)
    pub max: f64,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            size: 300,
            sigma: 3.0,
            min: -10.0,
            max: 10.0,
        }
    }
}

/// Synthetic terrain generator
#[derive(Debug, Clone, Default)]
pub struct SyntheticTerrain;

impl Algorithm for SyntheticTerrain {
    type Input = ();
    type Output = Surface;
    type Params = TerrainParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Synthetic Terrain"
    }

    fn description(&self) -> &'static str {
        "Generate a smoothed sinusoidal height field on a square grid"
    }

    fn execute(&self, _input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        generate_terrain(params)
    }
}

/// Closed-form height before smoothing
#[inline]
pub fn terrain_height(x: f64, y: f64) -> f64 {
    (x / 2.0).cos() + (y / 4.0).sin()
}

/// Generate a synthetic surface.
///
/// `X` and `Y` span `[min, max]` with `size` samples each; `Z` is
/// [`terrain_height`] smoothed with a reflective Gaussian of standard
/// deviation `sigma`.
///
/// # Errors
/// [`Error::InvalidParameter`] if `size < 3`, `sigma` is negative or not
/// finite, or `min >= max`.
pub fn generate_terrain(params: TerrainParams) -> Result<Surface> {
    if params.size < 3 {
        return Err(Error::invalid_parameter(
            "size",
            params.size,
            "need at least 3 samples per axis",
        ));
    }

    let extent = GridExtent::square(params.min, params.max, params.size)?;
    let (x, y) = extent.meshgrid();

    let (rows, cols) = extent.shape();
    let raw = Raster::from_fn(rows, cols, |r, c| {
        terrain_height(x.data()[(r, c)], y.data()[(r, c)])
    });

    let z = gaussian_smooth(
        &raw,
        GaussianParams {
            sigma: params.sigma,
            boundary: Boundary::Reflect,
            ..GaussianParams::default()
        },
    )?;

    Surface::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shapes_agree() {
        for (size, sigma) in [(3, 0.0), (17, 1.0), (64, 3.0)] {
            let s = generate_terrain(TerrainParams {
                size,
                sigma,
                ..TerrainParams::default()
            })
            .unwrap();
            assert_eq!(s.x().shape(), (size, size));
            assert_eq!(s.y().shape(), (size, size));
            assert_eq!(s.z().shape(), (size, size));
        }
    }

    #[test]
    fn test_coordinates_span_domain() {
        let s = generate_terrain(TerrainParams {
            size: 41,
            ..TerrainParams::default()
        })
        .unwrap();
        assert_eq!(s.x().get(0, 0).unwrap(), -10.0);
        assert_eq!(s.x().get(0, 40).unwrap(), 10.0);
        assert_eq!(s.y().get(40, 0).unwrap(), 10.0);
        assert_relative_eq!(s.x().get(7, 20).unwrap(), 0.0, epsilon = 1e-12);

        // X strictly increasing along columns, Y along rows
        for i in 1..41 {
            assert!(s.x().get(3, i).unwrap() > s.x().get(3, i - 1).unwrap());
            assert!(s.y().get(i, 3).unwrap() > s.y().get(i - 1, 3).unwrap());
        }
    }

    #[test]
    fn test_unsmoothed_matches_formula() {
        let s = generate_terrain(TerrainParams {
            size: 21,
            sigma: 0.0,
            ..TerrainParams::default()
        })
        .unwrap();
        // x = -10 + 13 = 3, y = -10 + 5 = -5
        assert_relative_eq!(
            s.z().get(5, 13).unwrap(),
            terrain_height(3.0, -5.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_deterministic() {
        let params = TerrainParams {
            size: 50,
            sigma: 2.0,
            ..TerrainParams::default()
        };
        assert_eq!(generate_terrain(params).unwrap(), generate_terrain(params).unwrap());
    }

    #[test]
    fn test_smoothing_reduces_range() {
        let raw = generate_terrain(TerrainParams {
            size: 60,
            sigma: 0.0,
            ..TerrainParams::default()
        })
        .unwrap();
        let smooth = generate_terrain(TerrainParams {
            size: 60,
            sigma: 4.0,
            ..TerrainParams::default()
        })
        .unwrap();
        let r = raw.z().statistics();
        let s = smooth.z().statistics();
        assert!(s.max.unwrap() <= r.max.unwrap());
        assert!(s.min.unwrap() >= r.min.unwrap());
    }

    #[test]
    fn test_rejects_invalid_params() {
        let bad = [
            TerrainParams { size: 2, ..TerrainParams::default() },
            TerrainParams { sigma: -0.5, ..TerrainParams::default() },
            TerrainParams { min: 5.0, max: 5.0, ..TerrainParams::default() },
        ];
        for params in bad {
            assert!(matches!(
                generate_terrain(params),
                Err(Error::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_algorithm_trait() {
        let algo = SyntheticTerrain;
        assert_eq!(algo.name(), "Synthetic Terrain");
        let s = algo
            .execute((), TerrainParams { size: 10, ..TerrainParams::default() })
            .unwrap();
        assert_eq!(s.shape(), (10, 10));
    }
}
