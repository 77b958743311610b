//! Terrain analysis algorithms
//!
//! - Synthetic terrain: sinusoidal height field on a square grid
//! - Smoothing: separable Gaussian with reflective or clamped edges
//! - Maxima: 3×3 local peaks with a noise tolerance

mod maxima;
mod smoothing;
mod synthetic;

pub use maxima::{is_local_maximum, local_maxima, LocalMaxima, MaximaParams};
pub use smoothing::{gaussian_smooth, GaussianParams, GaussianSmooth};
pub use synthetic::{generate_terrain, terrain_height, SyntheticTerrain, TerrainParams};
