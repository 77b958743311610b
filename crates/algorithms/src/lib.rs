//! # geomap algorithms
//!
//! Terrain analysis on a synthetic height field.
//!
//! ## Algorithm Categories
//!
//! - **terrain**: synthetic surface generation, Gaussian smoothing, local maxima
//! - **morphology**: dilation (maximum filter)
//! - **hydrology**: steepest-descent river tracing
//! - **geology**: strike and dip of a plane through three points
//! - **analysis**: the end-to-end run and the three-point pick session

pub mod analysis;
pub mod geology;
pub mod hydrology;
mod maybe_rayon;
pub mod morphology;
pub mod terrain;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analysis::{run_analysis, AnalysisParams, AnalysisResult, PickOutcome, PickSession};
    pub use crate::geology::{plane_from_points, strike_dip, strike_dip_from_normal, StrikeDip};
    pub use crate::hydrology::{trace_river, trace_rivers, Path, River, RiverParams};
    pub use crate::terrain::{
        gaussian_smooth, generate_terrain, local_maxima, GaussianParams, MaximaParams, TerrainParams,
    };
    pub use geomap_core::prelude::*;
}
