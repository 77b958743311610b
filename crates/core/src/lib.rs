//! # geomap core
//!
//! Core types and traits for the geomap terrain analysis library.
//!
//! This crate provides:
//! - `Raster<T>`: Generic 2D grid type
//! - `Axis` / `GridExtent`: evenly spaced sample coordinates
//! - `Surface`: the X/Y/Z coordinate triple of a height field
//! - `GridIndex`, `Point3D`, `PlaneNormal`: grid and geometry values
//! - Algorithm trait for consistent API

pub mod error;
pub mod geometry;
pub mod raster;
pub mod surface;

pub use error::{Error, Result};
pub use geometry::{PlaneNormal, Point3D};
pub use raster::{Axis, Boundary, GridExtent, GridIndex, Raster, RasterElement};
pub use surface::Surface;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{PlaneNormal, Point3D};
    pub use crate::raster::{Axis, Boundary, GridExtent, GridIndex, Raster, RasterElement};
    pub use crate::surface::Surface;
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in geomap.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
