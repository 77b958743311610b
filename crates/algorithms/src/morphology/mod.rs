//! Mathematical morphology algorithms for raster processing
//!
//! - **Dilation**: maximum filter over a square window

mod dilate;

pub use dilate::{dilate, Dilate, DilateParams};
