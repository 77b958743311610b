//! Raster data structures and operations

mod axis;
mod element;
mod grid;
mod index;
mod neighborhood;

pub use axis::{Axis, GridExtent};
pub use element::RasterElement;
pub use grid::{Raster, RasterStatistics};
pub use index::GridIndex;
pub use neighborhood::{Boundary, Neighborhood, NeighborhoodIterator};
