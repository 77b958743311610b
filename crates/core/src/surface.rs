//! Sampled height field with its coordinate matrices

use crate::error::{Error, Result};
use crate::geometry::Point3D;
use crate::raster::{GridIndex, Raster};

/// A height field `Z` together with its coordinate matrices `X` and `Y`.
///
/// All three rasters share one shape. `X` varies along columns and `Y`
/// along rows, as produced by [`GridExtent::meshgrid`](crate::GridExtent::meshgrid).
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    x: Raster<f64>,
    y: Raster<f64>,
    z: Raster<f64>,
}

impl Surface {
    /// Bundle coordinate and height rasters, checking that their shapes agree
    pub fn new(x: Raster<f64>, y: Raster<f64>, z: Raster<f64>) -> Result<Self> {
        let (er, ec) = z.shape();
        for other in [&x, &y] {
            let (ar, ac) = other.shape();
            if (ar, ac) != (er, ec) {
                return Err(Error::SizeMismatch { er, ec, ar, ac });
            }
        }
        Ok(Self { x, y, z })
    }

    pub fn x(&self) -> &Raster<f64> {
        &self.x
    }

    pub fn y(&self) -> &Raster<f64> {
        &self.y
    }

    pub fn z(&self) -> &Raster<f64> {
        &self.z
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.z.shape()
    }

    /// The sample at `index` as a 3D point
    pub fn point_at(&self, index: GridIndex) -> Result<Point3D> {
        Ok(Point3D::new(
            self.x.at(index)?,
            self.y.at(index)?,
            self.z.at(index)?,
        ))
    }

    /// The sample closest to `(x, y)` in the coordinate plane.
    ///
    /// Minimises squared Euclidean distance over every sample; on ties the
    /// first sample in row-major order wins. Non-finite coordinates are
    /// rejected.
    pub fn nearest_index(&self, x: f64, y: f64) -> Result<GridIndex> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::invalid_parameter(
                "pick",
                format!("({}, {})", x, y),
                "pick coordinates must be finite",
            ));
        }

        let mut best: Option<(GridIndex, f64)> = None;
        for ((r, c), &sx) in self.x.data().indexed_iter() {
            let sy = self.y.data()[(r, c)];
            let d = (sx - x).powi(2) + (sy - y).powi(2);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((GridIndex::new(r, c), d));
            }
        }

        best.map(|(idx, _)| idx).ok_or(Error::InvalidDimensions {
            width: self.x.cols(),
            height: self.x.rows(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::GridExtent;

    fn ramp_surface() -> Surface {
        let extent = GridExtent::square(-2.0, 2.0, 5).unwrap();
        let (x, y) = extent.meshgrid();
        let z = Raster::from_fn(5, 5, |r, c| (r * 10 + c) as f64);
        Surface::new(x, y, z).unwrap()
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let a = Raster::<f64>::new(3, 3);
        let b = Raster::<f64>::new(3, 4);
        let err = Surface::new(a.clone(), b, a.clone()).unwrap_err();
        assert_eq!(err, Error::SizeMismatch { er: 3, ec: 3, ar: 3, ac: 4 });
    }

    #[test]
    fn test_point_at() {
        let s = ramp_surface();
        let p = s.point_at(GridIndex::new(4, 1)).unwrap();
        assert_eq!(p, Point3D::new(-1.0, 2.0, 41.0));
        assert!(s.point_at(GridIndex::new(5, 0)).is_err());
    }

    #[test]
    fn test_nearest_index() {
        let s = ramp_surface();
        assert_eq!(s.nearest_index(0.9, -1.2).unwrap(), GridIndex::new(1, 3));
        // Outside the domain snaps to the closest corner
        assert_eq!(s.nearest_index(50.0, 50.0).unwrap(), GridIndex::new(4, 4));
    }

    #[test]
    fn test_nearest_index_tie_prefers_first() {
        let s = ramp_surface();
        // Exactly between columns 2 and 3, rows 2 and 3
        assert_eq!(s.nearest_index(0.5, 0.5).unwrap(), GridIndex::new(2, 2));
    }

    #[test]
    fn test_nearest_index_rejects_nan() {
        let s = ramp_surface();
        assert!(s.nearest_index(f64::NAN, 0.0).is_err());
    }
}
