//! Three-point pick accumulation for strike/dip measurement

use tracing::debug;

use geomap_core::raster::GridIndex;
use geomap_core::{Point3D, Result, Surface};

use crate::geology::{strike_dip, StrikeDip};

/// Number of points that define a plane
pub const POINTS_PER_PLANE: usize = 3;

/// What a single pick produced
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// Point stored; `count` points are now waiting
    Pending { point: Point3D, count: usize },
    /// Third point stored: the orientation was computed and the session reset
    Complete {
        point: Point3D,
        orientation: Result<StrikeDip>,
    },
}

impl PickOutcome {
    /// The point this pick added
    pub fn point(&self) -> Point3D {
        match self {
            PickOutcome::Pending { point, .. } | PickOutcome::Complete { point, .. } => *point,
        }
    }
}

/// Accumulates picked points until three are available.
///
/// The third point triggers one strike/dip computation and empties the
/// session, whether or not the points were usable.
#[derive(Debug, Clone, Default)]
pub struct PickSession {
    points: Vec<Point3D>,
}

impl PickSession {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(POINTS_PER_PLANE),
        }
    }

    /// Points picked since the last reset
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop any partially accumulated points
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Snap `(x, y)` to the nearest sample of `surface` and add that point.
    ///
    /// # Errors
    /// Non-finite coordinates are rejected before the session is touched.
    pub fn pick(&mut self, surface: &Surface, x: f64, y: f64) -> Result<PickOutcome> {
        let index: GridIndex = surface.nearest_index(x, y)?;
        let point = surface.point_at(index)?;
        debug!(x, y, cell = %index, "pick snapped to grid");
        Ok(self.push(point))
    }

    /// Add a point directly
    pub fn push(&mut self, point: Point3D) -> PickOutcome {
        self.points.push(point);
        if self.points.len() < POINTS_PER_PLANE {
            return PickOutcome::Pending {
                point,
                count: self.points.len(),
            };
        }

        let picked = std::mem::take(&mut self.points);
        let orientation = strike_dip(picked[0], picked[1], picked[2]);
        match &orientation {
            Ok(sd) => debug!(strike = sd.strike, dip = sd.dip, "plane measured"),
            Err(e) => debug!(error = %e, "plane rejected"),
        }
        PickOutcome::Complete { point, orientation }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geomap_core::raster::{GridExtent, Raster};
    use geomap_core::Error;

    /// Tilted plane z = 0.5 * x on a 5x5 grid over [-2, 2]
    fn inclined() -> Surface {
        let (x, y) = GridExtent::square(-2.0, 2.0, 5).unwrap().meshgrid();
        let z = Raster::from_fn(5, 5, |_, c| 0.5 * (c as f64 - 2.0));
        Surface::new(x, y, z).unwrap()
    }

    #[test]
    fn test_third_pick_completes_and_resets() {
        let surface = inclined();
        let mut session = PickSession::new();

        let first = session.pick(&surface, -1.9, -2.1).unwrap();
        assert_eq!(first, PickOutcome::Pending { point: Point3D::new(-2.0, -2.0, -1.0), count: 1 });
        assert!(matches!(session.pick(&surface, 2.0, -2.0).unwrap(), PickOutcome::Pending { count: 2, .. }));

        match session.pick(&surface, -2.0, 2.0).unwrap() {
            PickOutcome::Complete { orientation, .. } => {
                let sd = orientation.unwrap();
                assert_abs_diff_eq!(sd.dip, 0.5f64.atan().to_degrees(), epsilon = 1e-10);
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert!(session.is_empty());
    }

    #[test]
    fn test_collinear_still_resets() {
        let mut session = PickSession::new();
        session.push(Point3D::new(0.0, 0.0, 0.0));
        session.push(Point3D::new(1.0, 0.0, 0.0));
        let outcome = session.push(Point3D::new(2.0, 0.0, 0.0));

        match outcome {
            PickOutcome::Complete { orientation, point } => {
                assert_eq!(orientation, Err(Error::CollinearPoints));
                assert_eq!(point, Point3D::new(2.0, 0.0, 0.0));
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_eq!(session.len(), 0);

        // The next triple starts fresh
        session.push(Point3D::new(0.0, 0.0, 0.0));
        session.push(Point3D::new(1.0, 0.0, 0.0));
        let retry = session.push(Point3D::new(0.0, 1.0, 0.0));
        assert!(matches!(retry, PickOutcome::Complete { orientation: Ok(_), .. }));
    }

    #[test]
    fn test_repeated_pick_of_same_cell_is_collinear() {
        let surface = inclined();
        let mut session = PickSession::new();
        session.pick(&surface, 0.1, 0.1).unwrap();
        session.pick(&surface, -0.1, 0.2).unwrap();
        let outcome = session.pick(&surface, 1.0, 1.0).unwrap();
        assert!(matches!(
            outcome,
            PickOutcome::Complete { orientation: Err(Error::CollinearPoints), .. }
        ));
    }

    #[test]
    fn test_invalid_pick_leaves_session_untouched() {
        let surface = inclined();
        let mut session = PickSession::new();
        session.pick(&surface, 0.0, 0.0).unwrap();
        assert!(session.pick(&surface, f64::NAN, 0.0).is_err());
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_explicit_reset() {
        let mut session = PickSession::new();
        session.push(Point3D::new(1.0, 2.0, 3.0));
        session.push(Point3D::new(4.0, 5.0, 6.0));
        session.reset();
        assert!(session.is_empty());
        assert!(matches!(session.push(Point3D::default()), PickOutcome::Pending { count: 1, .. }));
    }
}
