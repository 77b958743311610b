//! Strike and dip of a plane through three points
//!
//! The plane normal is the right-hand cross product of the two edges
//! leaving the first point, `(p2 - p1) × (p3 - p1)`. Dip is measured from
//! the absolute vertical component, so it does not depend on which way the
//! normal points. Strike does: it is the azimuth of the normal's horizontal
//! projection rotated by -90°, and reversing the point order turns it by
//! 180°. Use [`PlaneNormal::facing_up`] first for an order-independent
//! strike.
//!
//! Angles are in degrees; azimuths follow `atan2(y, x)` in grid coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

use geomap_core::{Algorithm, Error, PlaneNormal, Point3D, Result};

/// Plane orientation in degrees: strike in `[0, 360)`, dip in `[0, 90]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeDip {
    pub strike: f64,
    pub dip: f64,
}

impl StrikeDip {
    /// Display text shown before any orientation is available
    pub const PLACEHOLDER: &'static str = "Strike: —\nDip: —";
}

impl fmt::Display for StrikeDip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strike: {:.2}°\nDip: {:.2}°", self.strike, self.dip)
    }
}

/// Plane orientation algorithm
#[derive(Debug, Clone, Default)]
pub struct PlaneOrientation;

impl Algorithm for PlaneOrientation {
    type Input = [Point3D; 3];
    type Output = StrikeDip;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Plane Orientation"
    }

    fn description(&self) -> &'static str {
        "Strike and dip of the plane through three points"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let [p1, p2, p3] = input;
        strike_dip(p1, p2, p3)
    }
}

/// Unit normal of the plane through three points.
///
/// # Errors
/// [`Error::CollinearPoints`] when `(p2 - p1) × (p3 - p1)` has exactly zero
/// length.
pub fn plane_from_points(p1: Point3D, p2: Point3D, p3: Point3D) -> Result<PlaneNormal> {
    let v1 = p2 - p1;
    let v2 = p3 - p1;
    PlaneNormal::from_vector(v1.cross(v2))
}

/// Strike and dip of the plane with the given normal
pub fn strike_dip_from_normal(normal: &PlaneNormal) -> StrikeDip {
    let [nx, ny, nz] = normal.components();

    let dip = (nx * nx + ny * ny).sqrt().atan2(nz.abs()).to_degrees();
    let strike = normalize_bearing(ny.atan2(nx).to_degrees() - 90.0);

    StrikeDip { strike, dip }
}

/// Strike and dip of the plane through three points
pub fn strike_dip(p1: Point3D, p2: Point3D, p3: Point3D) -> Result<StrikeDip> {
    let normal = plane_from_points(p1, p2, p3)?;
    Ok(strike_dip_from_normal(&normal))
}

/// Wrap an angle in degrees into `[0, 360)`.
///
/// Tiny negative inputs would round up to exactly 360; they fold to 0.
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
