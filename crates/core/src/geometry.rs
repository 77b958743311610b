//! 3D points and plane normals in grid coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

use crate::error::{Error, Result};

/// A point `(x, y, z)` in the grid's coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean length
    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    fn sub(self, rhs: Self) -> Self::Output {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Unit normal of a plane.
///
/// The sign is whatever the construction produced; for a plane through
/// three points that is the right-hand normal of the point order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneNormal {
    nx: f64,
    ny: f64,
    nz: f64,
}

impl PlaneNormal {
    /// Normalize `v` to unit length.
    ///
    /// Fails with [`Error::CollinearPoints`] when `v` has exactly zero length,
    /// which is the degenerate cross product of three collinear points.
    pub fn from_vector(v: Point3D) -> Result<Self> {
        let len = v.norm();
        if len == 0.0 {
            return Err(Error::CollinearPoints);
        }
        Ok(Self {
            nx: v.x / len,
            ny: v.y / len,
            nz: v.z / len,
        })
    }

    pub fn nx(&self) -> f64 {
        self.nx
    }

    pub fn ny(&self) -> f64 {
        self.ny
    }

    pub fn nz(&self) -> f64 {
        self.nz
    }

    /// Components as `[nx, ny, nz]`
    pub fn components(&self) -> [f64; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// The same plane's normal pointing the opposite way
    pub fn flipped(&self) -> Self {
        Self {
            nx: -self.nx,
            ny: -self.ny,
            nz: -self.nz,
        }
    }

    /// The normal with a non-negative vertical component.
    ///
    /// Strike derived from this is independent of the order the three
    /// points were given in.
    pub fn facing_up(&self) -> Self {
        if self.nz < 0.0 {
            self.flipped()
        } else {
            *self
        }
    }
}
