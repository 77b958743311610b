//! Structural geology measurements
//!
//! - Plane orientation: strike and dip of the plane through three points

mod orientation;

pub use orientation::{
    normalize_bearing, plane_from_points, strike_dip, strike_dip_from_normal, PlaneOrientation,
    StrikeDip,
};
