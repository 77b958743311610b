//! Error types for geomap

use thiserror::Error;

/// Main error type for geomap operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Points are collinear; cannot define a plane")]
    CollinearPoints,

    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Index out of bounds: ({row}, {col}) in raster of size ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Raster size mismatch: expected ({er}, {ec}), got ({ar}, {ac})")]
    SizeMismatch { er: usize, ec: usize, ar: usize, ac: usize },

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`]
    pub fn invalid_parameter(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for geomap operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collinear_message() {
        assert_eq!(
            Error::CollinearPoints.to_string(),
            "Points are collinear; cannot define a plane"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let e = Error::invalid_parameter("size", 2, "need at least 3 samples per axis");
        assert_eq!(
            e.to_string(),
            "Invalid parameter: size = 2 (need at least 3 samples per axis)"
        );
    }
}
