//! Error types for trueno-raster operations.
//!
//! Only caller contract violations are errors. Geometry that simply has
//! nothing to draw (degenerate clip window, too few B-spline control points)
//! produces an empty or sentinel result instead.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Algorithm tag that does not name a member of the algorithm family.
    #[error("Unknown {family} algorithm: {tag:?}")]
    UnknownAlgorithm {
        /// Algorithm family (line, curve, clip).
        family: &'static str,
        /// The rejected tag.
        tag: String,
    },

    /// Scale factor that is not a finite positive number.
    #[error("Invalid scale factor: {0} (must be finite and > 0)")]
    InvalidScaleFactor(f64),

    /// Curve sampling step outside the open interval (0, 1).
    #[error("Invalid curve step: {0} (must be in (0, 1))")]
    InvalidCurveStep(f64),

    /// Transform that is not defined for the primitive kind.
    #[error("Cannot {operation} a {kind} primitive")]
    UnsupportedTransform {
        /// Primitive kind name.
        kind: &'static str,
        /// Operation name.
        operation: &'static str,
    },

    /// Primitive built from the wrong number of control points.
    #[error("A {kind} primitive needs {expected} control points, got {actual}")]
    PointCount {
        /// Primitive kind name.
        kind: &'static str,
        /// Human-readable requirement, e.g. "2" or "at least 1".
        expected: &'static str,
        /// Number of points supplied.
        actual: usize,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_unknown_algorithm_names_tag() {
        let err = Error::UnknownAlgorithm {
            family: "line",
            tag: "Wu".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown line algorithm: \"Wu\"");
    }

    #[test]
    fn test_point_count() {
        let err = Error::PointCount {
            kind: "line",
            expected: "2",
            actual: 3,
        };
        assert!(err.to_string().contains("needs 2"));
        assert!(err.to_string().contains("got 3"));
    }
}
