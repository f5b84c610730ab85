//! Affine transforms on control points.
//!
//! Transforms act on a primitive's control points, not on its pixels.
//! Rotation and scaling work on pivot-relative offsets in `f64` and round the
//! transformed offset (ties to even) before translating back, so a point on
//! the pivot never moves.

use crate::error::{Error, Result};
use crate::geometry::{round_half_even, Point};

/// Rotation angle with an explicit unit.
///
/// Positive angles turn clockwise on a y-down pixel grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    /// Angle in degrees.
    Degrees(f64),
    /// Angle in radians.
    Radians(f64),
}

impl Angle {
    /// The angle in radians.
    #[must_use]
    pub fn radians(self) -> f64 {
        match self {
            Self::Degrees(d) => d.to_radians(),
            Self::Radians(r) => r,
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::Degrees(0.0)
    }
}

/// Translate every point by `(dx, dy)`.
#[must_use]
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    points.iter().map(|p| p.offset(dx, dy)).collect()
}

/// Rotate every point about `pivot`.
#[must_use]
pub fn rotate(points: &[Point], pivot: Point, angle: Angle) -> Vec<Point> {
    let (sin, cos) = angle.radians().sin_cos();
    points
        .iter()
        .map(|p| {
            let x = f64::from(p.x - pivot.x);
            let y = f64::from(p.y - pivot.y);
            pivot.offset(
                round_half_even(x * cos - y * sin),
                round_half_even(x * sin + y * cos),
            )
        })
        .collect()
}

/// Scale every point's offset from `pivot` by `factor`.
///
/// # Errors
///
/// Returns [`Error::InvalidScaleFactor`] if `factor` is not finite and
/// strictly positive.
pub fn scale(points: &[Point], pivot: Point, factor: f64) -> Result<Vec<Point>> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(Error::InvalidScaleFactor(factor));
    }
    Ok(points
        .iter()
        .map(|p| {
            pivot.offset(
                round_half_even(f64::from(p.x - pivot.x) * factor),
                round_half_even(f64::from(p.y - pivot.y) * factor),
            )
        })
        .collect())
}
