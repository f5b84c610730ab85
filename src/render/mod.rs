//! Rasterization of geometric primitives into integer pixel sequences.
//!
//! Every function here is pure: control points in, ordered pixels out. The
//! order is part of the contract and is fixed per algorithm.
//!
//! # Algorithms
//!
//! - **Lines**: naive slope evaluation, DDA, Bresenham
//! - **Polygons**: closed loop of line edges
//! - **Ellipses**: two-region midpoint algorithm
//! - **Curves**: Bézier (De Casteljau) and uniform cubic B-spline (Cox–de Boor)
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." *IEEE CG&A*, 4(9).

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{evaluate_curve, CurveSampler, BSPLINE_ORDER, CURVE_STEP};
pub use ellipse::rasterize_ellipse;
pub use line::rasterize_line;
pub use polygon::rasterize_polygon;

use crate::algorithm::LineAlgorithm;
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Segment};
use crate::primitive::Primitive;

/// Trait for anything that rasterizes to a pixel sequence.
pub trait Drawable {
    /// Ordered pixels covering this item.
    fn pixels(&self) -> Vec<Point>;

    /// Paint this item into a framebuffer, returning the number of pixels
    /// that landed inside it.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> usize {
        fb.paint(&self.pixels(), color)
    }
}

impl Drawable for Primitive {
    fn pixels(&self) -> Vec<Point> {
        self.rasterize()
    }
}

impl Drawable for Segment {
    fn pixels(&self) -> Vec<Point> {
        rasterize_line(self.start, self.end, LineAlgorithm::Bresenham)
    }
}
