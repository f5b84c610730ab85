//! Primitives: a shape tag, its control points and a color.
//!
//! [`Shape`] ties each primitive kind to its algorithm family so a line can
//! never carry a curve algorithm. The kernel functions stay pure; a
//! [`Primitive`] is just a convenient bundle for callers that keep a scene of
//! items and edit them in place.

use crate::algorithm::{ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
use crate::clip::clip_line;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::{evaluate_curve, rasterize_ellipse, rasterize_line, rasterize_polygon};
use crate::transform::{self, Angle};

/// Primitive kind with its algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Two-point segment.
    Line(LineAlgorithm),
    /// Closed vertex loop, edges drawn as lines.
    Polygon(LineAlgorithm),
    /// Ellipse inscribed in a two-corner bounding box.
    Ellipse,
    /// Parametric curve through its control polygon.
    Curve(CurveAlgorithm),
}

impl Shape {
    /// Lowercase kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Polygon(_) => "polygon",
            Self::Ellipse => "ellipse",
            Self::Curve(_) => "curve",
        }
    }

    /// Check a control-point count against this kind.
    fn check_points(&self, actual: usize) -> Result<()> {
        let (ok, expected) = match self {
            Self::Line(_) | Self::Ellipse => (actual == 2, "2"),
            Self::Polygon(_) | Self::Curve(_) => (actual >= 1, "at least 1"),
        };
        if ok {
            Ok(())
        } else {
            Err(Error::PointCount {
                kind: self.kind(),
                expected,
                actual,
            })
        }
    }
}

/// A drawable item.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    points: Vec<Point>,
    color: Rgba,
}

impl Primitive {
    /// Create a primitive, validating the number of control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointCount`] if lines or ellipses do not get exactly
    /// two points, or polygons or curves get none.
    pub fn new(shape: Shape, points: Vec<Point>, color: Rgba) -> Result<Self> {
        shape.check_points(points.len())?;
        Ok(Self {
            shape,
            points,
            color,
        })
    }

    /// A black line segment.
    #[must_use]
    pub fn line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Self {
        Self {
            shape: Shape::Line(algorithm),
            points: vec![p0, p1],
            color: Rgba::BLACK,
        }
    }

    /// A black ellipse inside the box with corners `c0` and `c1`.
    #[must_use]
    pub fn ellipse(c0: Point, c1: Point) -> Self {
        Self {
            shape: Shape::Ellipse,
            points: vec![c0, c1],
            color: Rgba::BLACK,
        }
    }

    /// A black polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointCount`] for an empty vertex list.
    pub fn polygon(vertices: Vec<Point>, algorithm: LineAlgorithm) -> Result<Self> {
        Self::new(Shape::Polygon(algorithm), vertices, Rgba::BLACK)
    }

    /// A black curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PointCount`] for an empty control list.
    pub fn curve(control: Vec<Point>, algorithm: CurveAlgorithm) -> Result<Self> {
        Self::new(Shape::Curve(algorithm), control, Rgba::BLACK)
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Shape tag.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Control points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Color attribute.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Pixels for the current control points.
    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        match self.shape {
            Shape::Line(alg) => rasterize_line(self.points[0], self.points[1], alg),
            Shape::Polygon(alg) => rasterize_polygon(&self.points, alg),
            Shape::Ellipse => rasterize_ellipse(self.points[0], self.points[1]),
            Shape::Curve(alg) => evaluate_curve(&self.points, alg),
        }
    }

    /// Translate the control points.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.points = transform::translate(&self.points, dx, dy);
    }

    /// Rotate the control points about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] for ellipses: rotating the
    /// bounding-box corners would not rotate the ellipse itself.
    pub fn rotate(&mut self, pivot: Point, angle: Angle) -> Result<()> {
        if self.shape == Shape::Ellipse {
            return Err(Error::UnsupportedTransform {
                kind: self.shape.kind(),
                operation: "rotate",
            });
        }
        self.points = transform::rotate(&self.points, pivot, angle);
        Ok(())
    }

    /// Scale the control points about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScaleFactor`] for a non-positive factor.
    pub fn scale(&mut self, pivot: Point, factor: f64) -> Result<()> {
        self.points = transform::scale(&self.points, pivot, factor)?;
        Ok(())
    }

    /// Clip a line primitive against the window with corners `c0`, `c1`.
    ///
    /// The endpoints are replaced by the clipped segment, or by the origin
    /// sentinel if nothing survives. Returns whether anything survived.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedTransform`] for anything but a line.
    pub fn clip(&mut self, c0: Point, c1: Point, algorithm: ClipAlgorithm) -> Result<bool> {
        if !matches!(self.shape, Shape::Line(_)) {
            return Err(Error::UnsupportedTransform {
                kind: self.shape.kind(),
                operation: "clip",
            });
        }
        let clipped = clip_line(self.points[0], self.points[1], c0, c1, algorithm);
        self.points = clipped.to_array().to_vec();
        Ok(!clipped.is_empty())
    }
}
