//! Geometric primitives for rasterization.
//!
//! Control points and emitted pixels live on the integer pixel grid
//! ([`Point`]). Slopes, rotations and curve interpolation run in `f64`
//! ([`PointF`]) and are rounded back with [`round_half_even`].

/// Round to the nearest integer, ties to even.
///
/// Every "round to nearest" in the kernel goes through this function so the
/// tie rule is the same everywhere: `0.5 -> 0`, `1.5 -> 2`, `-2.5 -> -2`.
#[inline]
#[must_use]
pub fn round_half_even(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Swap the x and y coordinates.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Convert to a floating-point point.
    #[must_use]
    pub fn to_f64(self) -> PointF {
        PointF::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A working point with `f64` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (1.0 - t) * self.x + t * other.x,
            (1.0 - t) * self.y + t * other.y,
        )
    }

    /// Round both coordinates to the pixel grid (ties to even).
    #[must_use]
    pub fn round(self) -> Point {
        Point::new(round_half_even(self.x), round_half_even(self.y))
    }

    /// Truncate both coordinates toward zero.
    #[must_use]
    pub fn trunc(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// A two-point line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Segment {
    /// Sentinel for "nothing survived clipping": both endpoints at the origin.
    pub const EMPTY: Self = Self::new(Point::ORIGIN, Point::ORIGIN);

    /// Create a new segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Whether this is the [`Segment::EMPTY`] sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Endpoints as a two-element control-point array.
    #[must_use]
    pub const fn to_array(self) -> [Point; 2] {
        [self.start, self.end]
    }
}

/// Axis-aligned clip rectangle, inclusive on every edge.
///
/// Always normalized so `x_min < x_max` and `y_min < y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    /// Left edge.
    pub x_min: i32,
    /// Bottom edge (smallest y).
    pub y_min: i32,
    /// Right edge.
    pub x_max: i32,
    /// Top edge (largest y).
    pub y_max: i32,
}

impl ClipWindow {
    /// Build a window from two opposite corners given in any order.
    ///
    /// Returns `None` when the window has zero width or zero height.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Option<Self> {
        if a.x == b.x || a.y == b.y {
            return None;
        }
        Some(Self {
            x_min: a.x.min(b.x),
            y_min: a.y.min(b.y),
            x_max: a.x.max(b.x),
            y_max: a.y.max(b.y),
        })
    }

    /// Check if a point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.x_max - self.x_min
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.y_max - self.y_min
    }
}
