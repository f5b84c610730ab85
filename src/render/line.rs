//! Line rasterization.
//!
//! Three algorithms with deliberately different rounding:
//!
//! - **Naive**: evaluates `y = y0 + k (x - x0)` per column and truncates
//!   toward zero. Kept bit-for-bit with the legacy renderer.
//! - **DDA**: steps the driving axis by one and accumulates the dependent
//!   axis in `f64`, rounding ties-to-even at every step.
//! - **Bresenham**: integer-only decision variable.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use crate::algorithm::LineAlgorithm;
use crate::geometry::{round_half_even, Point};

/// Rasterize the segment `p0`-`p1` into an ordered pixel sequence.
///
/// A zero-length segment yields exactly one pixel under every algorithm.
#[must_use]
pub fn rasterize_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Point> {
    log::trace!("rasterize_line {p0:?} -> {p1:?} via {algorithm}");
    match algorithm {
        LineAlgorithm::Naive => naive(p0, p1),
        LineAlgorithm::Dda => dda(p0, p1),
        LineAlgorithm::Bresenham => bresenham(p0, p1),
    }
}

/// All pixels of a vertical run at `x`, ascending in y.
fn vertical(x: i32, y0: i32, y1: i32) -> Vec<Point> {
    (y0.min(y1)..=y0.max(y1)).map(|y| Point::new(x, y)).collect()
}

/// Order two endpoints so the first has the smaller `key`.
#[inline]
fn ordered_by(p0: Point, p1: Point, key: impl Fn(Point) -> i32) -> (Point, Point) {
    if key(p0) > key(p1) {
        (p1, p0)
    } else {
        (p0, p1)
    }
}

fn naive(p0: Point, p1: Point) -> Vec<Point> {
    if p0.x == p1.x {
        return vertical(p0.x, p0.y, p1.y);
    }
    let (a, b) = ordered_by(p0, p1, |p| p.x);
    let k = f64::from(b.y - a.y) / f64::from(b.x - a.x);
    (a.x..=b.x)
        .map(|x| {
            // `as` truncates toward zero.
            let y = (f64::from(a.y) + k * f64::from(x - a.x)) as i32;
            Point::new(x, y)
        })
        .collect()
}

fn dda(p0: Point, p1: Point) -> Vec<Point> {
    if p0.x == p1.x {
        return vertical(p0.x, p0.y, p1.y);
    }
    let dx = f64::from(p1.x - p0.x);
    let dy = f64::from(p1.y - p0.y);

    if (dy / dx).abs() < 1.0 {
        let (a, b) = ordered_by(p0, p1, |p| p.x);
        let step = dy / dx;
        let mut y = f64::from(a.y);
        let mut out = Vec::with_capacity((b.x - a.x) as usize + 1);
        for x in a.x..=b.x {
            out.push(Point::new(x, round_half_even(y)));
            y += step;
        }
        out
    } else {
        let (a, b) = ordered_by(p0, p1, |p| p.y);
        let step = dx / dy;
        let mut x = f64::from(a.x);
        let mut out = Vec::with_capacity((b.y - a.y) as usize + 1);
        for y in a.y..=b.y {
            out.push(Point::new(round_half_even(x), y));
            x += step;
        }
        out
    }
}

fn bresenham(p0: Point, p1: Point) -> Vec<Point> {
    if p0.x == p1.x {
        return vertical(p0.x, p0.y, p1.y);
    }

    let steep = (p1.y - p0.y).abs() > (p1.x - p0.x).abs();
    let (p0, p1) = if steep {
        (p0.transposed(), p1.transposed())
    } else {
        (p0, p1)
    };
    let (a, b) = ordered_by(p0, p1, |p| p.x);

    let dx = i64::from(b.x - a.x);
    let dy = i64::from((b.y - a.y).abs());
    let y_step = if a.y < b.y { 1 } else { -1 };

    let mut p = 2 * dy - dx;
    let mut y = a.y;
    let mut out = Vec::with_capacity(dx as usize + 1);
    for x in a.x..=b.x {
        let pixel = Point::new(x, y);
        out.push(if steep { pixel.transposed() } else { pixel });
        if p >= 0 {
            y += y_step;
            p -= 2 * dx;
        }
        p += 2 * dy;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_bresenham_shallow() {
        let line = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Bresenham);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));
    }

    #[test]
    fn test_bresenham_steep_reversed() {
        let line = rasterize_line(Point::new(2, 1), Point::new(0, 7), LineAlgorithm::Bresenham);
        assert_eq!(line, pts(&[(2, 1), (2, 2), (1, 3), (1, 4), (1, 5), (0, 6), (0, 7)]));
    }

    #[test]
    fn test_dda_shallow() {
        let line = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Dda);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]));
    }

    #[test]
    fn test_dda_rounds_ties_to_even() {
        // y runs 0, 0.5, 1.0, 1.5, 2.0
        let line = rasterize_line(Point::new(0, 0), Point::new(4, 2), LineAlgorithm::Dda);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 1), (3, 2), (4, 2)]));
    }

    #[test]
    fn test_dda_steep() {
        let line = rasterize_line(Point::new(2, 1), Point::new(0, 7), LineAlgorithm::Dda);
        assert_eq!(line, pts(&[(2, 1), (2, 2), (1, 3), (1, 4), (1, 5), (0, 6), (0, 7)]));
    }

    #[test]
    fn test_naive_truncates() {
        let line = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Naive);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 2)]));
    }

    #[test]
    fn test_naive_truncates_toward_zero_for_negative_y() {
        let line = rasterize_line(Point::new(0, 0), Point::new(5, -3), LineAlgorithm::Naive);
        assert_eq!(line, pts(&[(0, 0), (1, 0), (2, -1), (3, -1), (4, -2), (5, -3)]));
    }

    #[test]
    fn test_naive_reorders_left_to_right() {
        let forward = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::Naive);
        let backward = rasterize_line(Point::new(5, 2), Point::new(0, 0), LineAlgorithm::Naive);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_vertical_ascending_for_every_algorithm() {
        for alg in LineAlgorithm::ALL {
            let line = rasterize_line(Point::new(3, 4), Point::new(3, 1), alg);
            assert_eq!(line, pts(&[(3, 1), (3, 2), (3, 3), (3, 4)]), "{alg}");
        }
    }

    #[test]
    fn test_single_point_for_every_algorithm() {
        for alg in LineAlgorithm::ALL {
            let line = rasterize_line(Point::new(7, -2), Point::new(7, -2), alg);
            assert_eq!(line, vec![Point::new(7, -2)], "{alg}");
        }
    }

    #[test]
    fn test_horizontal() {
        for alg in LineAlgorithm::ALL {
            let line = rasterize_line(Point::new(3, 5), Point::new(0, 5), alg);
            assert_eq!(line, pts(&[(0, 5), (1, 5), (2, 5), (3, 5)]), "{alg}");
        }
    }

    #[test]
    fn test_diagonal_is_y_major_for_dda() {
        let line = rasterize_line(Point::new(3, 3), Point::new(0, 0), LineAlgorithm::Dda);
        assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
    }
}
