//! Line clipping against an axis-aligned window.
//!
//! Two algorithms with the same accept/reject decisions:
//!
//! - **Cohen–Sutherland**: 4-bit region outcodes; the outside endpoint is
//!   moved onto the first violated boundary (left, right, bottom, top) until
//!   the segment is trivially accepted or rejected. Accepted endpoints are
//!   truncated toward zero.
//! - **Liang–Barsky**: parametric entry/exit bounds `u0 <= u1` over the four
//!   half-planes `p * u <= q`. Endpoints are rounded ties-to-even.
//!
//! A window with zero width or height clips everything away.

use crate::algorithm::ClipAlgorithm;
use crate::geometry::{ClipWindow, Point, PointF, Segment};

/// Outcode bit: left of `x_min`.
pub const LEFT: u8 = 0b0001;
/// Outcode bit: right of `x_max`.
pub const RIGHT: u8 = 0b0010;
/// Outcode bit: below `y_min`.
pub const BOTTOM: u8 = 0b0100;
/// Outcode bit: above `y_max`.
pub const TOP: u8 = 0b1000;

/// Upper bound on Cohen–Sutherland boundary moves. Exact arithmetic needs at
/// most two per endpoint.
const MAX_CLIP_PASSES: usize = 8;

/// Region outcode of `p` relative to `window`.
#[must_use]
pub fn outcode(p: PointF, window: &ClipWindow) -> u8 {
    let mut code = 0;
    if p.x < f64::from(window.x_min) {
        code |= LEFT;
    }
    if p.x > f64::from(window.x_max) {
        code |= RIGHT;
    }
    if p.y < f64::from(window.y_min) {
        code |= BOTTOM;
    }
    if p.y > f64::from(window.y_max) {
        code |= TOP;
    }
    code
}

/// Clip `p0`-`p1` against the window with corners `corner0` and `corner1`
/// (any order).
///
/// Returns [`Segment::EMPTY`] when nothing survives or the window is
/// degenerate. Use [`clip_segment`] to tell a rejected segment apart from a
/// surviving one that happens to sit on the origin.
#[must_use]
pub fn clip_line(
    p0: Point,
    p1: Point,
    corner0: Point,
    corner1: Point,
    algorithm: ClipAlgorithm,
) -> Segment {
    let Some(window) = ClipWindow::from_corners(corner0, corner1) else {
        log::debug!("clip window {corner0:?}-{corner1:?} is degenerate; nothing survives");
        return Segment::EMPTY;
    };
    clip_segment(p0, p1, &window, algorithm).unwrap_or(Segment::EMPTY)
}

/// Clip `p0`-`p1` against `window`, or `None` if the segment lies outside.
#[must_use]
pub fn clip_segment(
    p0: Point,
    p1: Point,
    window: &ClipWindow,
    algorithm: ClipAlgorithm,
) -> Option<Segment> {
    let clipped = match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(p0, p1, window),
        ClipAlgorithm::LiangBarsky => liang_barsky(p0, p1, window),
    };
    log::trace!("{algorithm} {p0:?}-{p1:?} against {window:?} -> {clipped:?}");
    clipped
}

fn cohen_sutherland(p0: Point, p1: Point, w: &ClipWindow) -> Option<Segment> {
    // Boundary intersections are taken on the original segment so repeated
    // clipping does not accumulate error.
    let origin = p0.to_f64();
    let dx = f64::from(p1.x - p0.x);
    let dy = f64::from(p1.y - p0.y);
    let at_x = |x: f64| PointF::new(x, origin.y + dy * (x - origin.x) / dx);
    let at_y = |y: f64| PointF::new(origin.x + dx * (y - origin.y) / dy, y);

    let mut a = p0.to_f64();
    let mut b = p1.to_f64();
    for _ in 0..=MAX_CLIP_PASSES {
        let code_a = outcode(a, w);
        let code_b = outcode(b, w);
        if code_a | code_b == 0 {
            return Some(Segment::new(a.trunc(), b.trunc()));
        }
        if code_a & code_b != 0 {
            return None;
        }

        // The outside endpoint's violated axis differs from the other
        // endpoint's, so the matching delta is nonzero.
        let (code, target) = if code_a != 0 {
            (code_a, &mut a)
        } else {
            (code_b, &mut b)
        };
        *target = if code & LEFT != 0 {
            at_x(f64::from(w.x_min))
        } else if code & RIGHT != 0 {
            at_x(f64::from(w.x_max))
        } else if code & BOTTOM != 0 {
            at_y(f64::from(w.y_min))
        } else {
            at_y(f64::from(w.y_max))
        };
    }

    log::debug!("Cohen-Sutherland did not settle for {p0:?}-{p1:?}; rejecting");
    None
}

fn liang_barsky(p0: Point, p1: Point, w: &ClipWindow) -> Option<Segment> {
    let start = p0.to_f64();
    let dx = f64::from(p1.x - p0.x);
    let dy = f64::from(p1.y - p0.y);

    let bounds = [
        (-dx, f64::from(p0.x - w.x_min)),
        (dx, f64::from(w.x_max - p0.x)),
        (-dy, f64::from(p0.y - w.y_min)),
        (dy, f64::from(w.y_max - p0.y)),
    ];

    let mut u0 = 0.0f64;
    let mut u1 = 1.0f64;
    for (p, q) in bounds {
        if p < 0.0 {
            u0 = u0.max(q / p);
        } else if p > 0.0 {
            u1 = u1.min(q / p);
        } else if q < 0.0 {
            // Parallel to this boundary and outside it.
            return None;
        }
        if u0 > u1 {
            return None;
        }
    }

    let at = |u: f64| PointF::new(start.x + u * dx, start.y + u * dy).round();
    Some(Segment::new(at(u0), at(u1)))
}
