//! Midpoint ellipse rasterization.
//!
//! The ellipse is given by two corners of its axis-aligned bounding box.
//! Center and half-axes use floor division, so odd box extents lose their
//! half pixel.

use crate::geometry::Point;

/// Rasterize the ellipse inscribed in the box with corners `c0` and `c1`.
///
/// Each step's offset `(x, y)` is reflected into four quadrants, emitted as
/// `(+x, +y), (-x, +y), (+x, -y), (-x, -y)` around the center. The seed
/// point `(0, ry)` comes first, then region 1, then region 2. Mirror
/// duplicates on the axes are kept.
#[must_use]
pub fn rasterize_ellipse(c0: Point, c1: Point) -> Vec<Point> {
    let center = Point::new(
        (c0.x + c1.x).div_euclid(2),
        (c0.y + c1.y).div_euclid(2),
    );
    let rx = i64::from((c1.x - c0.x).abs() / 2);
    let ry = i64::from((c1.y - c0.y).abs() / 2);
    log::trace!("rasterize_ellipse center={center:?} rx={rx} ry={ry}");

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let (rx2f, ry2f) = (rx2 as f64, ry2 as f64);

    let mut out = Vec::new();
    let mut emit = |x: i64, y: i64| {
        let (x, y) = (x as i32, y as i32);
        out.push(center.offset(x, y));
        out.push(center.offset(-x, y));
        out.push(center.offset(x, -y));
        out.push(center.offset(-x, -y));
    };

    // Region 1: |slope| < 1, x drives.
    let (mut x, mut y) = (0i64, ry);
    let mut p = ry2f - rx2f * ry as f64 + rx2f / 4.0;
    emit(x, y);
    while ry2 * x < rx2 * y {
        let (xf, yf) = (x as f64, y as f64);
        if p < 0.0 {
            p += 2.0 * ry2f * xf + 3.0 * ry2f;
        } else {
            p += 2.0 * ry2f * xf + 3.0 * ry2f - 2.0 * rx2f * yf + 2.0 * rx2f;
            y -= 1;
        }
        x += 1;
        emit(x, y);
    }

    // Region 2: y drives down to the major axis.
    let (xf, yf) = (x as f64, y as f64);
    p = ry2f * (xf + 0.5).powi(2) + rx2f * (yf - 1.0).powi(2) - rx2f * ry2f;
    while y > 0 {
        let (xf, yf) = (x as f64, y as f64);
        if p > 0.0 {
            p += -2.0 * rx2f * yf + 3.0 * rx2f;
        } else {
            p += 2.0 * ry2f * xf + 3.0 * rx2f - 2.0 * rx2f * yf + 2.0 * ry2f;
            x += 1;
        }
        y -= 1;
        emit(x, y);
    }

    out
}
