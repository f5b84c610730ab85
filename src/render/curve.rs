//! Parametric curve evaluation.
//!
//! - **Bézier** via De Casteljau: repeated linear interpolation of the
//!   control polygon until one point remains.
//! - **B-spline**: uniform cubic (order 4) with integer knots `t_i = i`,
//!   basis functions from the Cox–de Boor recurrence. The spline is not
//!   clamped, so it does not pass through the first or last control point.
//!
//! Both sample the parameter with a fixed additive step ([`CURVE_STEP`] by
//! default). The parameter is accumulated, not recomputed per sample, so
//! sample counts follow `f64` accumulation exactly.
//!
//! # References
//!
//! - de Casteljau, P. (1959). "Outillages méthodes calcul."
//! - de Boor, C. (1972). "On calculating with B-splines." *J. Approx. Theory*, 6(1), 50-62.

use crate::algorithm::CurveAlgorithm;
use crate::error::{Error, Result};
use crate::geometry::{Point, PointF};

/// Default parametric step between consecutive curve samples.
pub const CURVE_STEP: f64 = 0.001;

/// B-spline order (degree + 1).
pub const BSPLINE_ORDER: usize = 4;

/// Evaluate a curve with the default step.
///
/// Returns an empty sequence for an empty control list, and for a B-spline
/// with fewer than [`BSPLINE_ORDER`] control points.
#[must_use]
pub fn evaluate_curve(control: &[Point], algorithm: CurveAlgorithm) -> Vec<Point> {
    CurveSampler::new(algorithm).sample(control)
}

/// Curve evaluator with a tunable parametric step.
///
/// # Example
///
/// ```
/// use trueno_raster::algorithm::CurveAlgorithm;
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::CurveSampler;
///
/// let control = [Point::new(0, 0), Point::new(50, 100), Point::new(100, 0)];
/// let coarse = CurveSampler::new(CurveAlgorithm::Bezier)
///     .step(0.1)
///     .unwrap()
///     .sample(&control);
/// assert_eq!(coarse.first(), Some(&Point::new(0, 0)));
/// assert_eq!(coarse.last(), Some(&Point::new(100, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSampler {
    algorithm: CurveAlgorithm,
    step: f64,
}

impl CurveSampler {
    /// Create a sampler using [`CURVE_STEP`].
    #[must_use]
    pub const fn new(algorithm: CurveAlgorithm) -> Self {
        Self {
            algorithm,
            step: CURVE_STEP,
        }
    }

    /// Set the parametric step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCurveStep`] unless `0 < step < 1`.
    pub fn step(mut self, step: f64) -> Result<Self> {
        if !(step > 0.0 && step < 1.0) {
            return Err(Error::InvalidCurveStep(step));
        }
        self.step = step;
        Ok(self)
    }

    /// The configured parametric step.
    #[must_use]
    pub const fn step_size(&self) -> f64 {
        self.step
    }

    /// The configured algorithm.
    #[must_use]
    pub const fn algorithm(&self) -> CurveAlgorithm {
        self.algorithm
    }

    /// Sample the curve defined by `control`.
    #[must_use]
    pub fn sample(&self, control: &[Point]) -> Vec<Point> {
        let out = match self.algorithm {
            CurveAlgorithm::Bezier => bezier(control, self.step),
            CurveAlgorithm::BSpline => bspline(control, self.step),
        };
        log::trace!(
            "{} with {} control points -> {} samples",
            self.algorithm,
            control.len(),
            out.len()
        );
        out
    }
}

fn bezier(control: &[Point], step: f64) -> Vec<Point> {
    let (Some(&first), Some(&last)) = (control.first(), control.last()) else {
        return Vec::new();
    };
    let polygon: Vec<PointF> = control.iter().map(|p| p.to_f64()).collect();
    let mut scratch = Vec::with_capacity(polygon.len());

    let mut out = vec![first];
    let mut u = step;
    while u < 1.0 {
        out.push(de_casteljau(&polygon, u, &mut scratch).round());
        u += step;
    }
    out.push(last);
    out
}

/// Point at parameter `u` on the Bézier curve over `polygon`.
fn de_casteljau(polygon: &[PointF], u: f64, scratch: &mut Vec<PointF>) -> PointF {
    scratch.clear();
    scratch.extend_from_slice(polygon);
    for level in (1..polygon.len()).rev() {
        for j in 0..level {
            scratch[j] = scratch[j].lerp(scratch[j + 1], u);
        }
    }
    scratch[0]
}

fn bspline(control: &[Point], step: f64) -> Vec<Point> {
    let n = control.len();
    if n < BSPLINE_ORDER {
        log::debug!("B-spline needs {BSPLINE_ORDER} control points, got {n}; nothing to draw");
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut u = (BSPLINE_ORDER - 1) as f64;
    while u < n as f64 {
        let mut sum = PointF::default();
        for (i, p) in control.iter().enumerate() {
            let w = cox_de_boor(i, u);
            sum.x += f64::from(p.x) * w;
            sum.y += f64::from(p.y) * w;
        }
        out.push(sum.round());
        u += step;
    }
    out
}

/// Basis function `N_{i,k}(u)` over the uniform knot vector `t_j = j`.
fn cox_de_boor(i: usize, u: f64) -> f64 {
    const K: usize = BSPLINE_ORDER;
    // n[j][d] holds N_{i+j, d+1}(u).
    let mut n = [[0.0f64; K]; K];
    let i = i as f64;

    for (j, row) in n.iter_mut().enumerate() {
        let lo = i + j as f64;
        row[0] = if lo <= u && u < lo + 1.0 { 1.0 } else { 0.0 };
    }

    for d in 1..K {
        let df = d as f64;
        for j in 0..K - d {
            let lo = i + j as f64;
            let hi = lo + df + 1.0;
            let left = if u - lo != 0.0 {
                (u - lo) / df * n[j][d - 1]
            } else {
                0.0
            };
            let right = if hi - u != 0.0 {
                (hi - u) / df * n[j + 1][d - 1]
            } else {
                0.0
            };
            n[j][d] = left + right;
        }
    }

    n[0][K - 1]
}
