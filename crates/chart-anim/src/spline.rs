// File: crates/chart-anim/src/spline.rs
// Summary: Per-point spline coefficients (natural, monotonic, cardinal, clamped) and the
//          Bézier control points derived from them for each segment.

use serde::{Deserialize, Serialize};

use crate::axis::XValueType;
use crate::config::{AnimationConfig, DEFAULT_EPSILON, DEFAULT_TENSION};
use crate::geometry::{clamp, ControlPoints, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplineType {
    #[default]
    Natural,
    Monotonic,
    Cardinal,
    Clamped,
}

/// Curvature weight of one data point. `y` is used by every variant; `x` only by
/// the cardinal variant, whose control points are offset per coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficient {
    pub x: f64,
    pub y: f64,
}

impl Coefficient {
    #[inline]
    pub const fn y(y: f64) -> Self { Self { x: 0.0, y } }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplineOptions {
    pub spline: SplineType,
    /// Cardinal tension, clamped to [0, 1] on use.
    pub tension: f64,
    pub epsilon: f64,
    pub x_type: XValueType,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self { spline: SplineType::Natural, tension: DEFAULT_TENSION, epsilon: DEFAULT_EPSILON, x_type: XValueType::Double }
    }
}

impl SplineOptions {
    pub fn new(spline: SplineType) -> Self {
        Self { spline, ..Self::default() }
    }

    pub fn from_config(spline: SplineType, cfg: &AnimationConfig) -> Self {
        Self { spline, tension: cfg.cardinal_tension, epsilon: cfg.epsilon, x_type: XValueType::Double }
    }

    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_x_type(mut self, x_type: XValueType) -> Self {
        self.x_type = x_type;
        self
    }
}

/// One coefficient per input point.
pub fn coefficients(points: &[Point], opts: &SplineOptions) -> Vec<Coefficient> {
    let eps = if opts.epsilon > 0.0 { opts.epsilon } else { DEFAULT_EPSILON };
    match opts.spline {
        SplineType::Natural => natural_coefficients(points, eps).into_iter().map(Coefficient::y).collect(),
        SplineType::Clamped => clamped_coefficients(points, eps).into_iter().map(Coefficient::y).collect(),
        SplineType::Monotonic => monotonic_coefficients(points).into_iter().map(Coefficient::y).collect(),
        SplineType::Cardinal => cardinal_coefficients(points, opts.tension),
    }
}

/// Second-derivative weights with zero curvature at both ends.
pub fn natural_coefficients(points: &[Point], eps: f64) -> Vec<f64> {
    solve_tridiagonal(points, 0.0, 0.0, eps)
}

/// Boundary weights from one-sided differences of the end segments (`3·Δy/Δx − 3` at the
/// start, `3 − 3·Δy/Δx` at the end), each normalized to its absolute value or 0 when not finite.
pub fn clamped_coefficients(points: &[Point], eps: f64) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let (a, b) = (points[0], points[1]);
    let start = normalize_boundary(3.0 * (b.y - a.y) / (b.x - a.x) - 3.0);
    let (c, d) = (points[n - 2], points[n - 1]);
    let end = normalize_boundary(3.0 - 3.0 * (d.y - c.y) / (d.x - c.x));
    solve_tridiagonal(points, start, end, eps)
}

/// Fritsch–Carlson tangents: zero at local extrema, weighted harmonic mean of the
/// neighbouring secant slopes elsewhere, secant slope at the ends.
pub fn monotonic_coefficients(points: &[Point]) -> Vec<f64> {
    let n = points.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let h: Vec<f64> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
    let s: Vec<f64> = points
        .windows(2)
        .zip(&h)
        .map(|(w, &dx)| if dx == 0.0 { 0.0 } else { (w[1].y - w[0].y) / dx })
        .collect();

    let mut m = vec![0.0; n];
    m[0] = s[0];
    m[n - 1] = s[n - 2];
    for i in 1..n - 1 {
        let (s0, s1) = (s[i - 1], s[i]);
        if s0 * s1 <= 0.0 {
            continue;
        }
        let w1 = 2.0 * h[i] + h[i - 1];
        let w2 = h[i] + 2.0 * h[i - 1];
        let blended = (w1 + w2) / (w1 / s0 + w2 / s1);
        m[i] = if blended.is_finite() { blended } else { 0.0 };
    }
    m
}

/// `tension · (v[i+1] − v[i−1])` per coordinate; the ends reach two points inward.
pub fn cardinal_coefficients(points: &[Point], tension: f64) -> Vec<Coefficient> {
    let n = points.len();
    if n < 3 {
        return vec![Coefficient::default(); n];
    }
    let t = clamp(tension, 0.0, 1.0);
    (0..n)
        .map(|i| {
            let (lo, hi) = if i == 0 {
                (0, 2)
            } else if i == n - 1 {
                (n - 3, n - 1)
            } else {
                (i - 1, i + 1)
            };
            Coefficient { x: t * (points[hi].x - points[lo].x), y: t * (points[hi].y - points[lo].y) }
        })
        .collect()
}

/// Control points for the cubic from `p1` to `p2`.
/// `x_factor` is the date-time normalization divisor (1 for numeric axes); only cardinal uses it.
pub fn control_points(p1: Point, p2: Point, c1: Coefficient, c2: Coefficient, spline: SplineType, x_factor: f64) -> ControlPoints {
    const ONE_THIRD: f64 = 1.0 / 3.0;
    match spline {
        SplineType::Cardinal => {
            let f = if x_factor.is_finite() && x_factor > 0.0 { x_factor } else { 1.0 };
            // control x never leaves the segment's x span
            let (lo, hi) = (p1.x.min(p2.x), p1.x.max(p2.x));
            ControlPoints {
                control_point1: Point::new(clamp(p1.x + c1.x * ONE_THIRD / f, lo, hi), p1.y + c1.y * ONE_THIRD),
                control_point2: Point::new(clamp(p2.x - c2.x * ONE_THIRD / f, lo, hi), p2.y - c2.y * ONE_THIRD),
            }
        }
        SplineType::Monotonic => {
            let dx = (p2.x - p1.x) * ONE_THIRD;
            ControlPoints {
                control_point1: Point::new(p1.x + dx, p1.y + c1.y * dx),
                control_point2: Point::new(p2.x - dx, p2.y - c2.y * dx),
            }
        }
        SplineType::Natural | SplineType::Clamped => {
            let dx = p2.x - p1.x;
            let dx2 = dx * dx;
            let y1 = ONE_THIRD * ((2.0 * p1.y + p2.y) - ONE_THIRD * dx2 * (c1.y + 0.5 * c2.y));
            let y2 = ONE_THIRD * ((p1.y + 2.0 * p2.y) - ONE_THIRD * dx2 * (0.5 * c1.y + c2.y));
            ControlPoints {
                control_point1: Point::new((2.0 * p1.x + p2.x) * ONE_THIRD, y1),
                control_point2: Point::new((p1.x + 2.0 * p2.x) * ONE_THIRD, y2),
            }
        }
    }
}

/// Control points for every consecutive pair of `points`. A segment whose coefficients
/// are missing (the list lags behind the points) uses its endpoints as control points.
pub fn segment_control_points(points: &[Point], coefs: &[Coefficient], opts: &SplineOptions) -> Vec<ControlPoints> {
    let factor = opts.x_type.normalization_factor();
    points
        .windows(2)
        .enumerate()
        .map(|(i, w)| match (coefs.get(i), coefs.get(i + 1)) {
            (Some(&c1), Some(&c2)) => control_points(w[0], w[1], c1, c2, opts.spline, factor),
            _ => ControlPoints::straight(w[0], w[1]),
        })
        .collect()
}

fn normalize_boundary(v: f64) -> f64 {
    if v.is_finite() { v.abs() } else { 0.0 }
}

// Forward sweep + back substitution for the second-derivative system with fixed ends.
// `u` holds the elimination multipliers and `r` the reduced right-hand side.
fn solve_tridiagonal(points: &[Point], start: f64, end: f64, eps: f64) -> Vec<f64> {
    let n = points.len();
    let mut coef = vec![0.0; n];
    if n < 2 {
        return coef;
    }
    coef[0] = start;
    coef[n - 1] = end;

    let mut u = vec![0.0; n];
    let mut r = vec![0.0; n];
    r[0] = start;
    for i in 1..n - 1 {
        let d1 = points[i].x - points[i - 1].x;
        let d2 = points[i + 1].x - points[i - 1].x;
        let d3 = points[i + 1].x - points[i].x;
        if d1 == 0.0 || d2 == 0.0 || d3 == 0.0 {
            // shared x: pin this point's weight to 0
            continue;
        }
        let dy_next = points[i + 1].y - points[i].y;
        let dy_prev = points[i].y - points[i - 1].y;
        let p = 1.0 / (d1 * u[i - 1] + 2.0 * d2).abs().max(eps);
        u[i] = -p * d3;
        r[i] = p * (6.0 * (dy_next / d3 - dy_prev / d1) - d1 * r[i - 1]);
    }
    for k in (1..n - 1).rev() {
        coef[k] = u[k] * coef[k + 1] + r[k];
    }
    coef
}
