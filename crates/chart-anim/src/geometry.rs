// File: crates/chart-anim/src/geometry.rs
// Summary: Lightweight geometry helpers for path math (points, control-point pairs, lerp).

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }

    #[inline]
    pub fn approx_eq(&self, other: Point, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The two inner control points of one cubic segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    pub control_point1: Point,
    pub control_point2: Point,
}

impl ControlPoints {
    /// Degenerate pair where each endpoint acts as its own control point (a straight cubic).
    pub const fn straight(p1: Point, p2: Point) -> Self {
        Self { control_point1: p1, control_point2: p2 }
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
