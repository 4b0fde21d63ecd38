// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for canvas-space math (points, boxes, polar samples).

/// A point in canvas space (pixels, y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box, used for ellipses and pie wedges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Square of side `2 * half` centered on `center`.
    pub fn around(center: Point, half: f64) -> Self {
        Self::from_ltrb(center.x - half, center.y - half, center.x + half, center.y + half)
    }

    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
}

/// An (angle, radius) pair prior to Cartesian conversion. Angle in degrees,
/// clockwise from the positive x axis in canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarSample {
    pub angle: f64,
    pub radius: f64,
}

impl PolarSample {
    pub const fn new(angle: f64, radius: f64) -> Self {
        Self { angle, radius }
    }

    pub fn to_point(self, center: Point) -> Point {
        let theta = self.angle.to_radians();
        Point::new(center.x + self.radius * theta.cos(), center.y + self.radius * theta.sin())
    }
}

/// Fold an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
