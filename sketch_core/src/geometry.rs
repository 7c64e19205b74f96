//! # Geometry
//!
//! Elementary 2D geometry shared by every drawing helper: points, rotation
//! about the origin, sampling helpers and bounding boxes.
//!
//! All helper symbols are authored in unit coordinates around their anchor,
//! so the usual pipeline is `scale -> rotate -> translate`.
//!
//! ## Example
//!
//! ```rust
//! use sketch_core::geometry::{rotate, Point};
//! use sketch_core::units::Degrees;
//!
//! // Positive angles turn clockwise
//! let turned = rotate(&[Point::new(1.0, 0.0)], Degrees(90.0));
//! assert!((turned[0].y + 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use crate::units::Degrees;

/// A point (or displacement) in drawing units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub const fn origin() -> Self {
        Point { x: 0.0, y: 0.0 }
    }

    /// Return this point shifted by `(dx, dy)`
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Euclidean length when the point is read as a vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Left-hand normal `(-y, x)`
    pub fn perp(self) -> Self {
        Point::new(-self.y, self.x)
    }

    /// Linear interpolation, `t = 0` gives `self`
    pub fn lerp(self, other: Point, t: f64) -> Self {
        self * (1.0 - t) + other * t
    }

    pub fn midpoint(self, other: Point) -> Self {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Rotate points about the origin.
///
/// Positive angles rotate clockwise:
/// `x' = x·cos(a) + y·sin(a)`, `y' = -x·sin(a) + y·cos(a)`.
pub fn rotate(points: &[Point], angle: Degrees) -> Vec<Point> {
    if angle.is_zero() {
        return points.to_vec();
    }
    let (sin, cos) = angle.to_radians().0.sin_cos();
    points
        .iter()
        .map(|p| Point::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos))
        .collect()
}

pub fn translate(points: &[Point], by: Point) -> Vec<Point> {
    points.iter().map(|&p| p + by).collect()
}

pub fn scale(points: &[Point], factor: f64) -> Vec<Point> {
    points.iter().map(|&p| p * factor).collect()
}

/// Build points from parallel coordinate slices (extra entries are ignored).
pub fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<Point> {
    xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect()
}

/// `n` evenly spaced samples from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample an arc of `radius` around `center`, counter-clockwise from
/// `start` to `end`.
pub fn arc(center: Point, radius: f64, start: Degrees, end: Degrees, samples: usize) -> Vec<Point> {
    linspace(start.to_radians().0, end.to_radians().0, samples)
        .into_iter()
        .map(|a| Point::new(center.x + radius * a.cos(), center.y + radius * a.sin()))
        .collect()
}

/// Numeric sign where zero stays zero.
///
/// `f64::signum` maps `0.0` to `1.0`, which would move labels of
/// horizontal rightward vectors off their line.
pub fn sign_or_zero(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn from_point(p: Point) -> Self {
        Bounds { min: p, max: p }
    }

    /// Bounding box of the finite points, `None` if there are none
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for p in points.into_iter().filter(|p| p.is_finite()) {
            match bounds.as_mut() {
                Some(b) => b.include(*p),
                None => bounds = Some(Bounds::from_point(*p)),
            }
        }
        bounds
    }

    pub fn include(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn union(self, other: Bounds) -> Bounds {
        let mut out = self;
        out.include(other.min);
        out.include(other.max);
        out
    }

    /// Grow by `amount` on every side
    pub fn expand(self, amount: f64) -> Bounds {
        Bounds {
            min: self.min.offset(-amount, -amount),
            max: self.max.offset(amount, amount),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Maps drawing units (y up) onto a screen/page (y down) with equal aspect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
    scale: f64,
    origin: Point,
}

impl Viewport {
    /// Fixed scale: one drawing unit is `scale` screen units, top-left of
    /// `bounds` lands on the screen origin.
    pub fn with_scale(bounds: Bounds, scale: f64) -> Self {
        Viewport {
            bounds,
            scale,
            origin: Point::origin(),
        }
    }

    /// Fit `bounds` into a `width` x `height` area, centered, keeping
    /// `margin` free on every side.
    pub fn fit(bounds: Bounds, width: f64, height: f64, margin: f64) -> Self {
        let avail_w = (width - 2.0 * margin).max(1.0);
        let avail_h = (height - 2.0 * margin).max(1.0);
        let (bw, bh) = (bounds.width(), bounds.height());

        let scale = match (bw > 0.0, bh > 0.0) {
            (true, true) => (avail_w / bw).min(avail_h / bh),
            (true, false) => avail_w / bw,
            (false, true) => avail_h / bh,
            (false, false) => 1.0,
        };

        Viewport {
            bounds,
            scale,
            origin: Point::new(
                margin + (avail_w - bw * scale) / 2.0,
                margin + (avail_h - bh * scale) / 2.0,
            ),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(
            self.origin.x + (p.x - self.bounds.min.x) * self.scale,
            self.origin.y + (self.bounds.max.y - p.y) * self.scale,
        )
    }

    /// Screen-space size of the mapped bounds
    pub fn extent(&self) -> (f64, f64) {
        (self.bounds.width() * self.scale, self.bounds.height() * self.scale)
    }
}
