//! Geometry primitives - Point and FrameRect
//!
//! Every figure is expressed in terms of these two values.
//! Both are `Copy`, so passing them around never aliases.
//!
//! ## Coordinate System
//!
//! - X grows to the right
//! - Y grows upwards, so `top` is the larger Y coordinate

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or offset) in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin (0, 0)
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Z component of the cross product of two offsets
    pub fn cross(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Whether both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Map this point through a uniform scale with fixed point `base`
    ///
    /// ```text
    /// p' = base + k * (p - base)
    /// ```
    pub fn scaled_about(self, base: Point, k: f64) -> Point {
        base + (self - base) * k
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

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
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

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

/// Axis-aligned rectangle given by its size and center
///
/// The rectangle spans `[cx - w/2, cx + w/2] x [cy - h/2, cy + h/2]`.
/// Zero width or height is allowed (a degenerate frame).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameRect {
    pub width: f64,
    pub height: f64,
    pub pos: Point,
}

impl FrameRect {
    /// Create a frame from its size and center
    pub const fn new(width: f64, height: f64, pos: Point) -> Self {
        Self { width, height, pos }
    }

    /// The zero frame centered at the origin
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, Point::ORIGIN)
    }

    /// Build a frame from its four edges
    ///
    /// Edges may be given in any order; the result is normalized so that
    /// width and height are never negative.
    pub fn from_edges(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        let (left, right) = (left.min(right), left.max(right));
        let (bottom, top) = (bottom.min(top), bottom.max(top));
        Self {
            width: right - left,
            height: top - bottom,
            pos: Point::new((left + right) / 2.0, (bottom + top) / 2.0),
        }
    }

    /// Tightest frame around a set of points, `None` if there are none
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut left, mut right, mut bottom, mut top) = (first.x, first.x, first.y, first.y);
        for p in iter {
            left = left.min(p.x);
            right = right.max(p.x);
            bottom = bottom.min(p.y);
            top = top.max(p.y);
        }
        Some(Self::from_edges(left, right, bottom, top))
    }

    pub fn left(&self) -> f64 {
        self.pos.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.pos.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.pos.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y - self.height / 2.0
    }

    /// Smallest axis-aligned frame containing both `self` and `other`
    pub fn union(&self, other: &FrameRect) -> FrameRect {
        FrameRect::from_edges(
            self.left().min(other.left()),
            self.right().max(other.right()),
            self.bottom().min(other.bottom()),
            self.top().max(other.top()),
        )
    }

    /// Whether a point lies inside or on the border of the frame
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.bottom() && p.y <= self.top()
    }
}

impl fmt::Display for FrameRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(
                f,
                "w={:.*} h={:.*} center={:.*}",
                p, self.width, p, self.height, p, self.pos
            ),
            None => write!(f, "w={} h={} center={}", self.width, self.height, self.pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);
        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(-a, Point::new(-1.0, -2.0));
    }

    #[test]
    fn test_scaled_about_keeps_base_fixed() {
        let base = Point::new(3.0, -4.0);
        assert_eq!(base.scaled_about(base, 7.5), base);

        let p = Point::new(-7.0, 14.0).scaled_about(Point::ORIGIN, 0.5);
        assert!((p.x - (-3.5)).abs() < 1e-12);
        assert!((p.y - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_edges() {
        let frame = FrameRect::new(4.0, 2.0, Point::new(1.0, 1.0));
        assert_eq!(frame.left(), -1.0);
        assert_eq!(frame.right(), 3.0);
        assert_eq!(frame.bottom(), 0.0);
        assert_eq!(frame.top(), 2.0);
        assert!(frame.contains(Point::new(3.0, 0.0)));
        assert!(!frame.contains(Point::new(3.1, 0.0)));
    }

    #[test]
    fn test_frame_union() {
        let a = FrameRect::new(2.0, 2.0, Point::new(-5.0, -5.0));
        let b = FrameRect::new(2.0, 4.0, Point::new(5.0, -5.0));
        let u = a.union(&b);
        assert_eq!(u.left(), -6.0);
        assert_eq!(u.right(), 6.0);
        assert_eq!(u.bottom(), -7.0);
        assert_eq!(u.top(), -3.0);
        assert_eq!(u.pos, Point::new(0.0, -5.0));
    }

    #[test]
    fn test_from_points() {
        assert!(FrameRect::from_points(Vec::new()).is_none());

        let frame = FrameRect::from_points([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
        ])
        .unwrap();
        assert_eq!(frame, FrameRect::new(4.0, 3.0, Point::new(2.0, 1.5)));
    }

    #[test]
    fn test_display_precision() {
        let frame = FrameRect::new(1.0, 2.0, Point::new(0.5, -0.25));
        assert_eq!(format!("{:.2}", frame), "w=1.00 h=2.00 center=(0.50, -0.25)");
    }
}
