//! Primitive figures - Rectangle, Square, Diamond, Ring
//!
//! All of these are centered figures: their anchor is the center
//! and their frame rectangle is centered on it as well.

use std::f64::consts::PI;

use super::geometry::{FrameRect, Point};
use super::traits::{finite, positive, Shape, ShapeError};

/// An axis-aligned rectangle centered at `center`
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    center: Point,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Create a rectangle; width and height must be positive
    pub fn new(center: Point, width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center: finite("center", center)?,
            width: positive("width", width)?,
            height: positive("height", height)?,
        })
    }

    /// Create a rectangle from its bottom-left and top-right corners
    pub fn from_corners(bottom_left: Point, top_right: Point) -> Result<Self, ShapeError> {
        let bottom_left = finite("bottom-left corner", bottom_left)?;
        let top_right = finite("top-right corner", top_right)?;
        if top_right.x <= bottom_left.x || top_right.y <= bottom_left.y {
            return Err(ShapeError::InvalidConstruction(format!(
                "top-right corner {} must lie above and right of bottom-left corner {}",
                top_right, bottom_left
            )));
        }

        let size = top_right - bottom_left;
        Self::new(bottom_left + size * 0.5, size.x, size.y)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Get the corners of the rectangle, counter-clockwise from bottom-left
    pub fn corners(&self) -> [Point; 4] {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let Point { x, y } = self.center;
        [
            Point::new(x - hw, y - hh), // Bottom-left
            Point::new(x + hw, y - hh), // Bottom-right
            Point::new(x + hw, y + hh), // Top-right
            Point::new(x - hw, y + hh), // Top-left
        ]
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(self.width, self.height, self.center)
    }

    fn anchor(&self) -> Point {
        self.center
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Point::new(dx, dy);
    }

    fn scale(&mut self, k: f64) {
        self.width *= k;
        self.height *= k;
    }

    fn name(&self) -> &str {
        "Rectangle"
    }
}

/// An axis-aligned square centered at `center`
#[derive(Clone, Debug, PartialEq)]
pub struct Square {
    center: Point,
    side: f64,
}

impl Square {
    pub fn new(center: Point, side: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center: finite("center", center)?,
            side: positive("side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(self.side, self.side, self.center)
    }

    fn anchor(&self) -> Point {
        self.center
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Point::new(dx, dy);
    }

    fn scale(&mut self, k: f64) {
        self.side *= k;
    }

    fn name(&self) -> &str {
        "Square"
    }
}

/// A rhombus with axis-aligned diagonals
///
/// With equal diagonals this is a square rotated by 45 degrees
/// (see [`Diamond::square`]). The frame rectangle is exactly
/// `horizontal x vertical`.
///
/// ```text
///        top
///       /   \
///   left  c  right
///       \   /
///       bottom
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Diamond {
    center: Point,
    horizontal: f64,
    vertical: f64,
}

impl Diamond {
    /// Create a diamond from its horizontal and vertical diagonals
    pub fn new(center: Point, horizontal: f64, vertical: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center: finite("center", center)?,
            horizontal: positive("horizontal diagonal", horizontal)?,
            vertical: positive("vertical diagonal", vertical)?,
        })
    }

    /// Create a square standing on one corner, given its diagonal
    pub fn square(center: Point, diagonal: f64) -> Result<Self, ShapeError> {
        Self::new(center, diagonal, diagonal)
    }

    /// Create a square standing on one corner from its top and bottom corners
    ///
    /// Both corners must share an x coordinate, with `top` above `bottom`.
    pub fn from_top_bottom(top: Point, bottom: Point) -> Result<Self, ShapeError> {
        let top = finite("top corner", top)?;
        let bottom = finite("bottom corner", bottom)?;
        if top.x != bottom.x || top.y <= bottom.y {
            return Err(ShapeError::InvalidConstruction(format!(
                "top corner {} must lie directly above bottom corner {}",
                top, bottom
            )));
        }

        let diagonal = top.y - bottom.y;
        Self::square(Point::new(top.x, bottom.y + diagonal / 2.0), diagonal)
    }

    pub fn diagonals(&self) -> (f64, f64) {
        (self.horizontal, self.vertical)
    }

    /// Whether both diagonals are equal (a rotated square)
    pub fn is_square(&self) -> bool {
        self.horizontal == self.vertical
    }
}

impl Shape for Diamond {
    fn area(&self) -> f64 {
        self.horizontal * self.vertical / 2.0
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::new(self.horizontal, self.vertical, self.center)
    }

    fn anchor(&self) -> Point {
        self.center
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.center = self.center + Point::new(dx, dy);
    }

    fn scale(&mut self, k: f64) {
        self.horizontal *= k;
        self.vertical *= k;
    }

    fn name(&self) -> &str {
        if self.is_square() {
            "DiagonalSquare"
        } else {
            "Diamond"
        }
    }
}

/// A ring: a disc with a (possibly off-center) circular hole
///
/// The anchor is the outer center. The inner circle must lie
/// inside the outer one.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    outer_center: Point,
    inner_center: Point,
    inner_radius: f64,
    outer_radius: f64,
}

impl Ring {
    pub fn new(
        inner_center: Point,
        outer_center: Point,
        inner_radius: f64,
        outer_radius: f64,
    ) -> Result<Self, ShapeError> {
        let inner_center = finite("inner center", inner_center)?;
        let outer_center = finite("outer center", outer_center)?;
        let inner_radius = positive("inner radius", inner_radius)?;
        let outer_radius = positive("outer radius", outer_radius)?;

        if outer_radius <= inner_radius {
            return Err(ShapeError::InvalidConstruction(format!(
                "outer radius {} must exceed inner radius {}",
                outer_radius, inner_radius
            )));
        }
        if inner_center.distance(outer_center) + inner_radius > outer_radius {
            return Err(ShapeError::InvalidConstruction(
                "inner circle must lie inside the outer circle".to_string(),
            ));
        }

        Ok(Self {
            outer_center,
            inner_center,
            inner_radius,
            outer_radius,
        })
    }

    /// Ring with both circles sharing one center
    pub fn concentric(center: Point, inner_radius: f64, outer_radius: f64) -> Result<Self, ShapeError> {
        Self::new(center, center, inner_radius, outer_radius)
    }

    pub fn inner_center(&self) -> Point {
        self.inner_center
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.inner_radius, self.outer_radius)
    }
}

impl Shape for Ring {
    fn area(&self) -> f64 {
        PI * (self.outer_radius * self.outer_radius - self.inner_radius * self.inner_radius)
    }

    fn frame_rect(&self) -> FrameRect {
        let d = 2.0 * self.outer_radius;
        FrameRect::new(d, d, self.outer_center)
    }

    fn anchor(&self) -> Point {
        self.outer_center
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        let delta = Point::new(dx, dy);
        self.outer_center = self.outer_center + delta;
        self.inner_center = self.inner_center + delta;
    }

    fn scale(&mut self, k: f64) {
        self.inner_center = self.inner_center.scaled_about(self.outer_center, k);
        self.inner_radius *= k;
        self.outer_radius *= k;
    }

    fn name(&self) -> &str {
        "Ring"
    }
}
