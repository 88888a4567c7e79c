//! Vertex-based figures - Polygon and ComplexQuad
//!
//! Both own their vertices and move/scale them one by one.
//! They differ in the anchor:
//!
//! - `Polygon` uses the signed-area centroid
//! - `ComplexQuad` uses the intersection of its diagonals

use std::f64::consts::{FRAC_PI_2, TAU};

use super::geometry::{FrameRect, Point};
use super::traits::{finite, positive, Shape, ShapeError};

/// Denominator magnitude below which two diagonals count as parallel
const PARALLEL_EPSILON: f64 = 1e-12;

/// Area below this fraction of the squared extent counts as zero
const AREA_EPSILON: f64 = 1e-12;

/// Signed area of a closed vertex sequence (shoelace formula)
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += vertices[i].cross(vertices[j]);
    }
    sum / 2.0
}

/// Whether `area` is zero up to rounding, relative to the size of `vertices`
///
/// Collinear vertices with non-dyadic coordinates leave a residue of a
/// few ulps in the shoelace sum, so the threshold scales with the
/// square of the larger frame side.
fn is_degenerate(area: f64, vertices: &[Point]) -> bool {
    let extent = FrameRect::from_points(vertices.iter().copied())
        .map(|frame| frame.width.max(frame.height))
        .unwrap_or(0.0);
    area.abs() <= AREA_EPSILON * extent * extent
}

/// Plain average of the vertices
fn vertex_centroid(vertices: &[Point]) -> Point {
    let sum = vertices.iter().fold(Point::ORIGIN, |acc, &v| acc + v);
    sum * (1.0 / vertices.len() as f64)
}

/// A simple polygon defined by a list of vertices
///
/// The polygon is closed: the last vertex connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Vertices in declared order
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a copy of `vertices`
    ///
    /// Rejects fewer than 3 vertices, non-finite coordinates and
    /// vertex lists with (near) zero signed area, e.g. all collinear.
    pub fn new(vertices: &[Point]) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::InvalidConstruction(format!(
                "polygon requires at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        for (i, &v) in vertices.iter().enumerate() {
            finite(&format!("vertex {}", i), v)?;
        }
        if is_degenerate(signed_area(vertices), vertices) {
            return Err(ShapeError::InvalidConstruction(
                "polygon has zero area".to_string(),
            ));
        }

        Ok(Self {
            vertices: vertices.to_vec(),
        })
    }

    /// Create a regular polygon with n sides
    ///
    /// # Arguments
    /// * `center` - Center of the circumscribed circle
    /// * `n` - Number of sides (3 = triangle, 4 = square, etc.)
    /// * `radius` - Distance from center to vertices
    pub fn regular(center: Point, n: usize, radius: f64) -> Result<Self, ShapeError> {
        let radius = positive("radius", radius)?;
        let vertices: Vec<Point> = (0..n)
            .map(|i| {
                // Start from the top and go counter-clockwise
                let angle = FRAC_PI_2 + (i as f64 / n as f64) * TAU;
                center + Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();

        Self::new(&vertices)
    }

    /// Get a reference to the vertices
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a valid polygon has at least three vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Signed-area centroid
    ///
    /// ```text
    /// cx = 1/(6A) * sum (x_i + x_i+1) * (x_i * y_i+1 - x_i+1 * y_i)
    /// cy = 1/(6A) * sum (y_i + y_i+1) * (x_i * y_i+1 - x_i+1 * y_i)
    /// ```
    pub fn centroid(&self) -> Point {
        let a = self.signed_area();
        if a == 0.0 {
            return vertex_centroid(&self.vertices);
        }

        let n = self.vertices.len();
        let mut sum = Point::ORIGIN;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            sum = sum + (p + q) * p.cross(q);
        }
        sum * (1.0 / (6.0 * a))
    }
}

impl Shape for Polygon {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::from_points(self.vertices.iter().copied()).unwrap_or_default()
    }

    fn anchor(&self) -> Point {
        self.centroid()
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        let delta = Point::new(dx, dy);
        for v in &mut self.vertices {
            *v = *v + delta;
        }
    }

    fn scale(&mut self, k: f64) {
        let c = self.centroid();
        for v in &mut self.vertices {
            *v = v.scaled_about(c, k);
        }
    }

    fn name(&self) -> &str {
        "Polygon"
    }
}

/// A quadrilateral given by its four corners in order
///
/// The outline may cross itself. A bowtie such as
///
/// ```text
/// p3 .     . p1
///    | \ / |
///    | / \ |
/// p0 .     . p2
/// ```
///
/// has parallel diagonals, so its anchor is the vertex centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexQuad {
    vertices: [Point; 4],
}

impl ComplexQuad {
    /// Create a quadrilateral from four finite corners
    ///
    /// Rejects corners whose two-triangle area is (near) zero.
    pub fn new(vertices: [Point; 4]) -> Result<Self, ShapeError> {
        for (i, &v) in vertices.iter().enumerate() {
            finite(&format!("vertex {}", i), v)?;
        }

        let quad = Self { vertices };
        if is_degenerate(quad.area(), &vertices) {
            return Err(ShapeError::InvalidConstruction(
                "quadrilateral has zero area".to_string(),
            ));
        }

        Ok(quad)
    }

    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// Intersection of the diagonals p0-p2 and p1-p3
    ///
    /// Falls back to the vertex centroid when the diagonals are parallel.
    pub fn diagonal_intersection(&self) -> Point {
        let [p0, p1, p2, p3] = self.vertices;
        let d1 = p2 - p0;
        let d2 = p3 - p1;
        let denom = d1.cross(d2);
        if denom.abs() < PARALLEL_EPSILON {
            return vertex_centroid(&self.vertices);
        }
        let t = (p1 - p0).cross(d2) / denom;
        p0 + d1 * t
    }
}

impl Shape for ComplexQuad {
    fn area(&self) -> f64 {
        let [p0, p1, p2, p3] = self.vertices;
        let first = (p1 - p0).cross(p2 - p0).abs() / 2.0;
        let second = (p2 - p0).cross(p3 - p0).abs() / 2.0;
        first + second
    }

    fn frame_rect(&self) -> FrameRect {
        FrameRect::from_points(self.vertices).unwrap_or_default()
    }

    fn anchor(&self) -> Point {
        self.diagonal_intersection()
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        let delta = Point::new(dx, dy);
        for v in &mut self.vertices {
            *v = *v + delta;
        }
    }

    fn scale(&mut self, k: f64) {
        let c = self.diagonal_intersection();
        for v in &mut self.vertices {
            *v = v.scaled_about(c, k);
        }
    }

    fn name(&self) -> &str {
        "ComplexQuad"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn box_4x3() -> Polygon {
        Polygon::new(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_box() {
        let poly = box_4x3();
        assert!((poly.area() - 12.0).abs() < EPS);
        assert_eq!(poly.frame_rect(), FrameRect::new(4.0, 3.0, Point::new(2.0, 1.5)));
        assert!(close(poly.centroid(), Point::new(2.0, 1.5)));
    }

    #[test]
    fn test_polygon_winding_does_not_change_area() {
        let cw = Polygon::new(&[
            Point::new(0.0, 3.0),
            Point::new(4.0, 3.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(cw.signed_area() < 0.0);
        assert!((cw.area() - 12.0).abs() < EPS);
        assert!(close(cw.centroid(), Point::new(2.0, 1.5)));
    }

    #[test]
    fn test_polygon_rejects_invalid() {
        assert!(Polygon::new(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).is_err());

        let collinear = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        assert!(matches!(
            Polygon::new(&collinear),
            Err(ShapeError::InvalidConstruction(_))
        ));
    }

    #[test]
    fn test_polygon_centroid_differs_from_frame_center() {
        // Right triangle: centroid is a third of the way along each leg
        let tri = Polygon::new(&[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 3.0)])
            .unwrap();
        assert!(close(tri.centroid(), Point::new(1.0, 1.0)));
        assert_eq!(tri.frame_rect().pos, Point::new(1.5, 1.5));
    }

    #[test]
    fn test_polygon_move_to_places_centroid() {
        let mut tri =
            Polygon::new(&[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 3.0)])
                .unwrap();
        tri.move_to(Point::new(10.0, -10.0));
        assert!(close(tri.centroid(), Point::new(10.0, -10.0)));
        assert!(close(tri.vertices()[0], Point::new(9.0, -11.0)));
    }

    #[test]
    fn test_polygon_scale_about_centroid() {
        let mut poly = box_4x3();
        poly.scale(2.0);
        assert!((poly.area() - 48.0).abs() < EPS);
        assert!(close(poly.centroid(), Point::new(2.0, 1.5)));
        assert!(close(poly.vertices()[0], Point::new(-2.0, -1.5)));
    }

    #[test]
    fn test_regular_polygon() {
        let hex = Polygon::regular(Point::new(1.0, 2.0), 6, 1.0).unwrap();
        assert_eq!(hex.len(), 6);
        assert!(close(hex.centroid(), Point::new(1.0, 2.0)));
        let expected = 3.0 * 3f64.sqrt() / 2.0;
        assert!((hex.area() - expected).abs() < EPS);

        assert!(Polygon::regular(Point::ORIGIN, 2, 1.0).is_err());
        assert!(Polygon::regular(Point::ORIGIN, 5, 0.0).is_err());
    }

    #[test]
    fn test_quad_area_and_anchor() {
        let quad = ComplexQuad::new([
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 2.0),
            Point::new(0.0, 2.0),
        ])
        .unwrap();
        assert!((quad.area() - 8.0).abs() < EPS);
        assert!(close(quad.anchor(), Point::new(2.0, 1.0)));
        assert_eq!(quad.frame_rect(), FrameRect::new(4.0, 2.0, Point::new(2.0, 1.0)));
    }

    #[test]
    fn test_quad_kite_anchor_is_diagonal_intersection() {
        // Kite: diagonals cross at (0, 1), not at the vertex centroid (0, 1.75)
        let kite = ComplexQuad::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 5.0),
            Point::new(-1.0, 1.0),
        ])
        .unwrap();
        assert!(close(kite.anchor(), Point::new(0.0, 1.0)));
        assert!((kite.area() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_quad_scale_keeps_anchor() {
        let mut quad = ComplexQuad::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 5.0),
            Point::new(-1.0, 1.0),
        ])
        .unwrap();
        let before = quad.area();
        quad.scale(3.0);
        assert!(close(quad.anchor(), Point::new(0.0, 1.0)));
        assert!((quad.area() - 9.0 * before).abs() < EPS);
    }

    #[test]
    fn test_polygon_rejects_collinear_with_rounding() {
        // On y = 2x + 0.1; the shoelace sum leaves a residue near 1e-17
        let line = [Point::new(0.1, 0.3), Point::new(0.2, 0.5), Point::new(0.7, 1.5)];
        assert!(matches!(
            Polygon::new(&line),
            Err(ShapeError::InvalidConstruction(_))
        ));

        let flat = [Point::new(0.1, 0.7), Point::new(0.3, 0.7), Point::new(0.9, 0.7)];
        assert!(Polygon::new(&flat).is_err());
    }

    #[test]
    fn test_polygon_accepts_small_triangle() {
        let tiny = Polygon::new(&[
            Point::new(0.0, 0.0),
            Point::new(1e-7, 0.0),
            Point::new(0.0, 1e-7),
        ])
        .unwrap();
        assert!((tiny.area() - 5e-15).abs() < 1e-24);
    }

    #[test]
    fn test_quad_crossed_falls_back_to_vertex_centroid() {
        let bowtie = ComplexQuad::new([
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ])
        .unwrap();
        // Diagonals p0-p2 and p1-p3 are both horizontal
        assert!(close(bowtie.anchor(), Point::new(2.0, 2.0)));
        // Triangles (p0, p1, p2) and (p0, p2, p3) each have area 8
        assert!((bowtie.area() - 16.0).abs() < EPS);
        assert_eq!(bowtie.frame_rect(), FrameRect::new(4.0, 4.0, Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_quad_crossed_scale_keeps_anchor() {
        let mut bowtie = ComplexQuad::new([
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 4.0),
        ])
        .unwrap();
        bowtie.scale(0.5);
        assert!(close(bowtie.anchor(), Point::new(2.0, 2.0)));
        assert!(close(bowtie.vertices()[0], Point::new(1.0, 1.0)));
        assert!((bowtie.area() - 4.0).abs() < EPS);
    }

    #[test]
    fn test_quad_accepts_concave() {
        let dart = ComplexQuad::new([
            Point::new(0.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 4.0),
            Point::new(0.5, 1.0),
        ])
        .unwrap();
        assert!(dart.area() > 0.0);
    }

    #[test]
    fn test_quad_rejects_degenerate() {
        let flat = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        assert!(ComplexQuad::new(flat).is_err());

        let same = [Point::new(1.0, 1.0); 4];
        assert!(ComplexQuad::new(same).is_err());

        let nan = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, f64::NAN),
            Point::new(0.0, 1.0),
        ];
        assert!(ComplexQuad::new(nan).is_err());
    }
}
