//! Scene - composite operations over a collection of shapes
//!
//! The free functions work on any slice of boxed shapes; `Scene`
//! is an owning, named collection built on top of them.
//!
//! ## Scale About a Point
//!
//! Scaling a collection by `k` about a fixed point `p*` maps every
//! geometric point `q` to `p* + k * (q - p*)`. Per figure this is done
//! in two steps:
//!
//! 1. move the anchor `a` to `p* + k * (a - p*)`
//! 2. scale the figure by `k` about its (new) anchor

use super::geometry::{FrameRect, Point};
use super::traits::{check_scale, BoxedShape, Shape, ShapeError};

/// Sum of all areas, in index order; 0 for an empty slice
pub fn total_area(shapes: &[BoxedShape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

/// Smallest frame containing every figure's frame
///
/// The extremes are seeded from the first figure, so collections lying
/// entirely in one half-plane get a tight frame. An empty slice yields
/// the zero frame at the origin.
pub fn total_frame_rect(shapes: &[BoxedShape]) -> FrameRect {
    let mut iter = shapes.iter().map(|s| s.frame_rect());
    match iter.next() {
        Some(first) => iter.fold(first, |acc, frame| acc.union(&frame)),
        None => FrameRect::zero(),
    }
}

/// Scale every figure by `k` about the fixed point `base`
///
/// `k` is validated once up front; on `InvalidScale` no figure is touched.
/// Figures are processed in index order and independently of each other.
pub fn scale_about(shapes: &mut [BoxedShape], base: Point, k: f64) -> Result<(), ShapeError> {
    check_scale(k)?;

    for shape in shapes.iter_mut() {
        let anchor = shape.anchor();
        let target = anchor.scaled_about(base, k);
        shape.move_to(target);
        shape.scale(k);
        log::debug!("Scaled {}: anchor {} -> {}", shape.name(), anchor, target);
    }

    log::info!("Scaled {} figures by {} about {}", shapes.len(), k, base);
    Ok(())
}

/// A named collection that owns its figures
pub struct Scene {
    /// Figures in insertion order
    shapes: Vec<BoxedShape>,
    /// Name of the scene
    name: String,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shapes: Vec::new(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a figure to the scene
    pub fn add<S: Shape + 'static>(&mut self, shape: S) -> &mut Self {
        self.shapes.push(Box::new(shape));
        self
    }

    /// Add the result of a fallible constructor
    ///
    /// On error the scene is left as it was and the error is returned,
    /// so a builder can bail out with `?` and drop everything built so far.
    pub fn try_add<S: Shape + 'static>(
        &mut self,
        shape: Result<S, ShapeError>,
    ) -> Result<&mut Self, ShapeError> {
        self.shapes.push(Box::new(shape?));
        Ok(self)
    }

    /// Remove a figure by index
    pub fn remove(&mut self, index: usize) -> Option<BoxedShape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Get the number of figures
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if scene is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get a reference to a figure
    pub fn get(&self, index: usize) -> Option<&dyn Shape> {
        self.shapes.get(index).map(|s| s.as_ref())
    }

    /// Get a mutable reference to a figure
    pub fn get_mut(&mut self, index: usize) -> Option<&mut BoxedShape> {
        self.shapes.get_mut(index)
    }

    /// Iterate over figures
    pub fn iter(&self) -> std::slice::Iter<'_, BoxedShape> {
        self.shapes.iter()
    }

    pub fn shapes(&self) -> &[BoxedShape] {
        &self.shapes
    }

    pub fn total_area(&self) -> f64 {
        total_area(&self.shapes)
    }

    pub fn frame_rect(&self) -> FrameRect {
        total_frame_rect(&self.shapes)
    }

    /// Scale the whole scene by `k` about `base`; see [`scale_about`]
    pub fn scale_about(&mut self, base: Point, k: f64) -> Result<(), ShapeError> {
        scale_about(&mut self.shapes, base, k)
    }
}
