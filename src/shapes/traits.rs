//! Shape trait definition
//!
//! The `Shape` trait is the contract every planar figure honors:
//! two pure queries (area, frame rectangle) and three mutators
//! (move to, move by, scale about the figure's own anchor).
//!
//! ## Anchors
//!
//! Every figure has one designated reference point, its *anchor*:
//!
//! - centered figures use their center
//! - `ComplexQuad` uses the intersection of its diagonals
//! - `Polygon` uses its signed-area centroid
//!
//! `move_to` places the anchor, `scale` keeps it fixed.

use thiserror::Error;

use super::geometry::{FrameRect, Point};

/// Errors raised by figure construction and checked mutators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Invalid figure parameters: {0}")]
    InvalidConstruction(String),

    #[error("Invalid scale factor {0} (must be finite and > 0)")]
    InvalidScale(f64),
}

/// Reject a scale factor that is not a finite positive number
pub fn check_scale(k: f64) -> Result<(), ShapeError> {
    if k.is_finite() && k > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::InvalidScale(k))
    }
}

/// A planar figure
///
/// Implementors only need to provide the queries, `anchor`, `move_by`
/// and the unchecked `scale`; `move_to` and `try_scale` are derived.
pub trait Shape {
    /// Area of the figure, never negative
    fn area(&self) -> f64;

    /// Tightest axis-aligned rectangle enclosing the figure
    fn frame_rect(&self) -> FrameRect;

    /// The figure's reference point for `move_to` and `scale`
    fn anchor(&self) -> Point;

    /// Translate by the given delta
    fn move_by(&mut self, dx: f64, dy: f64);

    /// Multiply every linear dimension by `k` about the anchor
    ///
    /// The caller guarantees `k > 0`; use `try_scale` when that is
    /// not already established.
    fn scale(&mut self, k: f64);

    /// Name of this figure (for reports)
    fn name(&self) -> &str;

    /// Translate so that the anchor lands on `p`
    fn move_to(&mut self, p: Point) {
        let anchor = self.anchor();
        self.move_by(p.x - anchor.x, p.y - anchor.y);
    }

    /// Checked scale: rejects `k <= 0` and non-finite factors
    fn try_scale(&mut self, k: f64) -> Result<(), ShapeError> {
        check_scale(k)?;
        self.scale(k);
        Ok(())
    }
}

/// A boxed shape for dynamic dispatch
///
/// Collections of mixed figures store `Box<dyn Shape>`.
pub type BoxedShape = Box<dyn Shape>;

/// Validate that a dimensional parameter is finite and strictly positive
pub(crate) fn positive(name: &str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidConstruction(format!(
            "{} must be a finite positive number, got {}",
            name, value
        )))
    }
}

/// Validate that a point has finite coordinates
pub(crate) fn finite(name: &str, p: Point) -> Result<Point, ShapeError> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(ShapeError::InvalidConstruction(format!(
            "{} must have finite coordinates, got {}",
            name, p
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_scale() {
        assert!(check_scale(1.0).is_ok());
        assert!(check_scale(1e-9).is_ok());
        assert_eq!(check_scale(0.0), Err(ShapeError::InvalidScale(0.0)));
        assert_eq!(check_scale(-2.0), Err(ShapeError::InvalidScale(-2.0)));
        assert!(check_scale(f64::NAN).is_err());
        assert!(check_scale(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validators() {
        assert_eq!(positive("side", 2.5), Ok(2.5));
        assert!(positive("side", 0.0).is_err());
        assert!(positive("side", -1.0).is_err());
        assert!(finite("center", Point::new(f64::NAN, 0.0)).is_err());
    }
}
