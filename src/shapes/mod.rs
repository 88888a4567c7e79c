//! Shapes module - planar figures and composite operations
//!
//! This module provides:
//! - `Point` and `FrameRect` geometry primitives
//! - `Shape` trait for abstracting over different figure types
//! - Centered figures: Rectangle, Square, Diamond, Ring
//! - Vertex-based figures: Polygon, ComplexQuad
//! - Composite operations (total area, total frame, scale about a point)

mod geometry;
mod polygon;
mod primitives;
mod scene;
mod traits;

pub use geometry::{FrameRect, Point};
pub use polygon::{signed_area, ComplexQuad, Polygon};
pub use primitives::{Diamond, Rectangle, Ring, Square};
pub use scene::{scale_about, total_area, total_frame_rect, Scene};
pub use traits::{check_scale, BoxedShape, Shape, ShapeError};
