//! Shape normalization helpers.
//!
//! Instructions never alias caller-owned geometry: any `kurbo::Shape` handed
//! to a constructor is flattened into an owned [`BezPath`] first, so later
//! caller mutation of the original cannot change what gets rendered.

use kurbo::{BezPath, Rect, Shape};

/// Path-flattening tolerance for curve-to-line conversion, in pixels.
const PATH_TOLERANCE: f64 = 0.1;

/// Tight axis-aligned bounding box of an arbitrary shape.
pub fn bounds_of<S: Shape>(shape: &S) -> Rect {
    shape.bounding_box()
}

/// Normalize an arbitrary shape into an owned clip path (a deep copy).
pub fn clip_path<S: Shape>(shape: &S) -> BezPath {
    shape.to_path(PATH_TOLERANCE)
}
