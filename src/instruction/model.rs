use kurbo::{Affine, BezPath, Rect, Shape};

use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::SegueResult;
use crate::geom::shape::clip_path;
use crate::geom::transform::rect_to_rect;

/// Which source frame an [`Instruction::ImageDraw`] samples from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameSelector {
    /// The outgoing frame (transition start).
    A,
    /// The incoming frame (transition end).
    B,
}

/// A single paint operation.
///
/// Transition effects emit ordered lists of instructions; the compositor
/// executes them in list order with source-over blending, so later
/// instructions paint over earlier ones. That total order is the only
/// compositing guarantee.
///
/// Common parameters across variants:
/// - `opacity` in [0,1], clamped at construction, never rejected.
/// - `transform`: maps source space into destination space; `None` means
///   identity (1:1 placement at the origin).
/// - `clip`: destination-space region; pixels outside it are left
///   untouched. `None` means paint everywhere.
///
/// Constructors deep-copy all geometry. Instructions are render-time-only
/// values: rebuilt for every fraction, never persisted, never compared.
#[derive(Clone, Debug)]
pub enum Instruction {
    /// Sample pixels from frame A or B and paint them into the destination.
    ImageDraw {
        source: FrameSelector,
        opacity: f32,
        transform: Option<Affine>,
        clip: Option<BezPath>,
    },
    /// Fill a destination-space shape with a solid color (no sampling).
    ShapeFill {
        shape: BezPath,
        color: Rgba8Premul,
        opacity: f32,
        transform: Option<Affine>,
        clip: Option<BezPath>,
    },
}

impl Instruction {
    /// A fully opaque image draw, anchored at the origin, unclipped.
    pub fn image(source: FrameSelector) -> Self {
        Self::ImageDraw {
            source,
            opacity: 1.0,
            transform: None,
            clip: None,
        }
    }

    /// An image draw whose transform is derived from a destination rect:
    /// the full source frame is mapped onto `dest`.
    pub fn image_rect(source: FrameSelector, canvas: Canvas, dest: Rect) -> SegueResult<Self> {
        let transform = rect_to_rect(canvas.rect(), dest)?;
        Ok(Self::image(source).with_transform(transform))
    }

    /// A solid fill of `shape` (deep-copied) in destination space.
    pub fn fill<S: Shape>(shape: &S, color: Rgba8Premul) -> Self {
        Self::ShapeFill {
            shape: clip_path(shape),
            color,
            opacity: 1.0,
            transform: None,
            clip: None,
        }
    }

    /// Replace the opacity, clamping into [0,1]. NaN is treated as 0.
    pub fn with_opacity(mut self, value: f32) -> Self {
        let value = clamp_unit(value);
        match &mut self {
            Self::ImageDraw { opacity, .. } | Self::ShapeFill { opacity, .. } => *opacity = value,
        }
        self
    }

    /// Replace the source-to-destination transform.
    pub fn with_transform(mut self, value: Affine) -> Self {
        match &mut self {
            Self::ImageDraw { transform, .. } | Self::ShapeFill { transform, .. } => {
                *transform = Some(value);
            }
        }
        self
    }

    /// Replace the clip region (deep-copied from any shape).
    pub fn with_clip<S: Shape>(mut self, value: &S) -> Self {
        let value = clip_path(value);
        match &mut self {
            Self::ImageDraw { clip, .. } | Self::ShapeFill { clip, .. } => *clip = Some(value),
        }
        self
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Self::ImageDraw { opacity, .. } | Self::ShapeFill { opacity, .. } => *opacity,
        }
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/instruction/model.rs"]
mod tests;
