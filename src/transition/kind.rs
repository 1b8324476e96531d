use kurbo::{Affine, Rect};

use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::instruction::model::{FrameSelector, Instruction};

/// Sweep direction for directional effects (wipe, push).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

/// Axis along which a split's centered band grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitOrientation {
    /// Band spans the full height and grows in width.
    Horizontal,
    /// Band spans the full width and grows in height.
    Vertical,
}

/// A transition effect family.
///
/// Each kind is a pure function of `fraction`: it compiles the ordered
/// instruction list for that single progress sample and keeps no state
/// between samples. Every kind satisfies the boundary contract: at
/// fraction 0 the list renders pixel-identically to frame A alone, at
/// fraction 1 to frame B alone.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionKind {
    /// Dissolve: A stays put while B fades in on top.
    Blend,
    /// A straight edge sweeps across the canvas revealing B.
    Wipe { dir: Direction },
    /// B slides in, pushing A off the canvas.
    Push { dir: Direction },
    /// Barn doors: a centered band of B expands (`out = false`), or a
    /// shrinking band of A uncovers B (`out = true`).
    Split {
        orientation: SplitOrientation,
        out: bool,
    },
    /// A fades to a solid color, then the color fades to B.
    Fade { color: Rgba8Premul },
}

impl TransitionKind {
    /// Compile the instruction list for one progress sample.
    ///
    /// `fraction` is expected in [0,1]; the render pipeline clamps before
    /// calling. The returned list is rebuilt on every call; effects never
    /// patch a previous list.
    pub fn instructions(&self, fraction: f64, canvas: Canvas) -> Vec<Instruction> {
        match self {
            Self::Blend => blend(fraction),
            Self::Wipe { dir } => wipe(fraction, canvas, *dir),
            Self::Push { dir } => push(fraction, canvas, *dir),
            Self::Split { orientation, out } => split(fraction, canvas, *orientation, *out),
            Self::Fade { color } => fade(fraction, canvas, *color),
        }
    }
}

/// The canonical smoke-test effect: source-over blending does the
/// interpolation, `B` at `opacity = fraction` over an opaque `A`.
fn blend(fraction: f64) -> Vec<Instruction> {
    vec![
        Instruction::image(FrameSelector::A),
        Instruction::image(FrameSelector::B).with_opacity(fraction as f32),
    ]
}

/// Unclipped A underneath, B clipped to the swept region on top. The clip
/// rects partition the canvas, so every pixel shows exactly one frame. At
/// the boundaries the swept rect is zero-area and simply contributes no
/// pixels.
fn wipe(fraction: f64, canvas: Canvas, dir: Direction) -> Vec<Instruction> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let region = match dir {
        Direction::LeftToRight => Rect::new(0.0, 0.0, fraction * w, h),
        Direction::RightToLeft => Rect::new(w - fraction * w, 0.0, w, h),
        Direction::TopToBottom => Rect::new(0.0, 0.0, w, fraction * h),
        Direction::BottomToTop => Rect::new(0.0, h - fraction * h, w, h),
    };

    vec![
        Instruction::image(FrameSelector::A),
        Instruction::image(FrameSelector::B).with_clip(&region),
    ]
}

/// Both frames translate rigidly; B trails one canvas behind the sweep so
/// the pair always tiles the canvas exactly.
fn push(fraction: f64, canvas: Canvas, dir: Direction) -> Vec<Instruction> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let (a_offset, b_offset) = match dir {
        Direction::LeftToRight => ((fraction * w, 0.0), (fraction * w - w, 0.0)),
        Direction::RightToLeft => ((-fraction * w, 0.0), (w - fraction * w, 0.0)),
        Direction::TopToBottom => ((0.0, fraction * h), (0.0, fraction * h - h)),
        Direction::BottomToTop => ((0.0, -fraction * h), (0.0, h - fraction * h)),
    };

    vec![
        Instruction::image(FrameSelector::A).with_transform(Affine::translate(a_offset)),
        Instruction::image(FrameSelector::B).with_transform(Affine::translate(b_offset)),
    ]
}

fn split(
    fraction: f64,
    canvas: Canvas,
    orientation: SplitOrientation,
    out: bool,
) -> Vec<Instruction> {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    // `out` flips the roles: the band belongs to the shrinking A overlay.
    let (top, band_fraction) = if out {
        (FrameSelector::A, 1.0 - fraction)
    } else {
        (FrameSelector::B, fraction)
    };
    let under = match top {
        FrameSelector::A => FrameSelector::B,
        FrameSelector::B => FrameSelector::A,
    };

    let band = match orientation {
        SplitOrientation::Horizontal => {
            let half = band_fraction * w / 2.0;
            Rect::new(w / 2.0 - half, 0.0, w / 2.0 + half, h)
        }
        SplitOrientation::Vertical => {
            let half = band_fraction * h / 2.0;
            Rect::new(0.0, h / 2.0 - half, w, h / 2.0 + half)
        }
    };

    vec![
        Instruction::image(under),
        Instruction::image(top).with_clip(&band),
    ]
}

/// Fade through a solid color: the overlay peaks at full opacity at the
/// midpoint, where the canvas is exactly the fill color.
fn fade(fraction: f64, canvas: Canvas, color: Rgba8Premul) -> Vec<Instruction> {
    let (base, overlay_opacity) = if fraction <= 0.5 {
        (FrameSelector::A, fraction * 2.0)
    } else {
        (FrameSelector::B, (1.0 - fraction) * 2.0)
    };

    vec![
        Instruction::image(base),
        Instruction::fill(&canvas.rect(), color).with_opacity(overlay_opacity as f32),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/transition/kind.rs"]
mod tests;
