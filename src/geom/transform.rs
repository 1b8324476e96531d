//! Affine transform helpers.

use kurbo::{Affine, Rect};

use crate::foundation::error::{SegueError, SegueResult};

const DEGENERATE_EPS: f64 = 1e-12;

/// The unique axis-aligned affine map taking `src` exactly onto `dst`.
///
/// Independent X/Y scale, no rotation. Fails with a geometry error when
/// `src` has (near-)zero width or height; effects must guard degenerate
/// geometry before deriving placement transforms.
pub fn rect_to_rect(src: Rect, dst: Rect) -> SegueResult<Affine> {
    let src = src.abs();
    let dst = dst.abs();

    if src.width() < DEGENERATE_EPS || src.height() < DEGENERATE_EPS {
        return Err(SegueError::geometry(format!(
            "rect_to_rect source rect is degenerate ({} x {})",
            src.width(),
            src.height()
        )));
    }

    let sx = dst.width() / src.width();
    let sy = dst.height() / src.height();
    Ok(Affine::new([
        sx,
        0.0,
        0.0,
        sy,
        dst.x0 - src.x0 * sx,
        dst.y0 - src.y0 * sy,
    ]))
}

/// Compose two transforms: apply `additional` first, then `base`.
///
/// Every call site in the engine follows this convention; mixing orders is
/// the classic silent mis-transform bug.
#[inline]
pub fn compose(base: Affine, additional: Affine) -> Affine {
    base * additional
}

#[inline]
pub fn identity() -> Affine {
    Affine::IDENTITY
}
