use kurbo::{Affine, BezPath, Point, Rect, Shape};

use crate::compositor::blend::over;
use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::{SegueError, SegueResult};
use crate::instruction::model::{FrameSelector, Instruction};
use crate::raster::frame::Frame;
use crate::raster::surface::Surface;

const INVERTIBLE_EPS: f64 = 1e-12;

/// Execute an instruction list strictly in order against the two source
/// frames, painting onto `dest`.
///
/// `frame_a` and `frame_b` must share dimensions; the destination may be any
/// size (instructions with scaling transforms place pixels wherever they
/// land). Only `dest` is mutated.
///
/// Coverage rule: a destination pixel is touched iff its center
/// `(x + 0.5, y + 0.5)` lies inside the instruction's clip (and, for fills,
/// the fill shape) under nonzero winding. No antialiasing: clip regions that
/// partition the canvas paint every pixel exactly once.
pub fn composite(
    frame_a: &Frame,
    frame_b: &Frame,
    instructions: &[Instruction],
    dest: &mut Surface,
) -> SegueResult<()> {
    if frame_a.canvas() != frame_b.canvas() {
        return Err(SegueError::precondition(format!(
            "frame size mismatch: A is {}x{}, B is {}x{}",
            frame_a.width(),
            frame_a.height(),
            frame_b.width(),
            frame_b.height()
        )));
    }

    for ins in instructions {
        match ins {
            Instruction::ImageDraw {
                source,
                opacity,
                transform,
                clip,
            } => {
                let frame = match source {
                    FrameSelector::A => frame_a,
                    FrameSelector::B => frame_b,
                };
                draw_image(frame, *opacity, transform.as_ref(), clip.as_ref(), dest)?;
            }
            Instruction::ShapeFill {
                shape,
                color,
                opacity,
                transform,
                clip,
            } => fill_shape(shape, *color, *opacity, transform.as_ref(), clip.as_ref(), dest),
        }
    }

    Ok(())
}

fn draw_image(
    frame: &Frame,
    opacity: f32,
    transform: Option<&Affine>,
    clip: Option<&BezPath>,
    dest: &mut Surface,
) -> SegueResult<()> {
    if opacity <= 0.0 {
        return Ok(());
    }

    let transform = transform.copied().unwrap_or(Affine::IDENTITY);
    if transform.determinant().abs() < INVERTIBLE_EPS {
        // Authoring bug in the emitting effect, never swallowed.
        return Err(SegueError::contract(
            "ImageDraw transform is not invertible",
        ));
    }
    let inv = transform.inverse();

    let src_rect = Rect::new(
        0.0,
        0.0,
        f64::from(frame.width()),
        f64::from(frame.height()),
    );
    let mut region = transform.transform_rect_bbox(src_rect);
    if let Some(clip) = clip {
        region = region.intersect(clip.bounding_box());
    }
    let Some((x0, x1, y0, y1)) = pixel_span(region, dest.canvas()) else {
        return Ok(());
    };

    let (sw, sh) = (i64::from(frame.width()), i64::from(frame.height()));
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if clip.is_some_and(|c| !c.contains(center)) {
                continue;
            }

            let src_pt = inv * center;
            let sx = src_pt.x.floor() as i64;
            let sy = src_pt.y.floor() as i64;
            if sx < 0 || sy < 0 || sx >= sw || sy >= sh {
                continue;
            }

            let src_px = frame.pixel(sx as u32, sy as u32);
            let blended = over(dest.pixel(x, y), src_px, opacity);
            dest.put_pixel(x, y, blended);
        }
    }

    Ok(())
}

fn fill_shape(
    shape: &BezPath,
    color: Rgba8Premul,
    opacity: f32,
    transform: Option<&Affine>,
    clip: Option<&BezPath>,
    dest: &mut Surface,
) {
    if opacity <= 0.0 {
        return;
    }

    // Forward-transform the shape into destination space; a degenerate
    // transform collapses it to zero coverage rather than erroring.
    let path = match transform {
        Some(t) => *t * shape.clone(),
        None => shape.clone(),
    };

    let mut region = path.bounding_box();
    if let Some(clip) = clip {
        region = region.intersect(clip.bounding_box());
    }
    let Some((x0, x1, y0, y1)) = pixel_span(region, dest.canvas()) else {
        return;
    };

    let src_px = color.to_array();
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if !path.contains(center) {
                continue;
            }
            if clip.is_some_and(|c| !c.contains(center)) {
                continue;
            }

            let blended = over(dest.pixel(x, y), src_px, opacity);
            dest.put_pixel(x, y, blended);
        }
    }
}

/// Clamp a destination-space region to the surface's pixel grid. Returns
/// `None` when nothing is covered; degenerate clips at transition
/// boundaries land here and must stay a no-op.
fn pixel_span(region: Rect, canvas: Canvas) -> Option<(u32, u32, u32, u32)> {
    if region.x1 <= region.x0 || region.y1 <= region.y0 {
        return None;
    }

    let x0 = region.x0.floor().max(0.0) as u32;
    let y0 = region.y0.floor().max(0.0) as u32;
    let x1 = region.x1.ceil().min(f64::from(canvas.width)).max(0.0) as u32;
    let y1 = region.y1.ceil().min(f64::from(canvas.height)).max(0.0) as u32;

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0, x1, y0, y1))
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/raster.rs"]
mod tests;
