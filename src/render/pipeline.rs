use rayon::prelude::*;

use crate::compositor::raster::composite;
use crate::foundation::error::{SegueError, SegueResult};
use crate::raster::frame::Frame;
use crate::raster::surface::Surface;
use crate::transition::kind::TransitionKind;

/// Render one transition sample: compile the effect's instruction list for
/// `fraction` and composite it onto a fresh surface sized like the frames.
///
/// This is the single entry point per effect. Frames must share dimensions.
/// Finite fractions outside [0,1] are clamped; non-finite fractions are
/// rejected as a precondition error.
///
/// The computation is deterministic: identical inputs produce byte-identical
/// surfaces.
#[tracing::instrument(skip(frame_a, frame_b, transition))]
pub fn render_frame(
    frame_a: &Frame,
    frame_b: &Frame,
    fraction: f64,
    transition: &TransitionKind,
) -> SegueResult<Surface> {
    if frame_a.canvas() != frame_b.canvas() {
        return Err(SegueError::precondition(format!(
            "frame size mismatch: A is {}x{}, B is {}x{}",
            frame_a.width(),
            frame_a.height(),
            frame_b.width(),
            frame_b.height()
        )));
    }
    if !fraction.is_finite() {
        return Err(SegueError::precondition("fraction must be finite"));
    }
    let fraction = fraction.clamp(0.0, 1.0);

    let instructions = transition.instructions(fraction, frame_a.canvas());
    tracing::debug!(
        count = instructions.len(),
        fraction,
        "compiled transition instructions"
    );

    let mut dest = Surface::new(frame_a.canvas());
    composite(frame_a, frame_b, &instructions, &mut dest)?;
    Ok(dest)
}

#[derive(Clone, Debug, Default)]
/// Threading controls for multi-sample rendering.
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// Render many independent fraction samples of the same transition.
///
/// Each sample owns its destination surface; the source frames are shared
/// read-only, so parallel mode needs no locking. Output order matches
/// `fractions` regardless of threading.
pub fn render_frames(
    frame_a: &Frame,
    frame_b: &Frame,
    fractions: &[f64],
    transition: &TransitionKind,
    threading: &RenderThreading,
) -> SegueResult<Vec<Surface>> {
    if !threading.parallel {
        return fractions
            .iter()
            .map(|&f| render_frame(frame_a, frame_b, f, transition))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        fractions
            .par_iter()
            .map(|&f| render_frame(frame_a, frame_b, f, transition))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> SegueResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SegueError::precondition(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
