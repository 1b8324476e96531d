//! Segue is a raster transition-rendering engine.
//!
//! Given two equally sized frames (an outgoing frame A and an incoming
//! frame B) and a progress fraction in [0,1], a transition effect compiles
//! an ordered list of paint instructions, and a CPU compositor executes that
//! list onto a destination surface.
//!
//! # Pipeline overview
//!
//! 1. **Compile**: `TransitionKind + fraction -> Vec<Instruction>` (which
//!    frame to sample, where, through what transform/clip/opacity)
//! 2. **Composite**: `Instruction list + (Frame A, Frame B) -> Surface`
//!    (strict list order, source-over blending)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless effects**: every fraction is an independent query; the
//!   instruction list is rebuilt per sample and never patched.
//! - **Frames are read-only**: the engine never mutates its inputs, so
//!   frames are safely shared across parallel render workers.
//! - **Premultiplied RGBA8** end-to-end: frames and surfaces carry
//!   premultiplied pixels.
//!
//! # Getting started
//!
//! ```
//! use segue::{Canvas, Frame, Rgba8Premul, TransitionKind, render_frame};
//!
//! let canvas = Canvas::new(8, 4)?;
//! let a = Frame::solid(canvas, Rgba8Premul::from_straight_rgba(255, 0, 0, 255));
//! let b = Frame::solid(canvas, Rgba8Premul::from_straight_rgba(0, 0, 255, 255));
//!
//! let surface = render_frame(&a, &b, 0.5, &TransitionKind::Blend)?;
//! assert_eq!(surface.pixel(0, 0), [127, 0, 128, 255]);
//! # Ok::<(), segue::SegueError>(())
//! ```
#![forbid(unsafe_code)]

mod compositor;
mod foundation;
mod geom;
mod instruction;
mod raster;
mod render;
mod transition;

pub use compositor::blend::{PremulRgba8, over};
pub use compositor::raster::composite;
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{SegueError, SegueResult};
pub use geom::shape::{bounds_of, clip_path};
pub use geom::transform::{compose, identity, rect_to_rect};
pub use instruction::model::{FrameSelector, Instruction};
pub use raster::frame::Frame;
pub use raster::surface::Surface;
pub use render::pipeline::{RenderThreading, render_frame, render_frames};
pub use transition::kind::{Direction, SplitOrientation, TransitionKind};
pub use transition::parse::{TransitionSpec, parse_transition, parse_transition_kind_params};
