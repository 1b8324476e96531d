use anyhow::Context;

use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::{SegueError, SegueResult};

/// An immutable raster frame: **premultiplied** RGBA8, tightly packed,
/// row-major.
///
/// Frames are transition endpoints (A = start, B = end). The engine only
/// ever reads them; a frame constructed before a transition starts stays
/// valid for the transition's entire duration and is safe to share across
/// render workers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap premultiplied RGBA8 bytes. `data.len()` must equal
    /// `width * height * 4`.
    pub fn from_rgba8_premul(width: u32, height: u32, data: Vec<u8>) -> SegueResult<Self> {
        let canvas = Canvas::new(width, height)?;
        let expected = canvas
            .pixel_count()
            .checked_mul(4)
            .ok_or_else(|| SegueError::precondition("frame byte size overflow"))?;
        if data.len() != expected {
            return Err(SegueError::precondition(format!(
                "frame data length {} does not match {}x{} rgba8 ({expected} bytes)",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Internal constructor for buffers whose length is already an invariant.
    pub(crate) fn from_surface_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width as usize) * (height as usize) * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// A frame filled with a single color.
    pub fn solid(canvas: Canvas, color: Rgba8Premul) -> Self {
        let px = color.to_array();
        Self {
            width: canvas.width,
            height: canvas.height,
            data: px.repeat(canvas.pixel_count()),
        }
    }

    /// Decode encoded image bytes (PNG, JPEG, ...) and premultiply.
    pub fn from_image_bytes(bytes: &[u8]) -> SegueResult<Self> {
        let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
        let rgba = dyn_img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut data = rgba.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self::from_rgba8_premul(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Premultiplied RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Read one pixel. `(x, y)` must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
