use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{SegueError, SegueResult};
use crate::raster::frame::Frame;

/// A mutable destination raster: premultiplied RGBA8, tightly packed,
/// row-major. The compositor writes here and nowhere else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// A surface cleared to transparent.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.pixel_count() * 4],
        }
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

    /// Overwrite one pixel. `(x, y)` must be in bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        debug_assert!(x < self.width && y < self.height);
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data[idx..idx + 4].copy_from_slice(&px);
    }

    /// Freeze the surface into an immutable frame (no copy).
    pub fn into_frame(self) -> Frame {
        Frame::from_surface_parts(self.width, self.height, self.data)
    }

    /// Unpremultiplied (straight-alpha) RGBA8 bytes, for image encoders.
    pub fn to_rgba8_straight(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 {
                px[0] = 0;
                px[1] = 0;
                px[2] = 0;
                continue;
            }
            px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
            px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
        }
        out
    }

    /// Encode as PNG (straight alpha) at `path`.
    pub fn write_png(&self, path: impl AsRef<Path>) -> SegueResult<()> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_rgba8_straight())
            .ok_or_else(|| SegueError::contract("surface buffer does not match dimensions"))?;
        img.save(path)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
