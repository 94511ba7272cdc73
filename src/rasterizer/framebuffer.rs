//! Framebuffer for software rendering
//!
//! Pixels are stored row-major as BGR bytes, 3 per pixel. Row 0 is the bottom
//! of the image, which is also the first row a bottom-up bitmap stores.

use super::types::Color;
use crate::error::{RenderError, Result};

/// Bytes per stored pixel (blue, green, red)
pub const BYTES_PER_PIXEL: usize = 3;

/// Largest pixel payload whose bitmap still fits the signed 32-bit size fields
const MAX_PIXEL_BYTES: u64 = i32::MAX as u64 - 54;

#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    current_color: Color,
    cleared: bool,
}

impl Framebuffer {
    /// Set dimensions for a new framebuffer. Storage is materialized by `clear`.
    pub fn create(width: i32, height: i32) -> Result<Self> {
        let (width, height) = check_size(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: Vec::new(),
            current_color: Color::BLACK,
            cleared: false,
        })
    }

    /// Change dimensions. Existing contents are dropped and `clear` must run
    /// again before the next draw.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        let (width, height) = check_size(width, height)?;
        self.width = width;
        self.height = height;
        self.pixels = Vec::new();
        self.cleared = false;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Only affects subsequent draws and clears
    pub fn set_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Reallocate the grid at the current size, filled with the current color
    pub fn clear(&mut self) {
        let bgr = self.current_color.to_bgr();
        let count = self.width as usize * self.height as usize;
        self.pixels = bgr.repeat(count);
        self.cleared = true;
    }

    pub fn clear_color(&mut self, color: Color) {
        self.current_color = color;
        self.clear();
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Write the current color at (x, y)
    pub fn point(&mut self, x: i32, y: i32) -> Result<()> {
        self.point_with(x, y, self.current_color)
    }

    /// Write `color` at (x, y) without touching the current color
    pub fn point_with(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        self.check_point(x, y)?;
        let idx = self.index(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_bgr());
        Ok(())
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.cleared || !self.contains(x, y) {
            return None;
        }
        let idx = self.index(x, y);
        let mut bgr = [0u8; BYTES_PER_PIXEL];
        bgr.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(Color::from_bgr(bgr))
    }

    /// Rows in storage order (bottom first), each `width * 3` BGR bytes
    pub fn rows(&self) -> Result<impl Iterator<Item = &[u8]>> {
        self.ensure_cleared()?;
        // chunks_exact panics on 0; an empty grid yields no rows either way
        let row_len = (self.width as usize * BYTES_PER_PIXEL).max(1);
        Ok(self.pixels.chunks_exact(row_len))
    }

    /// Raw BGR storage, bottom row first
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.ensure_cleared()?;
        Ok(&self.pixels)
    }

    /// Bounds and initialization check shared by every write
    pub(crate) fn check_point(&self, x: i32, y: i32) -> Result<()> {
        self.ensure_cleared()?;
        if !self.contains(x, y) {
            return Err(RenderError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    fn ensure_cleared(&self) -> Result<()> {
        if self.cleared {
            Ok(())
        } else {
            Err(RenderError::NotCleared {
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

fn check_size(width: i32, height: i32) -> Result<(u32, u32)> {
    if width < 0 || height < 0 {
        return Err(RenderError::Configuration(format!(
            "window size {}x{} is negative",
            width, height
        )));
    }
    let bytes = width as u64 * height as u64 * BYTES_PER_PIXEL as u64;
    if bytes > MAX_PIXEL_BYTES {
        return Err(RenderError::Configuration(format!(
            "window size {}x{} is too large for a bitmap",
            width, height
        )));
    }
    Ok((width as u32, height as u32))
}
