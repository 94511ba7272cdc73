//! Immediate-mode drawing session
//!
//! `Renderer` owns the framebuffer and the viewport. Coordinates passed to
//! `vertex` and `line` are NDC, mapped through the viewport before they are
//! rasterized.

use std::path::Path;

use log::{debug, info, trace};

use crate::bmp;
use crate::error::Result;
use crate::rasterizer::{Color, Framebuffer, Viewport};

#[derive(Debug, Clone)]
pub struct Renderer {
    fb: Framebuffer,
    viewport: Viewport,
}

impl Renderer {
    /// Create a `width` x `height` window with a full-window viewport, cleared
    /// to black and ready to draw.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let mut fb = Framebuffer::create(width, height)?;
        fb.clear();
        debug!("created {}x{} window", width, height);
        Ok(Self {
            fb,
            viewport: Viewport::new(0, 0, width, height),
        })
    }

    /// Resize the window. Contents are dropped; `clear` must run before the
    /// next draw. The viewport is left as it was.
    pub fn create_window(&mut self, width: i32, height: i32) -> Result<()> {
        self.fb.resize(width, height)?;
        debug!("resized window to {}x{}", width, height);
        Ok(())
    }

    /// Applies to subsequent draws only
    pub fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.viewport = Viewport::new(x, y, width, height);
        debug!("viewport set to ({}, {}) {}x{}", x, y, width, height);
    }

    pub fn current_viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn clear(&mut self) {
        self.fb.clear();
        debug!("cleared to {:?}", self.fb.current_color());
    }

    /// Set a normalized draw color, then clear with it
    pub fn clear_color(&mut self, r: f32, g: f32, b: f32) -> Result<()> {
        self.color(r, g, b)?;
        self.clear();
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) {
        self.fb.set_color(color);
    }

    /// Set the draw color from components in [0, 1]
    pub fn color(&mut self, r: f32, g: f32, b: f32) -> Result<()> {
        self.fb.set_color(Color::from_normalized(r, g, b)?);
        Ok(())
    }

    /// Plot a single point at NDC (x, y)
    pub fn vertex(&mut self, x: f64, y: f64) -> Result<()> {
        let (px, py) = self.viewport.to_pixel(x, y)?;
        self.fb.point(px, py)
    }

    /// Draw a line between two NDC points
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        let (px1, py1) = self.viewport.to_pixel(x1, y1)?;
        let (px2, py2) = self.viewport.to_pixel(x2, y2)?;
        trace!("line ({}, {}) -> ({}, {})", px1, py1, px2, py2);
        self.fb.draw_line(px1, py1, px2, py2)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Write the framebuffer to `path`. `.bmp` or no extension uses the
    /// fixed 24-bit encoder, anything else is handed to `image`.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if bmp::is_bmp_path(path) {
            bmp::save_bmp(&self.fb, path)?;
        } else {
            bmp::export(&self.fb, path)?;
        }
        info!(
            "wrote {}x{} image to {}",
            self.fb.width(),
            self.fb.height(),
            path.display()
        );
        Ok(())
    }

    /// Write the image and end the session
    pub fn finish<P: AsRef<Path>>(self, path: P) -> Result<()> {
        self.write(path)
    }
}
