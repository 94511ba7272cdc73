//! Core types for the rasterizer

use serde::{Deserialize, Serialize};

use super::math::ndc_to_pixel;
use crate::error::{RenderError, Result};

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };
    pub const CYAN: Color = Color { r: 0, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from components in [0, 1], each mapped to round(c * 255)
    pub fn from_normalized(r: f32, g: f32, b: f32) -> Result<Self> {
        Ok(Self {
            r: normalized_channel(r)?,
            g: normalized_channel(g)?,
            b: normalized_channel(b)?,
        })
    }

    /// Storage and file order
    pub fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    pub fn from_bgr(bytes: [u8; 3]) -> Self {
        Self { r: bytes[2], g: bytes[1], b: bytes[0] }
    }
}

fn normalized_channel(c: f32) -> Result<u8> {
    // Also rejects NaN
    if !(0.0..=1.0).contains(&c) {
        return Err(RenderError::Configuration(format!(
            "color component {} is outside [0, 1]",
            c
        )));
    }
    Ok((c * 255.0).round() as u8)
}

/// Pixel-space rectangle that NDC coordinates map into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Map an NDC pair to integer pixel coordinates
    pub fn to_pixel(&self, ndc_x: f64, ndc_y: f64) -> Result<(i32, i32)> {
        if !ndc_x.is_finite() || !ndc_y.is_finite() {
            return Err(RenderError::NonFiniteCoordinate { x: ndc_x, y: ndc_y });
        }
        Ok((
            ndc_to_pixel(ndc_x, self.x, self.width),
            ndc_to_pixel(ndc_y, self.y, self.height),
        ))
    }
}
