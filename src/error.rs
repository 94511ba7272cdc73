//! Error types for the renderer

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// Window size or color outside what the renderer accepts
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A plotted pixel fell outside the framebuffer
    #[error("pixel ({x}, {y}) is outside the {width}x{height} framebuffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// Storage has not been materialized for the current window size
    #[error("framebuffer ({width}x{height}) must be cleared before use")]
    NotCleared { width: u32, height: u32 },

    /// Bytes that do not start with the 24-bit header this crate writes
    #[error("invalid bitmap: {0}")]
    InvalidBitmap(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("scene parse error: {0}")]
    SceneParse(#[from] ron::error::SpannedError),

    #[error("scene serialize error: {0}")]
    SceneSerialize(#[from] ron::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
