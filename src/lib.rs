//! softgl: immediate-mode software line rasterizer
//!
//! A framebuffer with an OpenGL-flavoured API on top:
//! - NDC coordinates mapped through a pixel viewport
//! - Bresenham lines in every octant
//! - Output as an uncompressed 24-bit bitmap, or any format `image` writes
//! - RON scene files replayed against a renderer

pub mod bmp;
pub mod error;
pub mod gl;
pub mod rasterizer;
pub mod scene;

pub use error::{RenderError, Result};
pub use gl::Renderer;
pub use rasterizer::{Color, Framebuffer, Viewport};
pub use scene::{Command, Scene};
