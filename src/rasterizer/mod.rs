//! Software line rasterizer
//!
//! - Framebuffer of 24-bit colors with a current draw color
//! - Affine viewport transform from NDC into pixels
//! - Integer Bresenham lines in all octants

mod framebuffer;
mod math;
mod render;
mod types;

pub use framebuffer::*;
pub use math::*;
pub use render::*;
pub use types::*;
