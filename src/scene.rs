//! Scene loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files. A scene is
//! a window size, an optional viewport and clear color, and an ordered list of
//! draw commands replayed against a fresh `Renderer`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gl::Renderer;
use crate::rasterizer::{Color, Viewport};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Normalized draw color, components in [0, 1]
    Color(f32, f32, f32),
    /// 8-bit draw color
    ColorRgb(u8, u8, u8),
    Vertex(f64, f64),
    Line(f64, f64, f64, f64),
    Viewport(i32, i32, i32, i32),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub window: (i32, i32),
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub clear_color: Option<(f32, f32, f32)>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Scene {
    /// Two diagonals, a horizontal bar and a center dot inside a 50x50
    /// viewport of a 100x100 window
    pub fn demo() -> Self {
        Self {
            window: (100, 100),
            viewport: Some(Viewport::new(25, 25, 50, 50)),
            clear_color: None,
            commands: vec![
                Command::Color(0.0, 1.0, 1.0),
                Command::Vertex(0.0, 0.0),
                Command::Line(-1.0, -1.0, 1.0, -1.0),
                Command::Line(-0.5, -0.5, 0.5, -0.5),
                Command::Line(-1.0, -1.0, 0.0, 0.0),
                Command::Line(0.0, 0.0, 1.0, -1.0),
                Command::Line(-1.0, 0.0, 1.0, 0.0),
            ],
        }
    }

    /// Build a renderer and replay every command. The first failing command
    /// aborts the replay.
    pub fn render(&self) -> Result<Renderer> {
        let (width, height) = self.window;
        let mut r = Renderer::new(width, height)?;
        if let Some(vp) = self.viewport {
            r.viewport(vp.x, vp.y, vp.width, vp.height);
        }
        if let Some((cr, cg, cb)) = self.clear_color {
            r.clear_color(cr, cg, cb)?;
        }
        for command in &self.commands {
            apply(&mut r, command)?;
        }
        Ok(r)
    }
}

fn apply(r: &mut Renderer, command: &Command) -> Result<()> {
    match *command {
        Command::Color(cr, cg, cb) => r.color(cr, cg, cb)?,
        Command::ColorRgb(cr, cg, cb) => r.set_color(Color::new(cr, cg, cb)),
        Command::Vertex(x, y) => r.vertex(x, y)?,
        Command::Line(x1, y1, x2, y2) => r.line(x1, y1, x2, y2)?,
        Command::Viewport(x, y, w, h) => r.viewport(x, y, w, h),
        Command::Clear => r.clear(),
    }
    Ok(())
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<Scene> {
    Ok(ron::from_str(s)?)
}

pub fn scene_to_string(scene: &Scene) -> Result<String> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(scene, config)?)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    fs::write(path, scene_to_string(scene)?)?;
    Ok(())
}
