//! Line rasterization

use super::framebuffer::Framebuffer;
use crate::error::Result;

/// Pixels of a segment in walk order.
///
/// Integer Bresenham walk along the major axis. Steep segments are transposed
/// so the walk always advances along x, and endpoints are ordered so x only
/// increases, which makes the pixel set independent of endpoint order.
/// Exactly one pixel is yielded per major-axis step, both endpoints included.
#[derive(Debug, Clone)]
pub struct LinePoints {
    steep: bool,
    x: i64,
    x_end: i64,
    y: i64,
    step: i64,
    dx: i64,
    dy: i64,
    // Stays within [-dx, dx) between steps
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (mut x1, mut y1, mut x2, mut y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);

        let steep = (y2 - y1).abs() > (x2 - x1).abs();
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
        }
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }

        Self {
            steep,
            x: x1,
            x_end: x2,
            y: y1,
            step: if y1 < y2 { 1 } else { -1 },
            dx: x2 - x1,
            dy: (y2 - y1).abs(),
            err: 0,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        // Every coordinate lies between the i32 endpoints
        let point = if self.steep {
            (self.y as i32, self.x as i32)
        } else {
            (self.x as i32, self.y as i32)
        };

        if self.x == self.x_end {
            self.done = true;
        } else {
            self.x += 1;
            self.err += 2 * self.dy;
            if self.err >= self.dx {
                self.y += self.step;
                self.err -= 2 * self.dx;
            }
        }
        Some(point)
    }
}

/// Rasterize the segment (x1, y1)-(x2, y2), calling `plot` once per pixel
pub fn rasterize_line<F: FnMut(i32, i32)>(x1: i32, y1: i32, x2: i32, y2: i32, mut plot: F) {
    for (x, y) in LinePoints::new(x1, y1, x2, y2) {
        plot(x, y);
    }
}

impl Framebuffer {
    /// Draw a line in pixel coordinates with the current color.
    ///
    /// Both endpoints are validated before anything is written; every pixel of
    /// the line lies in their bounding box, so a failing call leaves the
    /// framebuffer untouched.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        self.check_point(x1, y1)?;
        self.check_point(x2, y2)?;

        let mut plotted = Ok(());
        rasterize_line(x1, y1, x2, y2, |x, y| {
            if plotted.is_ok() {
                plotted = self.point(x, y);
            }
        });
        plotted
    }
}
