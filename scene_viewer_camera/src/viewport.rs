/// Viewport: pixel rectangle and depth range used by project/unproject.

use glam::Vec2;
use crate::camera_bail;
use crate::error::{Error, Result};

/// Viewport rectangle (pixels) and depth range.
///
/// `(x, y)` is the lower-left corner in window coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// Full-window viewport with the default `[0, 1]` depth range.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width / height.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` when either dimension is not strictly positive.
    pub fn aspect(&self) -> Result<f32> {
        if !(self.width > 0.0 && self.height > 0.0) {
            camera_bail!(Error::InvalidArgument, "camera3d::Viewport",
                "viewport size must be positive, got {}x{}", self.width, self.height);
        }
        Ok(self.width / self.height)
    }

    /// Size as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Convert a cursor position (origin top-left, +Y down) to window
    /// coordinates (origin bottom-left, +Y up).
    pub fn cursor_to_window(&self, cursor: Vec2) -> Vec2 {
        Vec2::new(self.x + cursor.x, self.y + self.height - cursor.y)
    }
}

/// Viewport size in pixels as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Full viewport with the default depth range.
    pub fn to_viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for ViewportSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
