// File: crates/chart-core/src/types.rs
// Summary: Shared types and defaults (canvas sizes, stroke widths).

use serde::{Deserialize, Serialize};

/// Default line chart width in pixels.
pub const WIDTH: u32 = 1024;
/// Default line chart height in pixels.
pub const HEIGHT: u32 = 640;
/// Default radius of circular charts in pixels.
pub const RADIUS: u32 = 320;
/// Default stroke thickness in pixels.
pub const THICKNESS: u32 = 1;

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bounding square of a circle of `radius`.
    pub const fn square(radius: u32) -> Self {
        Self::new(radius * 2, radius * 2)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Marker radius: half the point width, falling back to half the stroke.
pub fn point_radius(point_width: u32, thickness: u32) -> f64 {
    if point_width > 0 {
        point_width as f64 / 2.0
    } else {
        thickness.max(1) as f64 / 2.0
    }
}
