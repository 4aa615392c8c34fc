//! Shared contract for moving, radius-bounded game objects.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned play area rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds anchored at the origin with the given view size.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}

/// Capability set shared by every simulated object: a position, a velocity,
/// a bounding radius, a per-tick kinematic step, and a viewport-exit test.
pub trait Entity {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn radius(&self) -> f32;

    /// Advance one fixed tick.
    fn advance(&mut self);

    /// True iff the bounding box (center ± radius) has no overlap with
    /// `bounds`. Four independent edge tests; any one is enough.
    fn is_out_of_viewport(&self, bounds: &Bounds) -> bool {
        let pos = self.position();
        let radius = self.radius();
        if pos.x + radius < bounds.left {
            return true;
        }
        if pos.x - radius > bounds.right {
            return true;
        }
        if pos.y + radius < bounds.top {
            return true;
        }
        if pos.y - radius > bounds.bottom {
            return true;
        }
        false
    }
}
