//! Collision detection for axis-aligned geometry
//!
//! Everything the ball can strike (paddle, bricks) is an axis-aligned
//! rectangle, so a single closest-point test covers every case.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Point on (or inside) the rectangle closest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(self.x).min(self.right()),
            p.y.max(self.y).min(self.bottom()),
        )
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle center onto the rectangle and compares the squared
/// distance to that closest point against `radius²`. Exact tangency counts
/// as a hit.
#[inline]
pub fn circle_hits_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}
