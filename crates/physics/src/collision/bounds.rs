//! Room bounds.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned room, centered on the origin horizontally, floor at y = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBounds {
    /// Extent along X (meters).
    pub width: f32,

    /// Extent along Z (meters).
    pub depth: f32,

    /// Floor to ceiling (meters).
    pub height: f32,
}

impl RoomBounds {
    pub const fn new(width: f32, depth: f32, height: f32) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Half extents on the floor plane: (width/2, depth/2).
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.depth * 0.5)
    }

    /// Largest |x| and |z| a point may reach while keeping `margin` from the
    /// walls. Never negative, so a margin wider than the room pins the point
    /// to the center line.
    pub fn limits(&self, margin: f32) -> Vec2 {
        (self.half_extents() - Vec2::splat(margin)).max(Vec2::ZERO)
    }

    /// Clamp a point's horizontal coordinates inside the walls, each axis
    /// independently. The vertical coordinate is untouched.
    pub fn clamp(&self, position: Vec3, margin: f32) -> Vec3 {
        let limits = self.limits(margin);
        Vec3::new(
            position.x.clamp(-limits.x, limits.x),
            position.y,
            position.z.clamp(-limits.y, limits.y),
        )
    }

    /// Check if a point is inside the walls with `margin` to spare.
    pub fn contains(&self, position: Vec3, margin: f32) -> bool {
        let limits = self.limits(margin);
        position.x.abs() <= limits.x && position.z.abs() <= limits.y
    }
}
