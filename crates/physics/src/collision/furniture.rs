//! Furniture footprints and push-out.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A piece of furniture, as an axis-aligned footprint on the floor plane.
///
/// Coordinates are (x, z) in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureBox {
    /// Name used in logs.
    pub name: String,

    /// Footprint center (x, z).
    pub center: Vec2,

    /// Half of the footprint's width (x) and length (z).
    pub half_extents: Vec2,
}

impl FurnitureBox {
    pub fn new(name: impl Into<String>, center: Vec2, half_extents: Vec2) -> Self {
        Self {
            name: name.into(),
            center,
            half_extents,
        }
    }

    /// Create a box from its full width (x) and length (z).
    pub fn from_size(name: impl Into<String>, center: Vec2, width: f32, length: f32) -> Self {
        Self::new(name, center, Vec2::new(width, length) * 0.5)
    }

    /// Check if a point is closer than `clearance` to the footprint on both
    /// axes at once.
    pub fn overlaps(&self, position: Vec3, clearance: f32) -> bool {
        let offset = Vec2::new(position.x, position.z) - self.center;
        let reach = self.half_extents + Vec2::splat(clearance);
        offset.x.abs() < reach.x && offset.y.abs() < reach.y
    }

    /// Move an overlapping point out of the box.
    ///
    /// The point is pushed along the axis with the smaller penetration and
    /// lands exactly on the clearance boundary. Ties go to x; a point on the
    /// center line is pushed toward positive coordinates. Returns `None` if
    /// the point does not overlap.
    pub fn push_out(&self, position: Vec3, clearance: f32) -> Option<Vec3> {
        let offset = Vec2::new(position.x, position.z) - self.center;
        let reach = self.half_extents + Vec2::splat(clearance);
        let penetration = reach - offset.abs();

        if penetration.x <= 0.0 || penetration.y <= 0.0 {
            return None;
        }

        let away = |value: f32| if value >= 0.0 { 1.0 } else { -1.0 };

        let mut resolved = position;
        if penetration.x <= penetration.y {
            resolved.x = self.center.x + away(offset.x) * reach.x;
        } else {
            resolved.z = self.center.y + away(offset.y) * reach.y;
        }
        Some(resolved)
    }
}

/// Push a point out of every box, one at a time, in declaration order.
pub fn resolve_furniture(position: Vec3, furniture: &[FurnitureBox], clearance: f32) -> Vec3 {
    let mut resolved = position;

    for item in furniture {
        if let Some(pushed) = item.push_out(resolved, clearance) {
            log::debug!("pushed out of {}: {:?} -> {:?}", item.name, resolved, pushed);
            resolved = pushed;
        }
    }

    resolved
}
