//! Movement state and input structures.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Flags describing the player's current movement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFlags(pub u8);

impl MovementFlags {
    /// Player is standing on the floor.
    pub const ON_GROUND: u8 = 1 << 0;

    /// Player left the floor by jumping and has not landed yet.
    pub const JUMPING: u8 = 1 << 1;

    /// Check if a flag is set.
    #[inline]
    pub fn has(self, flag: u8) -> bool {
        (self.0 & flag) != 0
    }

    /// Set or clear a flag.
    #[inline]
    pub fn set(&mut self, flag: u8, value: bool) {
        if value {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Check if player is on the ground.
    #[inline]
    pub fn on_ground(self) -> bool {
        self.has(Self::ON_GROUND)
    }

    /// Check if player is jumping.
    #[inline]
    pub fn jumping(self) -> bool {
        self.has(Self::JUMPING)
    }
}

/// Complete movement state for the player.
///
/// `position` is the camera (eye) position, so a grounded player has
/// `position.y == eye_height`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Eye position in world space (meters).
    pub position: Vec3,

    /// Velocity in world space (meters/second).
    pub velocity: Vec3,

    /// Rotation around the vertical axis (radians). Zero looks down -Z.
    pub yaw: f32,

    /// Rotation around the camera's right axis (radians), positive looks up.
    pub pitch: f32,

    /// Movement state flags.
    pub flags: MovementFlags,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            flags: MovementFlags::default(),
        }
    }
}

impl PlayerState {
    /// Create a new state at the given eye position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Check if the player is on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.flags.on_ground()
    }

    /// Get the full look direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Get the forward direction on the floor plane.
    ///
    /// This is the look direction with its vertical component removed and
    /// renormalized, computed from yaw alone so that looking straight up or
    /// down still has a well-defined forward.
    pub fn forward_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(-sin_yaw, 0.0, -cos_yaw)
    }

    /// Get the right direction on the floor plane.
    pub fn right_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    /// Get current horizontal speed.
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }

    /// Check if moving horizontally.
    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.z != 0.0
    }
}

/// Input snapshot for a single frame.
///
/// Produced by the host each frame. Direction fields are held state; `jump`
/// is an edge: true only on the frame after the jump action was pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputFrame {
    /// An input frame with nothing held.
    pub const RELEASED: Self = Self {
        forward: false,
        backward: false,
        left: false,
        right: false,
        jump: false,
    };

    /// Check if any direction is held.
    #[inline]
    pub fn has_movement_input(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Get the normalized movement direction in local space.
    ///
    /// `x` is right, `y` is forward. Opposing keys cancel out, and diagonals
    /// have unit length.
    pub fn movement_direction(&self) -> Vec2 {
        let axis = |positive: bool, negative: bool| match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };
        Vec2::new(axis(self.right, self.left), axis(self.forward, self.backward)).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_movement_flags() {
        let mut flags = MovementFlags::default();
        assert!(!flags.on_ground());

        flags.set(MovementFlags::ON_GROUND, true);
        assert!(flags.on_ground());
        assert!(!flags.jumping());

        flags.set(MovementFlags::ON_GROUND, false);
        assert!(!flags.on_ground());
    }

    #[test]
    fn test_directions_follow_yaw() {
        let mut state = PlayerState::new(Vec3::ZERO);

        // Yaw 0 looks down -Z, right is +X
        let forward = state.forward_direction();
        assert!((forward.z + 1.0).abs() < 1e-6);
        let right = state.right_direction();
        assert!((right.x - 1.0).abs() < 1e-6);

        // Turning left by a quarter looks down -X
        state.yaw = FRAC_PI_2;
        let forward = state.forward_direction();
        assert!((forward.x + 1.0).abs() < 1e-6);
        assert!(forward.z.abs() < 1e-6);
    }

    #[test]
    fn test_forward_is_projected_look_direction() {
        let mut state = PlayerState::new(Vec3::ZERO);
        state.yaw = 0.7;

        for pitch in [-1.2, -0.4, 0.0, 0.5, 1.3] {
            state.pitch = pitch;
            let look = state.look_direction();
            let projected = Vec3::new(look.x, 0.0, look.z).normalize();
            assert!((projected - state.forward_direction()).length() < 1e-5);
        }
    }

    #[test]
    fn test_movement_direction_normalizes_diagonals() {
        let input = InputFrame {
            forward: true,
            right: true,
            ..Default::default()
        };
        let direction = input.movement_direction();
        assert!((direction.length() - 1.0).abs() < 1e-6);
        assert!(direction.x > 0.0 && direction.y > 0.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let input = InputFrame {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert!(input.has_movement_input());
        assert_eq!(input.movement_direction(), Vec2::ZERO);
    }
}
