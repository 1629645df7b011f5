//! Camera pose handed to the renderer.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use wakeroom_physics::PlayerState;

/// First-person camera pose.
///
/// Rotation order is yaw then pitch; yaw 0 looks down -Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,

    /// Rotation around the vertical axis (radians).
    pub yaw: f32,

    /// Rotation around the camera's right axis (radians), positive looks up.
    pub pitch: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraPose {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
        }
    }

    /// Take the pose from the player's eye.
    pub fn from_player(player: &PlayerState) -> Self {
        Self::new(player.position, player.yaw, player.pitch)
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    /// Get the up direction vector.
    pub fn up(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        Vec3::new(sin_yaw * sin_pitch, cos_pitch, cos_yaw * sin_pitch)
    }

    /// Get the view matrix for rendering.
    ///
    /// Uses the camera's own up vector so that looking straight up or down
    /// stays well-defined.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }
}
