//! Whiteout from staring into the wall light.
//!
//! Looking within a narrow cone of the light washes the screen out; looking
//! away lets it fade over a few frames.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Half-angle of the cone around the light that triggers the whiteout (radians).
pub const GAZE_CONE: f32 = 0.3;

/// Opacity when staring straight at the light.
pub const PEAK_OPACITY: f32 = 0.8;

/// Opacity lost per frame while looking away.
pub const FADE_PER_FRAME: f32 = 0.05;

/// Whiteout overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightGaze {
    /// Light position in world space.
    pub light: Vec3,

    /// Current overlay opacity (0.0 - 1.0).
    opacity: f32,
}

impl LightGaze {
    pub fn new(light: Vec3) -> Self {
        Self { light, opacity: 0.0 }
    }

    /// Current overlay opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Update the overlay for one frame of looking from `eye` along `look`.
    ///
    /// Returns the new opacity.
    pub fn update(&mut self, eye: Vec3, look: Vec3) -> f32 {
        let to_light = self.light - eye;

        let angle = if to_light.length_squared() > f32::EPSILON && look.length_squared() > f32::EPSILON {
            look.angle_between(to_light)
        } else {
            f32::INFINITY
        };

        if angle < GAZE_CONE {
            self.opacity = (1.0 - angle / GAZE_CONE).max(0.0) * PEAK_OPACITY;
        } else {
            self.opacity = (self.opacity - FADE_PER_FRAME).max(0.0);
        }
        self.opacity
    }

    /// Clear the overlay immediately.
    pub fn reset(&mut self) {
        self.opacity = 0.0;
    }
}
