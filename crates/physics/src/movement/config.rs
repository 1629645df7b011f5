//! Movement configuration constants.
//!
//! All movement parameters are grouped here for easy tuning.
//! Values follow the bedroom build of the game, converted to metric units
//! per second where the original worked per 60 Hz frame.

use serde::{Deserialize, Serialize};

/// Configuration for player movement physics.
///
/// All values use metric units (meters, seconds) unless otherwise noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Player
    // ========================================================================
    /// Camera height above the floor (meters). This is the floor clamp target.
    pub eye_height: f32,

    /// Walking speed (meters/second).
    pub move_speed: f32,

    /// Look sensitivity (radians per pointer pixel).
    pub mouse_sensitivity: f32,

    // ========================================================================
    // Physics
    // ========================================================================
    /// Gravity acceleration (meters/second²).
    pub gravity: f32,

    /// Upward velocity applied by a jump (meters/second).
    pub jump_force: f32,

    /// Horizontal velocity multiplier applied per nominal frame while no
    /// direction is held.
    pub velocity_decay: f32,

    /// Horizontal speed below which a decaying player stops (meters/second).
    pub stop_speed: f32,

    // ========================================================================
    // Collision
    // ========================================================================
    /// Distance kept from every wall (meters).
    pub wall_margin: f32,

    /// Distance kept from every furniture box (meters).
    pub furniture_clearance: f32,

    // ========================================================================
    // Timing (seconds)
    // ========================================================================
    /// The frame slice the movement constants were tuned against.
    pub nominal_delta: f32,

    /// Longest step a single advance will integrate.
    pub max_delta: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            // Player
            eye_height: 1.7,
            move_speed: 5.0,          // 0.08 m per 16 ms frame
            mouse_sensitivity: 0.003,

            // Physics
            gravity: 9.81,
            jump_force: 8.0,
            velocity_decay: 0.8,
            stop_speed: 0.05,

            // Collision
            wall_margin: 0.3,
            furniture_clearance: 0.4,

            // Timing
            nominal_delta: 0.016,
            max_delta: 0.066,         // ~15 FPS minimum
        }
    }
}

impl MovementConfig {
    /// Create the config of the original large-room build.
    ///
    /// Lower eye height and a faster walk. The jump is physics-based: its
    /// apex sits at half the eye height above the floor.
    pub fn classic() -> Self {
        let eye_height = 1.6;
        let gravity = 9.81;
        Self {
            eye_height,
            move_speed: 9.375,        // 0.15 m per 16 ms frame
            mouse_sensitivity: 0.002,
            gravity,
            jump_force: (2.0 * gravity * eye_height * 0.5).sqrt(),
            ..Default::default()
        }
    }

    /// Return a copy with the walking speed scaled by a settings multiplier.
    ///
    /// Non-finite or negative multipliers leave the speed unchanged.
    pub fn with_speed_multiplier(&self, multiplier: f32) -> Self {
        let mut config = self.clone();
        if multiplier.is_finite() && multiplier >= 0.0 {
            config.move_speed *= multiplier;
        }
        config
    }

    /// Decay factor for a step of `delta_time` seconds.
    ///
    /// Exactly `velocity_decay` for a nominal step.
    pub fn decay_for(&self, delta_time: f32) -> f32 {
        self.velocity_decay.powf(delta_time / self.nominal_delta)
    }

    /// Apex height of a jump above the eye height (meters).
    pub fn jump_apex(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }

    /// Time between leaving and returning to the floor (seconds).
    pub fn flight_time(&self) -> f32 {
        2.0 * self.jump_force / self.gravity
    }
}
