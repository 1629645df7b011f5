//! Player movement controller.
//!
//! This is the main entry point for player movement. It takes an input frame
//! and advances the player state inside the room.

use glam::{Vec2, Vec3};

use crate::collision::{resolve_furniture, FurnitureBox, RoomBounds};

use super::config::MovementConfig;
use super::state::{InputFrame, MovementFlags, PlayerState};

/// Player movement controller.
///
/// Handles all player movement physics including:
/// - Walking with velocity decay
/// - Gravity, ground clamp and jumping
/// - Room bounds and furniture collision
///
/// # Example
///
/// ```ignore
/// let controller = MovementController::new(MovementConfig::default());
/// let mut state = PlayerState::default();
/// controller.spawn(&mut state, Vec3::new(0.0, 1.7, 0.0));
///
/// // Each frame:
/// controller.advance(&mut state, &input, &room, &furniture, 0.016);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MovementController {
    /// Movement configuration.
    pub config: MovementConfig,
}

impl MovementController {
    /// Create a new movement controller with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(MovementConfig::default())
    }

    /// Place the player at a position with no velocity.
    ///
    /// The player is grounded only if the position is at or below eye height,
    /// in which case it is snapped onto the floor.
    pub fn spawn(&self, state: &mut PlayerState, position: Vec3) {
        state.position = position;
        state.velocity = Vec3::ZERO;
        state.flags = MovementFlags::default();

        if state.position.y <= self.config.eye_height {
            state.position.y = self.config.eye_height;
            state.flags.set(MovementFlags::ON_GROUND, true);
        }
    }

    /// Apply pointer motion (pixels) to the view angles.
    ///
    /// Moving right turns right and moving down looks down. Pitch is clamped
    /// to straight up/down, yaw wraps to (-PI, PI].
    pub fn look(&self, state: &mut PlayerState, delta_x: f32, delta_y: f32) {
        if !delta_x.is_finite() || !delta_y.is_finite() {
            return;
        }

        state.yaw -= delta_x * self.config.mouse_sensitivity;
        state.pitch -= delta_y * self.config.mouse_sensitivity;

        state.pitch = state.pitch.clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);

        state.yaw = wrap_angle(state.yaw);
    }

    /// Advance player movement by one frame.
    ///
    /// This is the main entry point that should be called each simulation tick
    /// while the session is active.
    ///
    /// # Arguments
    ///
    /// * `state` - The player's movement state (will be modified)
    /// * `input` - The input frame for this tick
    /// * `room` - The room walls
    /// * `furniture` - Furniture footprints, resolved in order
    /// * `delta_time` - Time step in seconds
    pub fn advance(
        &self,
        state: &mut PlayerState,
        input: &InputFrame,
        room: &RoomBounds,
        furniture: &[FurnitureBox],
        delta_time: f32,
    ) {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }

        // Clamp delta time to prevent physics explosions
        let delta_time = delta_time.min(self.config.max_delta);

        if !state.position.is_finite() || !state.velocity.is_finite() {
            log::warn!(
                "non-finite player state {:?} / {:?}, respawning at room center",
                state.position,
                state.velocity
            );
            self.spawn(state, Vec3::new(0.0, self.config.eye_height, 0.0));
        }

        // Jump uses the grounded flag from the end of the previous frame
        if input.jump {
            self.try_jump(state);
        }

        self.walk(state, input, delta_time);
        self.fall(state, delta_time);
        self.constrain(state, room, furniture);
    }

    // ========================================================================
    // Jumping
    // ========================================================================

    fn try_jump(&self, state: &mut PlayerState) {
        if !state.on_ground() {
            return;
        }

        log::debug!("jump from {:?}", state.position);
        state.velocity.y = self.config.jump_force;
        state.flags.set(MovementFlags::ON_GROUND, false);
        state.flags.set(MovementFlags::JUMPING, true);
    }

    // ========================================================================
    // Horizontal Movement
    // ========================================================================

    fn walk(&self, state: &mut PlayerState, input: &InputFrame, delta_time: f32) {
        let wish = self.wish_velocity(state, input);

        if let Some(wish) = wish {
            state.velocity.x = wish.x;
            state.velocity.z = wish.y;
        } else {
            let decay = self.config.decay_for(delta_time);
            state.velocity.x *= decay;
            state.velocity.z *= decay;

            if state.horizontal_speed() < self.config.stop_speed {
                state.velocity.x = 0.0;
                state.velocity.z = 0.0;
            }
        }

        state.position.x += state.velocity.x * delta_time;
        state.position.z += state.velocity.z * delta_time;
    }

    /// Horizontal (x, z) velocity the held directions ask for, or `None` if
    /// no direction is effectively held.
    fn wish_velocity(&self, state: &PlayerState, input: &InputFrame) -> Option<Vec2> {
        let local = input.movement_direction();
        if local == Vec2::ZERO {
            return None;
        }

        let forward = state.forward_direction();
        let right = state.right_direction();
        let world = forward * local.y + right * local.x;

        Some(Vec2::new(world.x, world.z).normalize_or_zero() * self.config.move_speed)
    }

    // ========================================================================
    // Vertical Movement
    // ========================================================================

    fn fall(&self, state: &mut PlayerState, delta_time: f32) {
        state.velocity.y -= self.config.gravity * delta_time;
        state.position.y += state.velocity.y * delta_time;

        if state.position.y <= self.config.eye_height {
            if !state.on_ground() {
                log::debug!("landed at {:?}", state.position);
            }
            state.position.y = self.config.eye_height;
            state.velocity.y = 0.0;
            state.flags.set(MovementFlags::ON_GROUND, true);
            state.flags.set(MovementFlags::JUMPING, false);
        } else {
            state.flags.set(MovementFlags::ON_GROUND, false);
        }
    }

    // ========================================================================
    // Collision
    // ========================================================================

    fn constrain(&self, state: &mut PlayerState, room: &RoomBounds, furniture: &[FurnitureBox]) {
        let margin = self.config.wall_margin;

        state.position = room.clamp(state.position, margin);
        state.position = resolve_furniture(state.position, furniture, self.config.furniture_clearance);

        // A push-out may cross a wall; the walls win
        state.position = room.clamp(state.position, margin);
    }
}

/// Wrap an angle to (-PI, PI]. Constant time for any finite input.
fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn bedroom() -> RoomBounds {
        RoomBounds::new(5.0, 5.0, 4.0)
    }

    fn grounded(controller: &MovementController, x: f32, z: f32) -> PlayerState {
        let mut state = PlayerState::default();
        controller.spawn(&mut state, Vec3::new(x, 0.0, z));
        state
    }

    fn jump() -> InputFrame {
        InputFrame {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_spawn_on_floor() {
        let controller = MovementController::with_default_config();
        let state = grounded(&controller, 0.0, 0.0);

        assert!(state.on_ground());
        assert_eq!(state.position.y, controller.config.eye_height);
    }

    #[test]
    fn test_falling_velocity_strictly_decreases_until_landing() {
        let controller = MovementController::with_default_config();
        let room = bedroom();

        let mut state = PlayerState::default();
        controller.spawn(&mut state, Vec3::new(0.0, 3.5, 0.0));
        assert!(!state.on_ground());

        let mut previous = state.velocity.y;
        let mut landed_at = None;
        for frame in 0..200 {
            controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
            if state.on_ground() {
                landed_at = Some(frame);
                break;
            }
            assert!(state.velocity.y < previous, "frame {frame}: velocity did not decrease");
            previous = state.velocity.y;
        }
        assert!(landed_at.is_some(), "never landed");

        // Stays put once landed
        for _ in 0..30 {
            controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
            assert!(state.on_ground());
            assert_eq!(state.velocity.y, 0.0);
            assert_eq!(state.position.y, controller.config.eye_height);
        }
    }

    #[test]
    fn test_steady_state_is_idempotent() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let mut state = grounded(&controller, 0.5, -0.25);
        let start = state.clone();

        for _ in 0..120 {
            controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
            assert_eq!(state.position, start.position);
        }
        assert!(state.on_ground());
    }

    #[test]
    fn test_wall_clamp_example() {
        let controller = MovementController::with_default_config();
        let room = RoomBounds::new(5.0, 5.0, 4.0);
        let mut state = grounded(&controller, 2.4, 0.0);

        let input = InputFrame {
            right: true,
            ..Default::default()
        };
        controller.advance(&mut state, &input, &room, &[], DT);

        assert!((state.position.x - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_hold_under_sustained_input() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let limit = 2.5 - controller.config.wall_margin + 1e-6;

        let mut state = grounded(&controller, 0.0, 0.0);
        state.yaw = 0.6;
        let input = InputFrame {
            forward: true,
            left: true,
            ..Default::default()
        };

        for frame in 0..400 {
            let mut input = input;
            input.jump = frame % 50 == 0;
            controller.advance(&mut state, &input, &room, &[], DT);
            assert!(state.position.x.abs() <= limit);
            assert!(state.position.z.abs() <= limit);
            assert!(state.position.y >= controller.config.eye_height);
        }
    }

    #[test]
    fn test_furniture_push_out_example() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let bed = FurnitureBox::new("bed", Vec2::new(-1.5, -2.0), Vec2::new(0.75, 1.0));

        let mut state = grounded(&controller, -1.5 + 0.75 + 0.4 - 0.01, -2.0);
        controller.advance(&mut state, &InputFrame::RELEASED, &room, &[bed], DT);

        assert!((state.position.x - (-0.35)).abs() < 1e-5);
        assert_eq!(state.position.z, -2.0);
    }

    #[test]
    fn test_walking_into_furniture_stops_at_clearance() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let table = FurnitureBox::new("table", Vec2::new(0.0, -1.5), Vec2::new(0.6, 0.45));

        // Facing -Z toward the table
        let mut state = grounded(&controller, 0.0, 1.0);
        let input = InputFrame {
            forward: true,
            ..Default::default()
        };
        for _ in 0..120 {
            controller.advance(&mut state, &input, &room, std::slice::from_ref(&table), DT);
            assert!(!table.overlaps(state.position, controller.config.furniture_clearance));
        }

        let stop = -1.5 + 0.45 + controller.config.furniture_clearance;
        assert!((state.position.z - stop).abs() < 1e-5);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let mut state = grounded(&controller, 0.0, 0.0);

        controller.advance(&mut state, &jump(), &room, &[], DT);
        assert!(!state.on_ground());
        assert!(state.flags.jumping());
        let airborne_velocity = state.velocity.y;
        assert!(airborne_velocity > 0.0);

        // A second jump in the air does nothing beyond gravity
        controller.advance(&mut state, &jump(), &room, &[], DT);
        let expected = airborne_velocity - controller.config.gravity * DT;
        assert!((state.velocity.y - expected).abs() < 1e-5);
    }

    #[test]
    fn test_jump_lands_after_flight_time() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let mut state = grounded(&controller, 0.0, 0.0);

        controller.advance(&mut state, &jump(), &room, &[], DT);
        let mut frames = 1;
        let mut apex = state.position.y;
        while !state.on_ground() {
            controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
            apex = apex.max(state.position.y);
            frames += 1;
            assert!(frames < 1000, "never landed");
        }

        let flight = frames as f32 * DT;
        assert!((flight - controller.config.flight_time()).abs() < 0.05, "flight {flight}");
        assert_eq!(state.position.y, controller.config.eye_height);
        assert!(!state.flags.jumping());

        let expected_apex = controller.config.eye_height + controller.config.jump_apex();
        assert!((apex - expected_apex).abs() < 0.1, "apex {apex}");
    }

    #[test]
    fn test_diagonal_speed_matches_axis_speed() {
        let controller = MovementController::with_default_config();
        let room = RoomBounds::new(100.0, 100.0, 4.0);

        let mut straight = grounded(&controller, 0.0, 0.0);
        let mut diagonal = grounded(&controller, 0.0, 0.0);
        let forward = InputFrame {
            forward: true,
            ..Default::default()
        };
        let forward_right = InputFrame {
            forward: true,
            right: true,
            ..Default::default()
        };

        for _ in 0..10 {
            controller.advance(&mut straight, &forward, &room, &[], DT);
            controller.advance(&mut diagonal, &forward_right, &room, &[], DT);
        }

        let straight_distance = Vec2::new(straight.position.x, straight.position.z).length();
        let diagonal_distance = Vec2::new(diagonal.position.x, diagonal.position.z).length();
        assert!((straight_distance - diagonal_distance).abs() < 1e-4);
        assert!((straight.horizontal_speed() - controller.config.move_speed).abs() < 1e-4);
        assert!((diagonal.horizontal_speed() - controller.config.move_speed).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_does_not_change_speed() {
        let controller = MovementController::with_default_config();
        let room = RoomBounds::new(100.0, 100.0, 4.0);
        let input = InputFrame {
            forward: true,
            ..Default::default()
        };

        for pitch in [-1.5, -0.5, 0.0, 0.8, std::f32::consts::FRAC_PI_2] {
            let mut state = grounded(&controller, 0.0, 0.0);
            state.pitch = pitch;
            controller.advance(&mut state, &input, &room, &[], DT);
            assert!((state.horizontal_speed() - controller.config.move_speed).abs() < 1e-4);
            assert!(state.position.z < 0.0, "pitch {pitch} walked backwards");
        }
    }

    #[test]
    fn test_release_decays_to_stop() {
        let controller = MovementController::with_default_config();
        let room = RoomBounds::new(100.0, 100.0, 4.0);
        let mut state = grounded(&controller, 0.0, 0.0);
        let input = InputFrame {
            forward: true,
            ..Default::default()
        };

        controller.advance(&mut state, &input, &room, &[], DT);
        let speed = state.horizontal_speed();

        controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
        assert!((state.horizontal_speed() - speed * 0.8).abs() < 1e-4);

        for _ in 0..100 {
            controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
        }
        assert!(!state.is_moving());

        // And then holds still
        let resting = state.position;
        controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
        assert_eq!(state.position, resting);
    }

    #[test]
    fn test_look_clamps_pitch_and_wraps_yaw() {
        let controller = MovementController::with_default_config();
        let mut state = PlayerState::default();

        // Mouse up far enough to overshoot vertical
        controller.look(&mut state, 0.0, -10_000.0);
        assert_eq!(state.pitch, std::f32::consts::FRAC_PI_2);

        // Mouse right turns right (yaw decreases), wrapping past -PI
        controller.look(&mut state, 1500.0, 0.0);
        assert!(state.yaw > -std::f32::consts::PI && state.yaw <= std::f32::consts::PI);
        let expected = -4.5 + std::f32::consts::TAU;
        assert!((state.yaw - expected).abs() < 1e-4);
    }

    #[test]
    fn test_huge_look_delta_still_wraps() {
        let controller = MovementController::with_default_config();
        let mut state = PlayerState::default();

        controller.look(&mut state, 1.0e12, 0.0);
        assert!(state.yaw.is_finite());
        assert!(state.yaw > -std::f32::consts::PI && state.yaw <= std::f32::consts::PI);

        controller.look(&mut state, -3.0e30, 1.0e20);
        assert!(state.yaw > -std::f32::consts::PI && state.yaw <= std::f32::consts::PI);
        assert_eq!(state.pitch, -std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn test_wall_wins_over_furniture_push() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let limit = 2.5 - controller.config.wall_margin;

        // Box against the +X wall; the cheapest way out is through the wall
        let cabinet = FurnitureBox::new("cabinet", Vec2::new(2.0, 0.0), Vec2::new(0.3, 1.0));
        let mut state = grounded(&controller, 2.1, 0.0);
        let pushed = cabinet
            .push_out(state.position, controller.config.furniture_clearance)
            .unwrap();
        assert!(pushed.x > limit);

        let furniture = [cabinet];
        controller.advance(&mut state, &InputFrame::RELEASED, &room, &furniture, DT);

        assert!(room.contains(state.position, controller.config.wall_margin));
        assert_eq!(state.position.x, limit);
        assert_eq!(state.position.z, 0.0);
    }

    #[test]
    fn test_bad_delta_is_ignored() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let mut state = grounded(&controller, 0.0, 0.0);
        let before = state.clone();

        controller.advance(&mut state, &jump(), &room, &[], f32::NAN);
        controller.advance(&mut state, &jump(), &room, &[], -1.0);
        controller.advance(&mut state, &jump(), &room, &[], 0.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_huge_delta_is_capped() {
        let controller = MovementController::with_default_config();
        let room = RoomBounds::new(100.0, 100.0, 4.0);
        let mut state = grounded(&controller, 0.0, 0.0);
        let input = InputFrame {
            forward: true,
            ..Default::default()
        };

        controller.advance(&mut state, &input, &room, &[], 10.0);
        let expected = controller.config.move_speed * controller.config.max_delta;
        assert!((state.position.z + expected).abs() < 1e-4);
    }

    #[test]
    fn test_non_finite_state_is_recovered() {
        let controller = MovementController::with_default_config();
        let room = bedroom();
        let mut state = grounded(&controller, 0.0, 0.0);
        state.position.x = f32::NAN;

        controller.advance(&mut state, &InputFrame::RELEASED, &room, &[], DT);
        assert!(state.position.is_finite());
        assert!(room.contains(state.position, controller.config.wall_margin));
    }
}
