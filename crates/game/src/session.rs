//! Game session - the per-frame loop around the movement controller.
//!
//! A session owns everything a running game needs: the room, the player,
//! pending input, settings and the wake-up timer. The host feeds it device
//! events between frames and calls [`Session::tick`] once per simulation step.
//!
//! ```text
//! NotStarted ──start()──► WakingUp ──wake timer──► Active ◄──pause──► Paused
//! ```

use serde::{Deserialize, Serialize};
use wakeroom_physics::{MovementConfig, MovementController, PlayerState};

use crate::camera::CameraPose;
use crate::gaze::LightGaze;
use crate::input::{Action, InputState};
use crate::room::Room;
use crate::scheduler::FrameScheduler;
use crate::settings::Settings;

/// Default wake-up length: a 2 s fade in plus a 3 s climb off the bed.
pub const DEFAULT_WAKE_DURATION: f32 = 5.0;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Start screen.
    #[default]
    NotStarted,
    /// Scripted wake-up; input is ignored.
    WakingUp,
    /// Player in control.
    Active,
    /// Frozen until resumed.
    Paused,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Simulation steps run so far.
    pub frame: u64,

    /// Session state after the step.
    pub state: SessionState,

    /// Camera pose to render from.
    pub camera: CameraPose,

    /// Light-gaze whiteout overlay opacity.
    pub whiteout: f32,

    /// Wake-up progress (0.0 - 1.0), for the host's wake-up cinematic.
    pub wake_progress: f32,
}

/// Receives each rendered frame. Implemented by the scene renderer.
pub trait FrameSink {
    fn present(&mut self, frame: &FrameOutput);
}

/// A running game.
#[derive(Debug)]
pub struct Session {
    state: SessionState,

    /// Current frame/tick number.
    frame: u64,

    room: Room,

    /// Movement config before settings are applied.
    base_config: MovementConfig,

    settings: Settings,

    controller: MovementController,

    player: PlayerState,

    input: InputState,

    gaze: LightGaze,

    wake_duration: f32,

    wake_elapsed: f32,
}

impl Session {
    /// Create a session in the given room. Nothing runs until [`Session::start`].
    pub fn new(room: Room, config: MovementConfig, settings: Settings) -> Self {
        let controller = MovementController::new(config.with_speed_multiplier(settings.speed));
        let gaze = LightGaze::new(room.light);
        let player = PlayerState::new(room.start_position);

        Self {
            state: SessionState::NotStarted,
            frame: 0,
            room,
            base_config: config,
            settings,
            controller,
            player,
            input: InputState::new(),
            gaze,
            wake_duration: DEFAULT_WAKE_DURATION,
            wake_elapsed: 0.0,
        }
    }

    /// Create a session in the bedroom with default configuration.
    pub fn bedroom() -> Self {
        Self::new(Room::bedroom(), MovementConfig::default(), Settings::default())
    }

    /// Override the wake-up length (seconds). Takes effect on the next start.
    pub fn with_wake_duration(mut self, seconds: f32) -> Self {
        self.wake_duration = seconds.max(0.0);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings the host may change at any time; re-read every frame.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Movement config in effect, with settings applied.
    pub fn effective_config(&self) -> MovementConfig {
        self.base_config.with_speed_multiplier(self.settings.speed)
    }

    pub fn wake_complete(&self) -> bool {
        matches!(self.state, SessionState::Active | SessionState::Paused)
    }

    /// Wake-up progress (0.0 - 1.0).
    pub fn wake_progress(&self) -> f32 {
        match self.state {
            SessionState::NotStarted => 0.0,
            SessionState::WakingUp if self.wake_duration > 0.0 => {
                (self.wake_elapsed / self.wake_duration).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// Where the camera is this frame.
    ///
    /// While waking up the camera lies on the bed looking at the ceiling;
    /// the host's cinematic animates from there.
    pub fn camera_pose(&self) -> CameraPose {
        match self.state {
            SessionState::WakingUp => CameraPose::new(
                self.room.wake_position,
                self.room.start_facing,
                std::f32::consts::FRAC_PI_2,
            ),
            _ => CameraPose::from_player(&self.player),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Leave the start screen and begin waking up.
    pub fn start(&mut self) {
        if self.state != SessionState::NotStarted {
            return;
        }

        log::info!("waking up in {} ({}s)", self.room.name, self.wake_duration);
        self.state = SessionState::WakingUp;
        self.wake_elapsed = 0.0;
        self.input.discard_pending();

        if self.wake_duration <= 0.0 {
            self.finish_wake();
        }
    }

    /// Pause or resume. Does nothing before the wake-up completes.
    ///
    /// Returns the state afterwards.
    pub fn toggle_pause(&mut self) -> SessionState {
        match self.state {
            SessionState::Active => {
                log::info!("paused at frame {}", self.frame);
                self.state = SessionState::Paused;
                self.input.set_look_lock(false);
            }
            SessionState::Paused => {
                log::info!("resumed at frame {}", self.frame);
                self.state = SessionState::Active;
                // Presses made while paused do not carry over
                self.input.discard_pending();
            }
            SessionState::NotStarted | SessionState::WakingUp => {}
        }
        self.state
    }

    fn finish_wake(&mut self) {
        let mut start = self.room.start_position;
        start.y = self.base_config.eye_height;

        self.controller.spawn(&mut self.player, start);
        self.player.yaw = self.room.start_facing;
        self.player.pitch = 0.0;
        self.gaze.reset();

        self.state = SessionState::Active;
        log::info!("awake at {:?}", self.player.position);
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Deliver a key press by key code.
    pub fn key_down(&mut self, code: &str) {
        let action = self.input.key_down(&self.settings.controls, code);
        if action == Some(Action::Pause) {
            self.toggle_pause();
        }
    }

    /// Deliver a key release by key code.
    pub fn key_up(&mut self, code: &str) {
        self.input.key_up(&self.settings.controls, code);
    }

    /// Deliver pointer motion (pixels). Only counts while look-locked.
    pub fn pointer_motion(&mut self, delta_x: f32, delta_y: f32) {
        if self.state == SessionState::Active {
            self.input.pointer_motion(delta_x, delta_y);
        }
    }

    /// Engage or release look-lock. Engaging only works while active.
    pub fn set_look_lock(&mut self, locked: bool) -> bool {
        let locked = locked && self.state == SessionState::Active;
        self.input.set_look_lock(locked);
        locked
    }

    pub fn look_locked(&self) -> bool {
        self.input.look_locked()
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Advance the session by one step of `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f32) -> FrameOutput {
        match self.state {
            SessionState::Active => self.step_active(delta_time),
            SessionState::WakingUp => {
                if delta_time.is_finite() && delta_time > 0.0 {
                    self.wake_elapsed += delta_time;
                }
                if self.wake_elapsed >= self.wake_duration {
                    self.finish_wake();
                }
                self.input.discard_pending();
            }
            SessionState::NotStarted | SessionState::Paused => self.input.discard_pending(),
        }

        self.frame += 1;
        self.output()
    }

    fn step_active(&mut self, delta_time: f32) {
        // Settings may have changed since the last frame
        self.controller.config = self.effective_config();

        let look = self.input.take_look_delta();
        if look.x != 0.0 || look.y != 0.0 {
            self.controller.look(&mut self.player, look.x, look.y);
        }

        let input = self.input.take_frame(&self.settings.controls);
        self.controller.advance(
            &mut self.player,
            &input,
            &self.room.bounds,
            &self.room.furniture,
            delta_time,
        );

        self.gaze.update(self.player.position, self.player.look_direction());
    }

    /// Run one host frame through the scheduler and present the result.
    pub fn host_frame(
        &mut self,
        scheduler: &mut FrameScheduler,
        elapsed: f32,
        sink: &mut impl FrameSink,
    ) -> FrameOutput {
        scheduler.run(elapsed, |delta| {
            self.tick(delta);
        });

        let output = self.output();
        sink.present(&output);
        output
    }

    fn output(&self) -> FrameOutput {
        FrameOutput {
            frame: self.frame,
            state: self.state,
            camera: self.camera_pose(),
            whiteout: self.gaze.opacity(),
            wake_progress: self.wake_progress(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
