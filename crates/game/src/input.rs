//! Player input handling.
//!
//! This module aggregates raw device events (key codes, pointer motion) into
//! the held-state snapshot the physics system consumes each frame.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use wakeroom_physics::InputFrame;

use crate::settings::Controls;

/// Bindable player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Pause,
}

impl Action {
    /// Every action, in settings order.
    pub const ALL: [Action; 6] = [
        Action::Forward,
        Action::Backward,
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::Pause,
    ];
}

/// Input accumulated between frames.
///
/// Key events and pointer motion arrive asynchronously from the host; the
/// session drains this once at the start of each tick. Held keys are kept by
/// key code and resolved through the bindings when the frame is taken, so a
/// rebind applies to keys that are already down.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Key codes currently held.
    held: HashSet<String>,

    /// Jump key went down since the last frame.
    jump_pressed: bool,

    /// Pointer motion is being captured for looking.
    look_locked: bool,

    /// Pointer motion accumulated since the last frame (pixels).
    look_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns the bound action, if any.
    ///
    /// Key repeat arrives as more key downs while held and is not a new press.
    pub fn key_down(&mut self, controls: &Controls, code: &str) -> Option<Action> {
        let pressed = self.held.insert(code.to_string());
        let action = controls.action_for(code)?;
        if action == Action::Jump && pressed {
            self.jump_pressed = true;
        }
        Some(action)
    }

    /// Handle a key release. Returns the bound action, if any.
    pub fn key_up(&mut self, controls: &Controls, code: &str) -> Option<Action> {
        self.held.remove(code);
        controls.action_for(code)
    }

    /// Check if the key bound to `action` is held.
    pub fn is_held(&self, controls: &Controls, action: Action) -> bool {
        self.held.contains(controls.key_for(action))
    }

    /// Accumulate pointer motion. Ignored unless look-lock is engaged.
    pub fn pointer_motion(&mut self, delta_x: f32, delta_y: f32) {
        if self.look_locked && delta_x.is_finite() && delta_y.is_finite() {
            self.look_delta += Vec2::new(delta_x, delta_y);
        }
    }

    /// Engage or release look-lock. Releasing drops any pending motion.
    pub fn set_look_lock(&mut self, locked: bool) {
        self.look_locked = locked;
        if !locked {
            self.look_delta = Vec2::ZERO;
        }
    }

    /// Check if look-lock is engaged.
    pub fn look_locked(&self) -> bool {
        self.look_locked
    }

    /// Snapshot this frame's input under the current bindings and consume
    /// the jump edge.
    pub fn take_frame(&mut self, controls: &Controls) -> InputFrame {
        let frame = InputFrame {
            forward: self.is_held(controls, Action::Forward),
            backward: self.is_held(controls, Action::Backward),
            left: self.is_held(controls, Action::Left),
            right: self.is_held(controls, Action::Right),
            jump: self.jump_pressed,
        };
        self.jump_pressed = false;
        frame
    }

    /// Drain the accumulated pointer motion.
    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }

    /// Drop edges and motion that arrived while they could not apply.
    ///
    /// Held keys stay held.
    pub fn discard_pending(&mut self) {
        self.jump_pressed = false;
        self.look_delta = Vec2::ZERO;
    }
}
