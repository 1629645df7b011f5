//! Player settings.
//!
//! Mirrors the settings blob the settings screen stores:
//!
//! ```json
//! {
//!   "audio": 0.7,
//!   "brightness": 1.0,
//!   "renderDistance": 25.0,
//!   "speed": 1.0,
//!   "graphics": "medium",
//!   "controls": {
//!     "forward": "KeyW", "backward": "KeyS", "left": "KeyA",
//!     "right": "KeyD", "jump": "Space", "pause": "KeyP"
//!   }
//! }
//! ```
//!
//! Missing keys fall back to their defaults. Storing the blob is the host's
//! business; this module only parses and validates it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::Action;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("speed multiplier must be a positive number, got {0}")]
    InvalidSpeed(f32),

    #[error("no key bound to {0:?}")]
    Unbound(Action),

    #[error("key {code} is bound to both {first:?} and {second:?}")]
    DuplicateBinding {
        code: String,
        first: Action,
        second: Action,
    },
}

/// Rendering quality preset. Only forwarded to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsQuality {
    Low,
    #[default]
    Medium,
    High,
}

/// Action-to-key-code binding table (DOM `KeyboardEvent.code` names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub jump: String,
    pub pause: String,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            forward: "KeyW".to_string(),
            backward: "KeyS".to_string(),
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
            jump: "Space".to_string(),
            pause: "KeyP".to_string(),
        }
    }
}

impl Controls {
    /// Key code bound to an action.
    pub fn key_for(&self, action: Action) -> &str {
        match action {
            Action::Forward => &self.forward,
            Action::Backward => &self.backward,
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Jump => &self.jump,
            Action::Pause => &self.pause,
        }
    }

    /// Action bound to a key code, if any.
    pub fn action_for(&self, code: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|&action| self.key_for(action) == code)
    }

    /// Bind an action to a key code.
    pub fn bind(&mut self, action: Action, code: impl Into<String>) {
        let code = code.into();
        match action {
            Action::Forward => self.forward = code,
            Action::Backward => self.backward = code,
            Action::Left => self.left = code,
            Action::Right => self.right = code,
            Action::Jump => self.jump = code,
            Action::Pause => self.pause = code,
        }
    }

    /// Check that every action has a key and no key serves two actions.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (index, &action) in Action::ALL.iter().enumerate() {
            let code = self.key_for(action);
            if code.trim().is_empty() {
                return Err(SettingsError::Unbound(action));
            }
            if let Some(&other) = Action::ALL[index + 1..]
                .iter()
                .find(|&&other| self.key_for(other) == code)
            {
                return Err(SettingsError::DuplicateBinding {
                    code: code.to_string(),
                    first: action,
                    second: other,
                });
            }
        }
        Ok(())
    }
}

/// Player settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Master volume (0.0 - 1.0).
    pub audio: f32,

    /// Scene brightness multiplier.
    pub brightness: f32,

    /// Fog far distance (meters).
    pub render_distance: f32,

    /// Multiplier on the walking speed.
    pub speed: f32,

    /// Rendering quality preset.
    pub graphics: GraphicsQuality,

    /// Key bindings.
    pub controls: Controls,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio: 0.7,
            brightness: 1.0,
            render_distance: 25.0,
            speed: 1.0,
            graphics: GraphicsQuality::default(),
            controls: Controls::default(),
        }
    }
}

impl Settings {
    /// Parse and validate a settings blob.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Serialize to the settings blob format.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(SettingsError::InvalidSpeed(self.speed));
        }
        self.controls.validate()
    }
}
