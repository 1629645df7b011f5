//! Wakeroom Game Logic
//!
//! This crate contains the session layer around the movement controller:
//!
//! - Input aggregation from key codes and pointer motion
//! - Room layouts (walls, furniture, light, wake-up poses)
//! - Player settings and key bindings
//! - The session state machine and frame scheduling
//!
//! # Architecture
//!
//! The host forwards device events into a [`Session`] as they arrive and
//! calls it once per display frame. The session drains the input, runs the
//! physics, and hands a [`FrameOutput`] to the renderer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Session                              │
//! │  ┌─────────┐    ┌──────────┐    ┌────────────────────────┐  │
//! │  │ Input   │───►│ Physics  │───►│ Frame output           │  │
//! │  │ State   │    │ (movement│    │ (camera pose, state,   │  │
//! │  └─────────┘    │ collision)    │  whiteout)             │  │
//! │                 └──────────┘    └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod camera;
pub mod gaze;
pub mod input;
pub mod room;
pub mod scheduler;
pub mod session;
pub mod settings;

// Re-export main types
pub use camera::CameraPose;
pub use gaze::LightGaze;
pub use input::{Action, InputState};
pub use room::Room;
pub use scheduler::{FrameScheduler, StepPlan, Timestep};
pub use session::{FrameOutput, FrameSink, Session, SessionState};
pub use settings::{Controls, GraphicsQuality, Settings, SettingsError};

// Re-export physics types for convenience
pub use wakeroom_physics::{
    FurnitureBox, InputFrame, MovementConfig, MovementController, PlayerState, RoomBounds,
};
