//! Player movement physics system.
//!
//! This module implements the walking simulator's movement model:
//!
//! - Held-direction walking with normalized diagonals
//! - Velocity decay when no direction is held
//! - Gravity, ground clamp at eye height, and edge-triggered jumping
//! - Room bounds and furniture constraints
//!
//! # Design
//!
//! Movement is driven by the [`MovementController`], which takes an
//! [`InputFrame`] each frame and updates the caller's [`PlayerState`].
//!
//! Positions are camera (eye) positions, not feet positions: the floor for
//! the camera sits at the configured eye height.

mod config;
mod controller;
mod state;

pub use config::MovementConfig;
pub use controller::MovementController;
pub use state::{InputFrame, MovementFlags, PlayerState};
