//! Wakeroom Physics
//!
//! The player movement & collision controller for a first-person room walker.
//! Every simulated frame turns held input and a timestep into a new camera
//! position, constrained by the room's walls and its furniture.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Collision**: Room bounds clamping and furniture AABB push-out in the
//!   horizontal plane
//! - **Movement**: Input, gravity and jump integration, driving the collision
//!   system once per frame
//!
//! # Design Principles
//!
//! 1. **Determinism**: Same inputs and timesteps always produce the same state
//! 2. **No hidden state**: The caller owns [`PlayerState`]; the controller only
//!    reads its configuration
//! 3. **Infallible**: Bad numeric input is sanitized, never reported as an error

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{resolve_furniture, FurnitureBox, RoomBounds};
pub use movement::{InputFrame, MovementConfig, MovementController, MovementFlags, PlayerState};
