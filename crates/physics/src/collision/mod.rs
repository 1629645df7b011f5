//! Collision constraints for the player.
//!
//! The room is an axis-aligned box centered on the origin, and every piece of
//! furniture is an axis-aligned footprint on the floor plane. The player is
//! treated as a point with a clearance margin.
//!
//! # Constraints
//!
//! - [`RoomBounds`]: clamps the player inside the walls, per axis
//! - [`FurnitureBox`]: pushes the player out along the axis of least
//!   penetration
//!
//! Furniture is resolved one box at a time in declaration order, so a
//! correction from one box may move the player into another. At the scale of
//! a bedroom this is an accepted approximation.

mod bounds;
mod furniture;

pub use bounds::RoomBounds;
pub use furniture::{resolve_furniture, FurnitureBox};
