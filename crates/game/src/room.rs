//! Room layouts.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use wakeroom_physics::{FurnitureBox, RoomBounds};

/// A room the player wakes up in: walls, furniture, the wall light, and the
/// poses the session moves the player between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Walls, floor and ceiling.
    pub bounds: RoomBounds,

    /// Furniture footprints, in collision resolution order.
    pub furniture: Vec<FurnitureBox>,

    /// Wall light the player can stare into.
    pub light: Vec3,

    /// Camera position while waking up (lying on the bed).
    pub wake_position: Vec3,

    /// Where the player stands once awake. The height is replaced by the
    /// configured eye height.
    pub start_position: Vec3,

    /// Facing once awake (yaw in radians).
    pub start_facing: f32,
}

impl Room {
    /// Create an empty room of the given size.
    pub fn new(id: &str, name: &str, bounds: RoomBounds) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            bounds,
            furniture: Vec::new(),
            light: Vec3::new(0.0, bounds.height, 0.0),
            wake_position: Vec3::ZERO,
            start_position: Vec3::ZERO,
            start_facing: 0.0,
        }
    }

    /// The 5 × 5 m bedroom with a 4 m ceiling.
    pub fn bedroom() -> Self {
        let bounds = RoomBounds::new(5.0, 5.0, 4.0);
        let mut room = Self::new("bedroom", "Bedroom", bounds);

        room.add_furniture("bed", Vec2::new(-1.5, -2.0), 1.5, 2.0);
        room.add_furniture("dressing table", Vec2::new(1.5, -1.5), 1.2, 0.9);
        room.add_furniture("study table", Vec2::new(-0.5, 2.0), 2.0, 1.2);
        room.add_furniture("chair", Vec2::new(-0.5, 2.8), 0.8, 0.8);

        room.light = Self::corner_light(bounds);
        room.wake_position = Vec3::new(-1.5, 1.2, -2.0);
        room.start_position = Vec3::ZERO;
        room
    }

    /// The larger 10 × 10 m bedroom with a 3 m ceiling.
    pub fn large_bedroom() -> Self {
        let bounds = RoomBounds::new(10.0, 10.0, 3.0);
        let mut room = Self::new("large_bedroom", "Large Bedroom", bounds);

        room.add_furniture("bed", Vec2::new(-3.0, -3.0), 1.8, 2.2);
        room.add_furniture("dressing table", Vec2::new(3.0, -2.5), 1.2, 0.9);
        room.add_furniture("study table", Vec2::new(2.0, 3.0), 1.6, 1.2);
        room.add_furniture("chair", Vec2::new(2.0 - 1.6 * 0.6, 3.0), 1.6 * 0.4, 1.2 * 0.4);

        room.light = Self::corner_light(bounds);
        room.wake_position = Vec3::new(-3.0, 0.3, -3.0);
        room.start_position = Vec3::ZERO;
        room
    }

    /// Add a piece of furniture by its full footprint size.
    pub fn add_furniture(&mut self, name: &str, center: Vec2, width: f32, length: f32) {
        self.furniture.push(FurnitureBox::from_size(name, center, width, length));
    }

    /// Find a piece of furniture by name.
    pub fn furniture_named(&self, name: &str) -> Option<&FurnitureBox> {
        self.furniture.iter().find(|f| f.name == name)
    }

    /// Furniture footprints the point is inside of, with `clearance`.
    pub fn blocking(&self, position: Vec3, clearance: f32) -> impl Iterator<Item = &FurnitureBox> {
        self.furniture
            .iter()
            .filter(move |f| f.overlaps(position, clearance))
    }

    /// Light near the ceiling, one meter in from the +X wall and two from +Z.
    fn corner_light(bounds: RoomBounds) -> Vec3 {
        Vec3::new(
            bounds.width / 2.0 - 1.0,
            bounds.height - 0.5,
            bounds.depth / 2.0 - 2.0,
        )
    }
}
