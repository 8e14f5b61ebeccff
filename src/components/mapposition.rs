//! World-space position component.
//!
//! [`MapPosition`] is the anchor (pivot) of an entity in scene coordinates.
//! Drag gestures move it, and resize handles measure their distance from it.
//! For entities with a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent it is
//! interpreted as an offset local to the parent's anchor.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self { pos: Vec2::ZERO }
    }
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    /// Create a MapPosition from an existing Vec2.
    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }
}
