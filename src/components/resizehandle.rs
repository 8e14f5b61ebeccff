//! Corner resize handle component.
//!
//! Each debug-enabled target is decorated by four handle entities, one per
//! [`Corner`]. A handle carries its own
//! [`MapPosition`](super::mapposition::MapPosition) (the corner of the
//! target's bounding box) and the transient state of an in-progress resize
//! gesture.

use bevy_ecs::prelude::{Component, Entity};

use crate::geometry::Corner;

/// State captured when a resize gesture starts on a handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleDrag {
    /// Target scale at drag start.
    pub initial_scale: f32,
    /// Distance from the target anchor to the handle at drag start.
    pub initial_anchor_distance: f32,
}

/// A resize handle decorating `target` at `corner`.
#[derive(Component, Clone, Debug)]
pub struct ResizeHandle {
    pub target: Entity,
    pub corner: Corner,
    /// `Some` while a resize gesture is in progress on this handle.
    pub drag: Option<HandleDrag>,
}

impl ResizeHandle {
    pub fn new(target: Entity, corner: Corner) -> Self {
        Self {
            target,
            corner,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
