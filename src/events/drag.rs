//! Drag gesture events.
//!
//! The host (or [`pointer_gesture_system`](crate::systems::input::pointer_gesture_system))
//! routes a gesture to one entity as start → move* → end. The observers here
//! dispatch on what that entity is:
//! - a resize handle rescales its target
//! - a draggable target follows the pointer
//! - anything else is ignored
//!
//! There is no cancel: releasing ends the gesture and leaves the object where
//! it is.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::systems::debugmode::DebugOverlay;

/// A drag gesture started on `entity`.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragStartEvent {
    pub entity: Entity,
    /// Pointer position in world coordinates.
    pub pointer: Vec2,
}

/// The pointer moved while dragging `entity`.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragEvent {
    pub entity: Entity,
    pub pointer: Vec2,
}

/// The drag gesture on `entity` ended.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragEndEvent {
    pub entity: Entity,
    pub pointer: Vec2,
}

pub fn drag_start_observer(trigger: On<DragStartEvent>, mut overlay: DebugOverlay) {
    let entity = trigger.event().entity;
    if overlay.is_handle(entity) {
        overlay.begin_resize(entity);
    } else if overlay.is_draggable(entity) {
        debug!("Drag start on {:?}", entity);
    }
}

pub fn drag_observer(trigger: On<DragEvent>, mut overlay: DebugOverlay) {
    let DragEvent { entity, pointer } = *trigger.event();
    if overlay.is_handle(entity) {
        overlay.resize_to(entity, pointer);
    } else {
        overlay.drag_target_to(entity, pointer);
    }
}

pub fn drag_end_observer(trigger: On<DragEndEvent>, mut overlay: DebugOverlay) {
    let entity = trigger.event().entity;
    if overlay.is_handle(entity) {
        overlay.end_resize(entity);
    }
    debug!("Drag end on {:?}", entity);
}
