//! Target lifecycle events.
//!
//! Scene code announces targets to the debug overlay with these events:
//! - [`TargetSpawnedEvent`] after spawning a [`DebugTarget`](crate::components::debugtarget::DebugTarget)
//!   entity; an older target in the same slot is replaced and destroyed
//! - [`TargetRemovedEvent`] to destroy a target and its decorations
//! - [`SceneTeardownEvent`] when the scene ends
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::systems::debugmode::DebugOverlay;

/// A debug target was spawned and should be tracked.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetSpawnedEvent {
    pub entity: Entity,
}

/// A debug target should be destroyed.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetRemovedEvent {
    pub entity: Entity,
}

/// The scene is being torn down.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneTeardownEvent {}

pub fn target_spawned_observer(trigger: On<TargetSpawnedEvent>, mut overlay: DebugOverlay) {
    overlay.attach_target(trigger.event().entity);
}

pub fn target_removed_observer(trigger: On<TargetRemovedEvent>, mut overlay: DebugOverlay) {
    overlay.detach_target(trigger.event().entity);
}

pub fn scene_teardown_observer(_trigger: On<SceneTeardownEvent>, mut overlay: DebugOverlay) {
    overlay.teardown();
}
