use bevy_ecs::prelude::Component;

/// Tag component: the entity follows the pointer while a drag gesture is active.
///
/// Inserted by the drag controller when debug mode is on. The drag observer is
/// global and only acts on entities with this tag, so enabling a target twice
/// does not register a second handler.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Draggable;
