//! Input systems.
//!
//! - [`debug_toggle_system`] emits a [`SwitchDebugEvent`] when the debug key
//!   was just pressed.
//! - [`pointer_gesture_system`] turns raw pointer state into the drag gesture
//!   events ([`DragStartEvent`], [`DragEvent`], [`DragEndEvent`]) routed to
//!   the entity under the pointer.
//!
//! Both consume the `just_*` edges they read, so the host only has to record
//! what happened since the previous frame.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::draggable::Draggable;
use crate::components::mapposition::MapPosition;
use crate::components::resizehandle::ResizeHandle;
use crate::events::drag::{DragEndEvent, DragEvent, DragStartEvent};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::geometry::BoundingBox;
use crate::resources::debugsession::DebugSession;
use crate::resources::editorconfig::EditorConfig;
use crate::resources::input::InputState;
use crate::systems::target::Targets;

/// Trigger [`SwitchDebugEvent`] on a debug key press.
pub fn debug_toggle_system(mut input: ResMut<InputState>, mut commands: Commands) {
    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    input.mode_debug.just_pressed = false;
    input.mode_debug.just_released = false;
}

/// Entity a press at `point` should grab: a handle if one is under the
/// pointer, otherwise the topmost (last in slot order) draggable target.
pub fn pick_at(
    point: Vec2,
    handle_size: f32,
    session: &DebugSession,
    targets: &Targets,
    handles: &Query<(Entity, &MapPosition), With<ResizeHandle>>,
    draggable: &Query<Entity, With<Draggable>>,
) -> Option<Entity> {
    let hit_handle = handles
        .iter()
        .filter(|(_, pos)| {
            BoundingBox::from_center_size(pos.pos, Vec2::splat(handle_size)).contains_point(point)
        })
        .min_by(|(_, a), (_, b)| {
            a.pos
                .distance_squared(point)
                .total_cmp(&b.pos.distance_squared(point))
        })
        .map(|(e, _)| e);
    if hit_handle.is_some() {
        return hit_handle;
    }

    session
        .tracked()
        .into_iter()
        .rev()
        .map(|(_, target)| target)
        .filter(|target| draggable.contains(*target))
        .find(|target| {
            targets
                .bounding_box(*target)
                .is_some_and(|bbox| bbox.contains_point(point))
        })
}

/// Translate pointer press/move/release into drag gesture events.
///
/// A gesture only starts while debug mode is on. Once started it keeps its
/// entity until release, even if the pointer leaves the object.
pub fn pointer_gesture_system(
    mut input: ResMut<InputState>,
    session: Res<DebugSession>,
    config: Res<EditorConfig>,
    targets: Targets,
    handles: Query<(Entity, &MapPosition), With<ResizeHandle>>,
    draggable: Query<Entity, With<Draggable>>,
    mut commands: Commands,
) {
    let pointer = &mut input.pointer;
    let position = pointer.position;

    if pointer.just_pressed {
        pointer.just_pressed = false;
        pointer.moved = false;
        if session.is_enabled() {
            if let Some(entity) = pick_at(
                position,
                config.handle_size,
                &session,
                &targets,
                &handles,
                &draggable,
            ) {
                pointer.active_drag = Some(entity);
                commands.trigger(DragStartEvent {
                    entity,
                    pointer: position,
                });
            }
        }
    }

    if pointer.moved {
        pointer.moved = false;
        if pointer.down {
            if let Some(entity) = pointer.active_drag {
                commands.trigger(DragEvent {
                    entity,
                    pointer: position,
                });
            }
        }
    }

    if pointer.just_released {
        pointer.just_released = false;
        if let Some(entity) = pointer.active_drag.take() {
            commands.trigger(DragEndEvent {
                entity,
                pointer: position,
            });
        }
    }
}
