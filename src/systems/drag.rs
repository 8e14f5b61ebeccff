//! Drag controller.
//!
//! Makes a target's anchor follow the pointer while a drag gesture is active.
//! The follow is 1:1 with no grab offset: wherever the object is grabbed, its
//! anchor snaps to the pointer.
//!
//! Enabling inserts the [`Draggable`] tag (plus a [`Tint`] affordance on
//! simple targets). The drag observer is global and filters on the tag, so
//! enabling is idempotent by construction.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::debugtarget::TargetKind;
use crate::components::draggable::Draggable;
use crate::components::tint::Tint;
use crate::systems::debugmode::DebugOverlay;

impl DebugOverlay<'_, '_> {
    /// Make `target` follow drag gestures.
    pub fn enable_drag(&mut self, target: Entity) {
        let Some(kind) = self.targets.kind(target) else {
            return;
        };
        let Ok(mut entity) = self.commands.get_entity(target) else {
            return;
        };
        entity.insert(Draggable);
        if kind == TargetKind::Simple {
            entity.insert(Tint::draggable());
        }
    }

    /// Remove drag interactivity and the draggable affordance.
    pub fn disable_drag(&mut self, target: Entity) {
        let Some(kind) = self.targets.kind(target) else {
            return;
        };
        let Ok(mut entity) = self.commands.get_entity(target) else {
            return;
        };
        entity.remove::<Draggable>();
        if kind == TargetKind::Simple {
            entity.remove::<Tint>();
        }
    }

    pub fn is_draggable(&self, target: Entity) -> bool {
        self.draggable.contains(target)
    }

    /// Apply one drag-move event: the anchor jumps to `pointer`, handles follow
    /// and the indicators are rebuilt. Ignored for non-draggable entities.
    pub fn drag_target_to(&mut self, target: Entity, pointer: Vec2) -> bool {
        if !self.is_draggable(target) {
            debug!("Ignoring drag on non-draggable {:?}", target);
            return false;
        }
        if !self.targets.set_position(target, pointer) {
            return false;
        }
        self.refresh_handles(target);
        self.rebuild_indicators();
        true
    }
}
