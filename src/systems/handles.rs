//! Resize handle sets.
//!
//! Every debug-enabled target is decorated by four corner handles. Dragging a
//! handle rescales the target uniformly by the ratio of the current
//! anchor-to-pointer distance to the anchor-to-handle distance captured at
//! drag start:
//!
//! ```text
//! new_scale = clamp(initial_scale * |anchor - pointer| / |anchor - handle_at_start|, min, max)
//! ```
//!
//! Moving any corner away from the anchor grows the target and moving it
//! closer shrinks it, whichever corner is used, and the rate is relative to
//! the current size. After each step all four handles are moved to the
//! corners of the new bounding box.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, warn};

use crate::components::mapposition::MapPosition;
use crate::components::resizehandle::{HandleDrag, ResizeHandle};
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::geometry::{Corner, clamp_scale, distance, scale_factor};
use crate::resources::debugsession::HandleSet;
use crate::systems::debugmode::{DebugOverlay, despawn_if_present};

/// Texture key the host renderer uses for handle squares.
pub const HANDLE_TEX_KEY: &str = "debug_handle";

impl DebugOverlay<'_, '_> {
    /// Spawn a fresh handle set at the corners of `target`'s bounding box.
    ///
    /// Any existing set for `target` is destroyed first. Targets without a
    /// bounding box are skipped for now.
    pub fn create_handles(&mut self, target: Entity) {
        self.destroy_handles(target);
        let Some(bbox) = self.targets.bounding_box(target) else {
            warn!(
                "No bounding box for {:?} ({:?}), skipping resize handles",
                target,
                self.targets.slot(target)
            );
            return;
        };
        let size = self.config.handle_size;
        let handles = Corner::ALL.map(|corner| {
            self.commands
                .spawn((
                    ResizeHandle::new(target, corner),
                    MapPosition::from_vec(bbox.corner(corner)),
                    Sprite::new(HANDLE_TEX_KEY, size, size),
                    Tint::default(),
                ))
                .id()
        });
        self.session.insert_handle_set(target, HandleSet { handles });
        debug!("Created handles for {:?}", target);
    }

    /// Remove the handle set of `target`. No-op when there is none.
    pub fn destroy_handles(&mut self, target: Entity) {
        let Some(set) = self.session.take_handle_set(target) else {
            return;
        };
        for handle in set.iter() {
            despawn_if_present(&mut self.commands, handle);
        }
        debug!("Destroyed handles for {:?}", target);
    }

    /// Create the missing handle sets of an enabled session: targets that had
    /// no bounding box when they were enabled get one as soon as they can be
    /// measured. Returns how many sets were created.
    pub fn create_pending_handles(&mut self) -> usize {
        if !self.session.is_enabled() {
            return 0;
        }
        let mut created = 0;
        for (slot, target) in self.session.tracked() {
            if self.session.handle_set(target).is_some()
                || self.targets.bounding_box(target).is_none()
            {
                continue;
            }
            debug!("Target '{}' became measurable, adding handles", slot);
            self.create_handles(target);
            created += 1;
        }
        created
    }

    /// Move the handles of `target` to the corners of its current bounding box.
    pub fn refresh_handles(&mut self, target: Entity) {
        let Some(set) = self.session.handle_set(target).copied() else {
            return;
        };
        let Some(bbox) = self.targets.bounding_box(target) else {
            return;
        };
        for corner in Corner::ALL {
            if let Ok((_, mut pos)) = self.handles.get_mut(set.handle(corner)) {
                pos.pos = bbox.corner(corner);
            }
        }
    }

    pub fn is_handle(&self, entity: Entity) -> bool {
        self.handles.contains(entity)
    }

    /// Drag start on a handle: capture the target's scale and the
    /// anchor-to-handle distance.
    pub fn begin_resize(&mut self, handle: Entity) -> bool {
        let Ok((resize, pos)) = self.handles.get(handle) else {
            return false;
        };
        let (target, corner, handle_pos) = (resize.target, resize.corner, pos.pos);
        let (Some(anchor), Some(initial_scale)) =
            (self.targets.position(target), self.targets.scale(target))
        else {
            warn!("Resize target {:?} unavailable, ignoring drag start", target);
            return false;
        };
        let initial_anchor_distance = distance(anchor, handle_pos);
        debug!(
            "Resize start on {} handle of {:?}: scale {}, anchor distance {}",
            corner.label(),
            target,
            initial_scale,
            initial_anchor_distance
        );
        if let Ok((mut resize, _)) = self.handles.get_mut(handle) {
            resize.drag = Some(HandleDrag {
                initial_scale,
                initial_anchor_distance,
            });
        }
        true
    }

    /// Drag move on a handle. Returns the applied scale.
    pub fn resize_to(&mut self, handle: Entity, pointer: Vec2) -> Option<f32> {
        let (target, drag) = {
            let (resize, _) = self.handles.get(handle).ok()?;
            (resize.target, resize.drag)
        };
        let Some(drag) = drag else {
            debug!("Drag on handle {:?} without drag start", handle);
            return None;
        };
        let anchor = self.targets.position(target)?;
        let factor = scale_factor(drag.initial_anchor_distance, distance(anchor, pointer));
        let new_scale = clamp_scale(
            drag.initial_scale * factor,
            self.config.min_scale,
            self.config.max_scale,
        );
        if !self.targets.set_scale(target, new_scale) {
            return None;
        }
        self.refresh_handles(target);
        self.rebuild_indicators();
        Some(new_scale)
    }

    /// Drag end on a handle: forget the transient state, keep the scale.
    pub fn end_resize(&mut self, handle: Entity) {
        if let Ok((mut resize, _)) = self.handles.get_mut(handle) {
            resize.drag = None;
        }
    }
}
