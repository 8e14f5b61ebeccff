//! Uniform view over debug targets.
//!
//! [`Targets`] hides the difference between [`TargetKind::Simple`] and
//! [`TargetKind::Composite`] targets behind one capability surface:
//! position, scale and bounding box. Every "how do I scale this kind of
//! thing" decision lives here, once per variant.
//!
//! # Composite targets
//!
//! A composite target is an anchor entity whose parts are its children
//! (`ChildOf`). Each part carries a local-offset [`MapPosition`], a [`Sprite`]
//! and a [`Scale`]. The first child is the primary part:
//! - its centre (anchor + local offset) and scaled size give the bounding box
//! - its scale is reported as the target's scale
//! - [`Targets::set_scale`] writes the same scale to every part
//!
//! A composite without parts yet has no bounding box and no scale.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use glam::Vec2;
use log::warn;

use crate::components::debugtarget::{DebugTarget, TargetKind};
use crate::components::mapposition::MapPosition;
use crate::components::resizehandle::ResizeHandle;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::geometry::BoundingBox;

type TargetData = (
    Entity,
    &'static DebugTarget,
    &'static mut MapPosition,
    Option<&'static mut Scale>,
    Option<&'static Sprite>,
    Option<&'static Children>,
);

type PartData = (&'static MapPosition, &'static mut Scale, &'static Sprite);

/// Read/write access to every live debug target.
#[derive(SystemParam)]
pub struct Targets<'w, 's> {
    targets: Query<'w, 's, TargetData, Without<ResizeHandle>>,
    parts: Query<'w, 's, PartData, (With<ChildOf>, Without<DebugTarget>, Without<ResizeHandle>)>,
}

impl Targets<'_, '_> {
    /// Whether `entity` is a live target.
    pub fn contains(&self, entity: Entity) -> bool {
        self.targets.contains(entity)
    }

    /// All live target entities.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.targets.iter().map(|(e, ..)| e)
    }

    pub fn slot(&self, entity: Entity) -> Option<String> {
        self.targets
            .get(entity)
            .ok()
            .map(|(_, target, ..)| target.slot.clone())
    }

    pub fn kind(&self, entity: Entity) -> Option<TargetKind> {
        self.targets.get(entity).ok().map(|(_, target, ..)| target.kind)
    }

    /// Anchor position.
    pub fn position(&self, entity: Entity) -> Option<Vec2> {
        self.targets.get(entity).ok().map(|(_, _, pos, ..)| pos.pos)
    }

    /// Move the anchor. Returns `false` if `entity` is not a live target.
    pub fn set_position(&mut self, entity: Entity, pos: Vec2) -> bool {
        match self.targets.get_mut(entity) {
            Ok((_, _, mut map_pos, ..)) => {
                map_pos.pos = pos;
                true
            }
            Err(_) => false,
        }
    }

    /// Current uniform scale, `None` when unavailable.
    pub fn scale(&self, entity: Entity) -> Option<f32> {
        let (_, target, _, scale, _, children) = self.targets.get(entity).ok()?;
        match target.kind {
            TargetKind::Simple => scale.map(|s| s.scale),
            TargetKind::Composite => {
                let primary = children?.iter().next()?;
                self.parts.get(primary).ok().map(|(_, s, _)| s.scale)
            }
        }
    }

    /// Apply a uniform scale. Returns `false` (and logs) when nothing could be scaled.
    pub fn set_scale(&mut self, entity: Entity, value: f32) -> bool {
        let Ok((_, target, _, scale, _, children)) = self.targets.get_mut(entity) else {
            return false;
        };
        match target.kind {
            TargetKind::Simple => match scale {
                Some(mut scale) => {
                    scale.scale = value;
                    true
                }
                None => {
                    warn!("Target '{}' has no Scale, ignoring set_scale", target.slot);
                    false
                }
            },
            TargetKind::Composite => {
                let slot = target.slot.clone();
                let parts: Vec<Entity> = children.map(|c| c.iter().collect()).unwrap_or_default();
                let mut scaled = 0;
                for part in parts {
                    if let Ok((_, mut part_scale, _)) = self.parts.get_mut(part) {
                        part_scale.scale = value;
                        scaled += 1;
                    }
                }
                if scaled == 0 {
                    warn!("Composite target '{}' has no parts, ignoring set_scale", slot);
                }
                scaled > 0
            }
        }
    }

    /// World-space bounding box, `None` when the target has nothing to measure.
    pub fn bounding_box(&self, entity: Entity) -> Option<BoundingBox> {
        let (_, target, pos, scale, sprite, children) = self.targets.get(entity).ok()?;
        match target.kind {
            TargetKind::Simple => {
                let sprite = sprite?;
                let scale = scale.map(|s| s.scale).unwrap_or(1.0);
                Some(BoundingBox::from_center_size(pos.pos, sprite.size() * scale))
            }
            TargetKind::Composite => {
                let primary = children?.iter().next()?;
                let (offset, scale, sprite) = self.parts.get(primary).ok()?;
                Some(BoundingBox::from_center_size(
                    pos.pos + offset.pos,
                    sprite.size() * scale.scale,
                ))
            }
        }
    }
}
