//! Debug layout session resource.
//!
//! [`DebugSession`] is the explicit session object of the layout overlay,
//! created at scene start and torn down at scene end. It records:
//! - whether debug mode is on
//! - which targets are tracked, keyed by slot
//! - the live [`HandleSet`] of every debug-enabled target
//! - the indicator overlay root, if one exists
//!
//! The session only does bookkeeping. Spawning and despawning the entities it
//! refers to is the job of [`DebugOverlay`](crate::systems::debugmode::DebugOverlay).

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::geometry::Corner;

/// The four handle entities decorating one target, in [`Corner::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleSet {
    pub handles: [Entity; 4],
}

impl HandleSet {
    /// Handle entity for a given corner.
    pub fn handle(&self, corner: Corner) -> Entity {
        match corner {
            Corner::NorthWest => self.handles[0],
            Corner::NorthEast => self.handles[1],
            Corner::SouthWest => self.handles[2],
            Corner::SouthEast => self.handles[3],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.handles.iter().copied()
    }
}

#[derive(Resource, Debug, Default)]
pub struct DebugSession {
    enabled: bool,
    targets: FxHashMap<String, Entity>,
    handle_sets: FxHashMap<Entity, HandleSet>,
    overlay: Option<Entity>,
}

impl DebugSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Track `entity` under `slot`.
    ///
    /// Returns the entity previously occupying the slot, if it was a
    /// different one.
    pub fn track(&mut self, slot: impl Into<String>, entity: Entity) -> Option<Entity> {
        match self.targets.insert(slot.into(), entity) {
            Some(previous) if previous != entity => Some(previous),
            _ => None,
        }
    }

    /// Stop tracking `entity`. Returns the slot it occupied.
    pub fn untrack(&mut self, entity: Entity) -> Option<String> {
        let slot = self
            .targets
            .iter()
            .find(|(_, e)| **e == entity)
            .map(|(slot, _)| slot.clone())?;
        self.targets.remove(&slot);
        Some(slot)
    }

    pub fn is_tracked(&self, entity: Entity) -> bool {
        self.targets.values().any(|e| *e == entity)
    }

    pub fn target_in_slot(&self, slot: &str) -> Option<Entity> {
        self.targets.get(slot).copied()
    }

    /// Tracked targets sorted by slot name.
    pub fn tracked(&self) -> Vec<(String, Entity)> {
        let mut tracked: Vec<(String, Entity)> = self
            .targets
            .iter()
            .map(|(slot, e)| (slot.clone(), *e))
            .collect();
        tracked.sort_by(|a, b| a.0.cmp(&b.0));
        tracked
    }

    pub fn tracked_count(&self) -> usize {
        self.targets.len()
    }

    pub fn handle_set(&self, target: Entity) -> Option<&HandleSet> {
        self.handle_sets.get(&target)
    }

    /// Record a freshly spawned handle set. Returns the set it replaced, if any.
    pub fn insert_handle_set(&mut self, target: Entity, set: HandleSet) -> Option<HandleSet> {
        self.handle_sets.insert(target, set)
    }

    pub fn take_handle_set(&mut self, target: Entity) -> Option<HandleSet> {
        self.handle_sets.remove(&target)
    }

    pub fn handle_set_count(&self) -> usize {
        self.handle_sets.len()
    }

    /// Targets that currently own a handle set.
    pub fn decorated_targets(&self) -> Vec<Entity> {
        self.handle_sets.keys().copied().collect()
    }

    pub fn overlay(&self) -> Option<Entity> {
        self.overlay
    }

    pub fn set_overlay(&mut self, overlay: Entity) -> Option<Entity> {
        self.overlay.replace(overlay)
    }

    pub fn take_overlay(&mut self) -> Option<Entity> {
        self.overlay.take()
    }

    /// Forget every tracked target and handle set and switch off.
    pub fn clear(&mut self) {
        self.enabled = false;
        self.targets.clear();
        self.handle_sets.clear();
        self.overlay = None;
    }
}
