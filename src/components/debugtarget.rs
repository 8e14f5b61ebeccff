//! Marks an entity as a target of the debug layout overlay.
//!
//! A target lives in a named *slot* ("uncle", "response_bubble", ...). Only
//! one live entity occupies a slot; spawning a new target into an occupied
//! slot replaces the previous one (see
//! [`TargetSpawnedEvent`](crate::events::target::TargetSpawnedEvent)).

use bevy_ecs::prelude::Component;

/// How a target maps onto visual primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// One scalable primitive: the entity itself carries `Sprite` and `Scale`.
    Simple,
    /// An anchor entity whose children carry `Sprite` and `Scale`. The first
    /// child is the primary one and drives bounding-box math.
    Composite,
}

/// Debug overlay target marker.
#[derive(Component, Clone, Debug)]
pub struct DebugTarget {
    /// Logical slot name, stable across replacements.
    pub slot: String,
    pub kind: TargetKind,
}

impl DebugTarget {
    pub fn simple(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            kind: TargetKind::Simple,
        }
    }

    pub fn composite(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            kind: TargetKind::Composite,
        }
    }
}
