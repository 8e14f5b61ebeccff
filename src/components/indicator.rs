//! Position/scale indicator overlay components.
//!
//! The overlay is a single root entity tagged [`IndicatorOverlay`]; each
//! label is a child tagged [`IndicatorLabel`] with a
//! [`ScreenPosition`](super::screenposition::ScreenPosition) and a
//! [`DynamicText`](super::dynamictext::DynamicText). Despawning the root
//! removes every label with it.

use bevy_ecs::prelude::{Component, Entity};

/// Root of the indicator overlay. At most one exists per debug session.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct IndicatorOverlay;

/// One text label describing the live geometry of `target`.
#[derive(Component, Clone, Copy, Debug)]
pub struct IndicatorLabel {
    pub target: Entity,
}
