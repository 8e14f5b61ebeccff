//! Position/scale indicator overlay.
//!
//! The overlay is rebuilt from scratch on every change: the old root (and its
//! labels) is despawned and a new one spawned from live geometry. Object
//! counts are human-sized, so no incremental patching is done.

use bevy_ecs::hierarchy::ChildOf;
use glam::Vec2;

use crate::components::dynamictext::DynamicText;
use crate::components::indicator::{IndicatorLabel, IndicatorOverlay};
use crate::components::screenposition::ScreenPosition;
use crate::components::tint::Color;
use crate::systems::debugmode::{DebugOverlay, despawn_if_present};

/// Font key the host renderer uses for indicator labels.
pub const INDICATOR_FONT: &str = "debug";

/// Label text for one target: rounded position and two-decimal scale.
pub fn indicator_text(slot: &str, pos: Vec2, scale: f32) -> String {
    format!(
        "{}: x={:.0} y={:.0} scale={:.2}",
        slot,
        pos.x.round(),
        pos.y.round(),
        scale
    )
}

impl DebugOverlay<'_, '_> {
    /// Destroy the current overlay and, when debug mode is on, spawn a new one
    /// with one label per target that can be measured.
    ///
    /// Targets that became measurable since they were enabled get their
    /// handle set here first, so a labelled target always has handles.
    pub fn rebuild_indicators(&mut self) {
        self.destroy_indicators();
        if !self.session.is_enabled() {
            return;
        }
        self.create_pending_handles();

        let origin = Vec2::new(self.config.indicator_x, self.config.indicator_y);
        let spacing = self.config.indicator_line_spacing;
        let font_size = self.config.indicator_font_size;

        let root = self
            .commands
            .spawn((IndicatorOverlay, ScreenPosition::new(origin.x, origin.y)))
            .id();

        let mut line = 0;
        for (slot, target) in self.session.tracked() {
            if self.targets.bounding_box(target).is_none() {
                continue;
            }
            let (Some(pos), Some(scale)) =
                (self.targets.position(target), self.targets.scale(target))
            else {
                continue;
            };
            self.commands.spawn((
                IndicatorLabel { target },
                ScreenPosition::new(origin.x, origin.y + line as f32 * spacing),
                DynamicText::new(
                    indicator_text(&slot, pos, scale),
                    INDICATOR_FONT,
                    font_size,
                    Color::YELLOW,
                ),
                ChildOf(root),
            ));
            line += 1;
        }

        self.session.set_overlay(root);
    }

    /// Despawn the overlay root and its labels. No-op when there is none.
    pub fn destroy_indicators(&mut self) {
        if let Some(root) = self.session.take_overlay() {
            despawn_if_present(&mut self.commands, root);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_text_rounds_position() {
        let text = indicator_text("uncle", Vec2::new(200.4, 299.6), 1.0);
        assert_eq!(text, "uncle: x=200 y=300 scale=1.00");
    }

    #[test]
    fn test_indicator_text_scale_two_decimals() {
        let text = indicator_text("jukebox", Vec2::new(0.0, 0.0), 1.7);
        assert_eq!(text, "jukebox: x=0 y=0 scale=1.70");
    }
}
