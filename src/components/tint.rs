//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component replaces [`Color::WHITE`] in sprite draw calls.
//! The debug drag controller also uses a tint as the "draggable" affordance on
//! simple targets, see [`Tint::draggable`].

use bevy_ecs::prelude::Component;

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const YELLOW: Color = Color::new(253, 249, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Color tint component for rendering modulation.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Create a new Tint with the specified RGBA values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Green wash shown on simple targets while they can be dragged.
    pub fn draggable() -> Self {
        Self::new(136, 255, 136, 255)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}
