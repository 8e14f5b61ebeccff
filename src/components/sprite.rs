use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key and its unscaled display size in world units.
/// The sprite is drawn centred on its [`MapPosition`](super::mapposition::MapPosition),
/// so its on-screen extent is `size * scale`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }

    /// Unscaled display size.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
