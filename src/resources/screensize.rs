//! Stage size resource.
//!
//! Stores the dimensions of the scene in pixels. Scene setup reads it to lay
//! out sprites relative to the stage edges.

use bevy_ecs::prelude::Resource;

/// Current stage size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
