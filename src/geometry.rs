//! Geometry helpers shared by the drag and resize logic.
//!
//! - [`BoundingBox`] – axis-aligned box in world space, built from a centre and a size
//! - [`Corner`] – the four corner roles used by resize handles
//! - [`distance`], [`scale_factor`] and [`clamp_scale`] – the math behind
//!   anchor-relative resizing

use glam::Vec2;

/// Corner role of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl Corner {
    /// All corners, in the order handles are spawned.
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthWest,
        Corner::SouthEast,
    ];

    /// Short label used in logs ("NW", "NE", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Corner::NorthWest => "NW",
            Corner::NorthEast => "NE",
            Corner::SouthWest => "SW",
            Corner::SouthEast => "SE",
        }
    }
}

/// Axis-aligned bounding box. Y grows downwards, so "north" is `min.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Box centred on `center` with the given full `size`.
    /// Negative sizes are normalized to proper min/max.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Point containment, edges included.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// World position of the given corner.
    pub fn corner(&self, corner: Corner) -> Vec2 {
        match corner {
            Corner::NorthWest => Vec2::new(self.min.x, self.min.y),
            Corner::NorthEast => Vec2::new(self.max.x, self.min.y),
            Corner::SouthWest => Vec2::new(self.min.x, self.max.y),
            Corner::SouthEast => Vec2::new(self.max.x, self.max.y),
        }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Ratio of the current anchor distance to the one captured at drag start.
///
/// A zero (or non-finite) initial distance yields a neutral factor of 1.0.
pub fn scale_factor(initial_distance: f32, new_distance: f32) -> f32 {
    if initial_distance <= f32::EPSILON || !initial_distance.is_finite() || !new_distance.is_finite() {
        return 1.0;
    }
    new_distance / initial_distance
}

/// Clamp a requested scale into `[min, max]`. NaN maps to `min`; an inverted
/// range yields `max`.
pub fn clamp_scale(scale: f32, min: f32, max: f32) -> f32 {
    if scale.is_nan() {
        return min;
    }
    scale.max(min).min(max)
}
