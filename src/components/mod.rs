//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene: the plain transform and rendering data shared with the host
//! renderer, and the markers the debug overlay uses to find and decorate
//! editable objects.
//!
//! Submodules overview:
//! - [`debugtarget`] – marks an object the overlay can edit, with its slot and kind
//! - [`draggable`] – tag for targets that currently follow drag gestures
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`indicator`] – indicator overlay root and per-target label markers
//! - [`mapposition`] – world-space position (anchor) for an entity
//! - [`resizehandle`] – corner handle bound to a target, with its transient drag state
//! - [`scale`] – uniform scale factor for sprites
//! - [`screenposition`] – screen-space position for UI elements
//! - [`sprite`] – 2D sprite rendering component
//! - [`tint`] – color modulation applied at draw time

pub mod debugtarget;
pub mod draggable;
pub mod dynamictext;
pub mod indicator;
pub mod mapposition;
pub mod resizehandle;
pub mod scale;
pub mod screenposition;
pub mod sprite;
pub mod tint;
