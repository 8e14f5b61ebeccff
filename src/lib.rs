//! Scene overlay library.
//!
//! A debug layout overlay for 2D scenes built on `bevy_ecs`: toggle debug
//! mode, drag objects around, rescale them with corner handles and read their
//! live position/scale from an indicator overlay.
//!
//! This module exposes the overlay's ECS components, resources, systems, and
//! events for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod geometry;
pub mod replay;
pub mod resources;
pub mod systems;
