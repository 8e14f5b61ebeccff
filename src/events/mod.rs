//! Event types and observers used by the overlay.
//!
//! Events decouple the host and the scene code from the overlay: the scene
//! announces targets, the input systems emit gestures, and the observers here
//! drive the [`DebugOverlay`](crate::systems::debugmode::DebugOverlay).
//!
//! Submodules:
//! - [`drag`] – drag gesture start/move/end routed to a target or a handle
//! - [`switchdebug`] – toggle debug mode on/off
//! - [`target`] – target spawn, removal and scene teardown
pub mod drag;
pub mod switchdebug;
pub mod target;
