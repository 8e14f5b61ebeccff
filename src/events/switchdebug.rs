//! Event and observer to toggle the debug layout overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips the [`DebugSession`] between off and
//! on. The transition runs synchronously inside the observer: by the time
//! `world.trigger` returns, every tracked target has been decorated (or
//! stripped) and the indicator overlay rebuilt (or destroyed).
//!
//! [`DebugSession`]: crate::resources::debugsession::DebugSession
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::systems::debugmode::DebugOverlay;

/// Event used to toggle debug mode on/off.
///
/// This carries no data; the observer simply flips the current state.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles debug mode.
///
/// - If debug mode is on, targets lose drag and handles, indicators go away.
/// - If off, targets become draggable, get handles, indicators are rebuilt.
pub fn switch_debug_observer(_trigger: On<SwitchDebugEvent>, mut overlay: DebugOverlay) {
    debug!("SwitchDebugEvent triggered");
    overlay.toggle();
}
