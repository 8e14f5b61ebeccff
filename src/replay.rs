//! Scripted session replay.
//!
//! A replay script is a JSON array of host inputs, applied one at a time with
//! one schedule tick after each:
//!
//! ```json
//! [
//!   { "type": "toggle_debug" },
//!   { "type": "pointer_down", "x": 400.0, "y": 425.0 },
//!   { "type": "pointer_move", "x": 420.0, "y": 400.0 },
//!   { "type": "pointer_up" },
//!   { "type": "new_bubble", "text": "Another bowl?" }
//! ]
//! ```
//!
//! [`layout_snapshot`] reports the live geometry of every tracked target, the
//! same values the indicator overlay shows.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::events::target::{SceneTeardownEvent, TargetRemovedEvent};
use crate::game::spawn_response_bubble;
use crate::resources::debugsession::DebugSession;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::systems::target::Targets;

/// One recorded host input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostInput {
    /// Press and release the debug toggle key.
    ToggleDebug,
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    /// A new response arrives and replaces the dialogue bubble.
    NewBubble { text: String },
    /// Destroy the target occupying `slot`.
    RemoveTarget { slot: String },
    /// End the scene.
    Teardown,
}

/// Geometry of one tracked target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEntry {
    pub slot: String,
    pub x: f32,
    pub y: f32,
    pub scale: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Parse a replay script.
pub fn parse_script(json: &str) -> Result<Vec<HostInput>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid replay script: {}", e))
}

/// Read and parse a replay script file.
pub fn load_script(path: &Path) -> Result<Vec<HostInput>, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read replay script {:?}: {}", path, e))?;
    parse_script(&json)
}

/// Apply one input and run `update` once.
pub fn apply_input(world: &mut World, update: &mut Schedule, input: &HostInput) {
    debug!("Replaying {:?}", input);
    match input {
        HostInput::ToggleDebug => {
            world.resource_mut::<InputState>().mode_debug.press();
            update.run(world);
            world.resource_mut::<InputState>().mode_debug.release();
            return;
        }
        HostInput::PointerDown { x, y } => {
            world
                .resource_mut::<InputState>()
                .pointer
                .press(Vec2::new(*x, *y));
        }
        HostInput::PointerMove { x, y } => {
            world
                .resource_mut::<InputState>()
                .pointer
                .move_to(Vec2::new(*x, *y));
        }
        HostInput::PointerUp => {
            world.resource_mut::<InputState>().pointer.release();
        }
        HostInput::NewBubble { text } => {
            let screen = *world.resource::<ScreenSize>();
            let mut state: SystemState<Commands> = SystemState::new(world);
            let mut commands = state.get_mut(world);
            spawn_response_bubble(&mut commands, &screen, text.clone());
            state.apply(world);
        }
        HostInput::RemoveTarget { slot } => {
            let target = world.resource::<DebugSession>().target_in_slot(slot);
            if let Some(entity) = target {
                world.trigger(TargetRemovedEvent { entity });
            }
        }
        HostInput::Teardown => {
            world.trigger(SceneTeardownEvent {});
        }
    }
    update.run(world);
}

/// Apply every input of a script in order.
pub fn replay(world: &mut World, update: &mut Schedule, inputs: &[HostInput]) {
    for input in inputs {
        apply_input(world, update, input);
    }
}

/// Live geometry of every tracked target, sorted by slot.
pub fn layout_snapshot(world: &mut World) -> Vec<LayoutEntry> {
    let tracked = world.resource::<DebugSession>().tracked();
    let mut state: SystemState<Targets> = SystemState::new(world);
    let targets = state.get_mut(world);
    tracked
        .into_iter()
        .filter_map(|(slot, entity)| {
            let pos = targets.position(entity)?;
            let bbox = targets.bounding_box(entity);
            Some(LayoutEntry {
                slot,
                x: pos.x,
                y: pos.y,
                scale: targets.scale(entity),
                width: bbox.map(|b| b.width()),
                height: bbox.map(|b| b.height()),
            })
        })
        .collect()
}
