//! Demo scene: the noodle-house layout.
//!
//! Builds an 800×600 stage with a background image and three debug targets:
//! - `"uncle"` – the uncle portrait sprite (simple)
//! - `"jukebox"` – the jukebox sprite (simple)
//! - `"response_bubble"` – the dialogue bubble, a composite of the bubble
//!   image and its text block
//!
//! A new bubble is spawned for every response and replaces the previous one.
//! Also provides [`build_world`] and [`build_update_schedule`], which wire the
//! overlay into a fresh [`World`] the way the binary and the tests use it.

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::debugtarget::DebugTarget;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tint::Color;
use crate::events::target::{SceneTeardownEvent, TargetSpawnedEvent};
use crate::resources::editorconfig::EditorConfig;
use crate::resources::screensize::ScreenSize;
use crate::systems::debugmode::{install_debug_overlay, prune_stale_targets};
use crate::systems::input::{debug_toggle_system, pointer_gesture_system};

pub const UNCLE_SLOT: &str = "uncle";
pub const JUKEBOX_SLOT: &str = "jukebox";
pub const BUBBLE_SLOT: &str = "response_bubble";

const DIALOGUE_BOX_HEIGHT: f32 = 150.0;
const CHAT_INPUT_HEIGHT: f32 = 100.0;
const PORTRAIT_SIZE: f32 = 120.0;
const PADDING: f32 = 15.0;
const JUKEBOX_SIZE: f32 = 180.0;
const JUKEBOX_PADDING: f32 = 20.0;

/// Background image covering the whole stage. Not a debug target.
fn spawn_background(commands: &mut Commands, screen: &ScreenSize) {
    let (w, h) = (screen.w as f32, screen.h as f32);
    commands.spawn((
        MapPosition::new(w * 0.5, h * 0.5),
        Sprite::new("noodleshop_background", w, h),
        Scale::default(),
    ));
}

/// Uncle portrait, sitting on the left of the dialogue box.
pub fn spawn_uncle(commands: &mut Commands, screen: &ScreenSize) -> Entity {
    let top = screen.h as f32 - DIALOGUE_BOX_HEIGHT - CHAT_INPUT_HEIGHT;
    let side = PORTRAIT_SIZE - PADDING * 2.0;
    let entity = commands
        .spawn((
            DebugTarget::simple(UNCLE_SLOT),
            MapPosition::new(PADDING + PORTRAIT_SIZE * 0.5, top + PADDING + PORTRAIT_SIZE * 0.5),
            Sprite::new("uncle_portrait", side, side),
            Scale::default(),
        ))
        .id();
    commands.trigger(TargetSpawnedEvent { entity });
    entity
}

/// Jukebox in the top-right corner.
pub fn spawn_jukebox(commands: &mut Commands, screen: &ScreenSize) -> Entity {
    let entity = commands
        .spawn((
            DebugTarget::simple(JUKEBOX_SLOT),
            MapPosition::new(
                screen.w as f32 - JUKEBOX_PADDING - JUKEBOX_SIZE * 0.5,
                JUKEBOX_PADDING + JUKEBOX_SIZE * 0.5,
            ),
            Sprite::new("jukebox", JUKEBOX_SIZE, JUKEBOX_SIZE),
            Scale::default(),
        ))
        .id();
    commands.trigger(TargetSpawnedEvent { entity });
    entity
}

/// Spawn a response bubble holding `text`, replacing the current one.
///
/// The bubble is anchored at the centre of the dialogue box. Its first part
/// is the bubble image, the second the text block to the right of the
/// portrait.
pub fn spawn_response_bubble(
    commands: &mut Commands,
    screen: &ScreenSize,
    text: impl Into<String>,
) -> Entity {
    let w = screen.w as f32;
    let top = screen.h as f32 - DIALOGUE_BOX_HEIGHT - CHAT_INPUT_HEIGHT;
    let container = commands
        .spawn((
            DebugTarget::composite(BUBBLE_SLOT),
            MapPosition::new(w * 0.5, top + DIALOGUE_BOX_HEIGHT * 0.5),
        ))
        .id();

    commands.spawn((
        ChildOf(container),
        MapPosition::new(0.0, 0.0),
        Sprite::new("dialogue_box", w, DIALOGUE_BOX_HEIGHT),
        Scale::default(),
    ));

    let text_width = w - PORTRAIT_SIZE - PADDING * 4.0;
    let text_left = PORTRAIT_SIZE + PADDING * 2.0;
    commands.spawn((
        ChildOf(container),
        MapPosition::new(text_left + text_width * 0.5 - w * 0.5, 0.0),
        Sprite::new("dialogue_text", text_width, DIALOGUE_BOX_HEIGHT - PADDING * 2.0),
        Scale::default(),
        DynamicText::new(text, "Press Start 2P", 16.0, Color::WHITE),
    ));

    commands.trigger(TargetSpawnedEvent { entity: container });
    container
}

/// Startup system: spawn the whole demo layout.
pub fn setup(mut commands: Commands, screen: Res<ScreenSize>) {
    spawn_background(&mut commands, &screen);
    spawn_uncle(&mut commands, &screen);
    spawn_jukebox(&mut commands, &screen);
    spawn_response_bubble(
        &mut commands,
        &screen,
        "Welcome! Sit anywhere, the broth is almost ready.",
    );
    info!("Noodle house scene ready");
}

/// End the scene: drop every target and decoration.
pub fn teardown(mut commands: Commands) {
    commands.trigger(SceneTeardownEvent {});
}

/// Per-frame schedule: input, gestures, stale-target pruning.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((debug_toggle_system, pointer_gesture_system, prune_stale_targets).chain());
    update
}

/// Fresh world with the stage size, the overlay resources and observers.
pub fn build_world(config: EditorConfig) -> World {
    let mut world = World::new();
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(config);
    install_debug_overlay(&mut world);
    world
}
