//! Integration tests for the demo scene driven through host input.
//!
//! These go through the same path as the binary: the startup schedule spawns
//! the noodle-house layout, then recorded [`HostInput`]s are replayed with one
//! update tick each.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test scene_integration
//! ```

use bevy_ecs::prelude::*;

use scene_overlay::components::debugtarget::DebugTarget;
use scene_overlay::components::dynamictext::DynamicText;
use scene_overlay::components::indicator::IndicatorLabel;
use scene_overlay::components::resizehandle::ResizeHandle;
use scene_overlay::game::{self, BUBBLE_SLOT, JUKEBOX_SLOT, UNCLE_SLOT};
use scene_overlay::replay::{HostInput, LayoutEntry, apply_input, layout_snapshot, parse_script, replay};
use scene_overlay::resources::debugsession::DebugSession;
use scene_overlay::resources::editorconfig::EditorConfig;
use scene_overlay::resources::input::InputState;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// World with the demo scene spawned, plus its update schedule.
fn scene() -> (World, Schedule) {
    let mut world = game::build_world(EditorConfig::new());
    let mut startup = Schedule::default();
    startup.add_systems(game::setup);
    startup.run(&mut world);
    (world, game::build_update_schedule())
}

fn entry<'a>(layout: &'a [LayoutEntry], slot: &str) -> &'a LayoutEntry {
    layout
        .iter()
        .find(|e| e.slot == slot)
        .unwrap_or_else(|| panic!("slot {} missing from layout", slot))
}

fn count<C: Component>(world: &mut World) -> usize {
    let mut query = world.query::<&C>();
    query.iter(world).count()
}

fn down(x: f32, y: f32) -> HostInput {
    HostInput::PointerDown { x, y }
}

fn to(x: f32, y: f32) -> HostInput {
    HostInput::PointerMove { x, y }
}

#[test]
fn scene_spawns_three_tracked_targets() {
    let (mut world, _) = scene();

    let session = world.resource::<DebugSession>();
    assert!(!session.is_enabled());
    assert_eq!(session.tracked_count(), 3);
    assert_eq!(count::<DebugTarget>(&mut world), 3);

    let layout = layout_snapshot(&mut world);
    let slots: Vec<&str> = layout.iter().map(|e| e.slot.as_str()).collect();
    assert_eq!(slots, vec![JUKEBOX_SLOT, BUBBLE_SLOT, UNCLE_SLOT]);

    let uncle = entry(&layout, UNCLE_SLOT);
    assert_eq!((uncle.x, uncle.y), (75.0, 425.0));
    assert_eq!(uncle.width, Some(90.0));
    let jukebox = entry(&layout, JUKEBOX_SLOT);
    assert_eq!((jukebox.x, jukebox.y), (690.0, 110.0));
    let bubble = entry(&layout, BUBBLE_SLOT);
    assert_eq!((bubble.x, bubble.y), (400.0, 425.0));
    assert_eq!(bubble.width, Some(800.0));
    assert_eq!(bubble.height, Some(150.0));
    assert_eq!(bubble.scale, Some(1.0));
}

#[test]
fn toggle_key_switches_debug_mode() {
    let (mut world, mut update) = scene();

    apply_input(&mut world, &mut update, &HostInput::ToggleDebug);
    assert!(world.resource::<DebugSession>().is_enabled());
    assert_eq!(count::<ResizeHandle>(&mut world), 12);
    assert_eq!(count::<IndicatorLabel>(&mut world), 3);

    // A tick without a fresh key press leaves the mode alone.
    update.run(&mut world);
    assert!(world.resource::<DebugSession>().is_enabled());
    assert!(!world.resource::<InputState>().mode_debug.just_pressed);

    apply_input(&mut world, &mut update, &HostInput::ToggleDebug);
    assert!(!world.resource::<DebugSession>().is_enabled());
    assert_eq!(count::<ResizeHandle>(&mut world), 0);
    assert_eq!(count::<IndicatorLabel>(&mut world), 0);
}

#[test]
fn pointer_drag_moves_target_under_pointer() {
    let (mut world, mut update) = scene();
    replay(
        &mut world,
        &mut update,
        &[
            HostInput::ToggleDebug,
            down(690.0, 110.0),
            to(650.0, 150.0),
            to(600.0, 200.0),
            HostInput::PointerUp,
        ],
    );

    let layout = layout_snapshot(&mut world);
    let jukebox = entry(&layout, JUKEBOX_SLOT);
    assert_eq!((jukebox.x, jukebox.y), (600.0, 200.0));
    assert!(world.resource::<InputState>().pointer.active_drag.is_none());

    let mut labels = world.query::<(&IndicatorLabel, &DynamicText)>();
    let texts: Vec<String> = labels.iter(&world).map(|(_, t)| t.content.clone()).collect();
    assert!(texts.contains(&"jukebox: x=600 y=200 scale=1.00".to_string()));
}

#[test]
fn pointer_press_prefers_last_slot_on_overlap() {
    let (mut world, mut update) = scene();
    // (75, 425) lies inside both the uncle portrait and the bubble.
    replay(
        &mut world,
        &mut update,
        &[HostInput::ToggleDebug, down(75.0, 425.0), to(100.0, 300.0), HostInput::PointerUp],
    );

    let layout = layout_snapshot(&mut world);
    let uncle = entry(&layout, UNCLE_SLOT);
    assert_eq!((uncle.x, uncle.y), (100.0, 300.0));
    let bubble = entry(&layout, BUBBLE_SLOT);
    assert_eq!((bubble.x, bubble.y), (400.0, 425.0));
}

#[test]
fn pointer_drag_on_handle_resizes() {
    let (mut world, mut update) = scene();
    // Uncle SE corner is at (120, 470); twice the anchor distance doubles the scale.
    replay(
        &mut world,
        &mut update,
        &[HostInput::ToggleDebug, down(120.0, 470.0), to(165.0, 515.0), HostInput::PointerUp],
    );

    let layout = layout_snapshot(&mut world);
    let uncle = entry(&layout, UNCLE_SLOT);
    assert!(approx_eq(uncle.scale.unwrap(), 2.0));
    assert!(approx_eq(uncle.width.unwrap(), 180.0));
    assert_eq!((uncle.x, uncle.y), (75.0, 425.0));
}

#[test]
fn pointer_is_ignored_while_debug_is_off() {
    let (mut world, mut update) = scene();
    replay(
        &mut world,
        &mut update,
        &[down(690.0, 110.0), to(600.0, 200.0), HostInput::PointerUp],
    );

    let layout = layout_snapshot(&mut world);
    let jukebox = entry(&layout, JUKEBOX_SLOT);
    assert_eq!((jukebox.x, jukebox.y), (690.0, 110.0));
}

#[test]
fn new_bubble_while_on_is_editable_immediately() {
    let (mut world, mut update) = scene();
    let first = world
        .resource::<DebugSession>()
        .target_in_slot(BUBBLE_SLOT)
        .unwrap();

    replay(
        &mut world,
        &mut update,
        &[
            HostInput::ToggleDebug,
            HostInput::NewBubble {
                text: "Another bowl?".to_string(),
            },
            down(400.0, 425.0),
            to(400.0, 380.0),
            HostInput::PointerUp,
        ],
    );

    let session = world.resource::<DebugSession>();
    let second = session.target_in_slot(BUBBLE_SLOT).unwrap();
    assert_ne!(first, second);
    assert!(session.handle_set(second).is_some());
    assert!(session.handle_set(first).is_none());
    assert!(world.get_entity(first).is_err());
    assert_eq!(count::<DebugTarget>(&mut world), 3);
    assert_eq!(count::<ResizeHandle>(&mut world), 12);

    let layout = layout_snapshot(&mut world);
    let bubble = entry(&layout, BUBBLE_SLOT);
    assert_eq!((bubble.x, bubble.y), (400.0, 380.0));
}

#[test]
fn remove_and_teardown_clean_up() {
    let (mut world, mut update) = scene();
    replay(
        &mut world,
        &mut update,
        &[
            HostInput::ToggleDebug,
            HostInput::RemoveTarget {
                slot: JUKEBOX_SLOT.to_string(),
            },
        ],
    );
    assert_eq!(world.resource::<DebugSession>().tracked_count(), 2);
    assert_eq!(count::<ResizeHandle>(&mut world), 8);

    apply_input(&mut world, &mut update, &HostInput::Teardown);
    assert_eq!(world.resource::<DebugSession>().tracked_count(), 0);
    assert_eq!(count::<DebugTarget>(&mut world), 0);
    assert_eq!(count::<ResizeHandle>(&mut world), 0);
    assert!(layout_snapshot(&mut world).is_empty());
}

#[test]
fn recorded_script_replays() {
    let script = r#"[
        { "type": "toggle_debug" },
        { "type": "pointer_down", "x": 690.0, "y": 110.0 },
        { "type": "pointer_move", "x": 500.0, "y": 120.0 },
        { "type": "pointer_up" },
        { "type": "toggle_debug" }
    ]"#;
    let inputs = parse_script(script).unwrap();
    let (mut world, mut update) = scene();
    replay(&mut world, &mut update, &inputs);

    assert!(!world.resource::<DebugSession>().is_enabled());
    let layout = layout_snapshot(&mut world);
    let jukebox = entry(&layout, JUKEBOX_SLOT);
    assert_eq!((jukebox.x, jukebox.y), (500.0, 120.0));
}
