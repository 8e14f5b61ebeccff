//! Debug mode controller.
//!
//! [`DebugOverlay`] bundles everything the layout overlay touches (the
//! [`DebugSession`], the [`EditorConfig`], the [`Targets`] view and the
//! resize handles) into one system parameter. Observers and systems take it
//! as their single parameter and drive the state machine through it:
//!
//! - `Off → On`: every tracked target becomes draggable and gets a fresh
//!   handle set, then the indicator overlay is rebuilt
//! - `On → Off`: every target loses drag and handles, the overlay is destroyed
//!
//! Transitions always destroy before they create, so re-entering `On` after
//! targets were replaced while `Off` never leaks a handle set.
//!
//! The drag controller, the handle set and the indicator overlay add their
//! own methods to [`DebugOverlay`] in [`crate::systems::drag`],
//! [`crate::systems::handles`] and [`crate::systems::indicator`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{debug, info};

use crate::components::debugtarget::DebugTarget;
use crate::components::draggable::Draggable;
use crate::components::mapposition::MapPosition;
use crate::components::resizehandle::ResizeHandle;
use crate::events::drag::{drag_end_observer, drag_observer, drag_start_observer};
use crate::events::switchdebug::switch_debug_observer;
use crate::events::target::{
    scene_teardown_observer, target_removed_observer, target_spawned_observer,
};
use crate::resources::debugsession::DebugSession;
use crate::resources::editorconfig::EditorConfig;
use crate::resources::input::InputState;
use crate::systems::target::Targets;

/// System parameter giving mutable access to the whole debug overlay.
#[derive(SystemParam)]
pub struct DebugOverlay<'w, 's> {
    pub(crate) commands: Commands<'w, 's>,
    pub(crate) session: ResMut<'w, DebugSession>,
    pub(crate) config: Res<'w, EditorConfig>,
    pub(crate) targets: Targets<'w, 's>,
    pub(crate) handles: Query<'w, 's, (&'static mut ResizeHandle, &'static mut MapPosition), Without<DebugTarget>>,
    pub(crate) draggable: Query<'w, 's, Entity, With<Draggable>>,
}

impl DebugOverlay<'_, '_> {
    pub fn is_enabled(&self) -> bool {
        self.session.is_enabled()
    }

    /// Flip debug mode.
    pub fn toggle(&mut self) {
        if self.session.is_enabled() {
            self.switch_off();
        } else {
            self.switch_on();
        }
    }

    /// `Off → On` (also safe to call while already on).
    pub fn switch_on(&mut self) {
        self.session.set_enabled(true);
        for (_, target) in self.session.tracked() {
            self.enable_target(target);
        }
        self.rebuild_indicators();
        info!(
            "Debug mode enabled ({} targets)",
            self.session.tracked_count()
        );
    }

    /// `On → Off` (also safe to call while already off).
    pub fn switch_off(&mut self) {
        self.session.set_enabled(false);
        for (_, target) in self.session.tracked() {
            self.disable_drag(target);
        }
        // Handle sets of targets that stopped being tracked go too.
        for target in self.session.decorated_targets() {
            self.destroy_handles(target);
        }
        self.destroy_indicators();
        info!("Debug mode disabled");
    }

    /// Give one target the treatment matching debug-on: drag plus handles.
    fn enable_target(&mut self, target: Entity) {
        self.enable_drag(target);
        self.create_handles(target);
    }

    /// Start tracking a freshly spawned target, replacing the previous
    /// occupant of its slot. When debug mode is on the new target is
    /// decorated right away.
    pub fn attach_target(&mut self, target: Entity) {
        let Some(slot) = self.targets.slot(target) else {
            debug!("attach_target: {:?} is not a debug target", target);
            return;
        };
        if let Some(previous) = self.session.track(slot.clone(), target) {
            info!("Target '{}' replaced: {:?} -> {:?}", slot, previous, target);
            self.destroy_handles(previous);
            despawn_if_present(&mut self.commands, previous);
        }
        if self.session.is_enabled() {
            self.enable_target(target);
            self.rebuild_indicators();
        }
    }

    /// Stop tracking a target and despawn it together with its decorations.
    pub fn detach_target(&mut self, target: Entity) {
        let slot = self.session.untrack(target);
        self.destroy_handles(target);
        despawn_if_present(&mut self.commands, target);
        if let Some(slot) = slot {
            info!("Target '{}' removed", slot);
        }
        if self.session.is_enabled() {
            self.rebuild_indicators();
        }
    }

    /// Forget targets and handle sets whose target no longer exists.
    /// Returns how many entries were dropped.
    pub fn prune(&mut self) -> usize {
        let mut pruned = 0;
        for (slot, target) in self.session.tracked() {
            if !self.targets.contains(target) {
                debug!("Pruning stale target '{}' ({:?})", slot, target);
                self.session.untrack(target);
                pruned += 1;
            }
        }
        for target in self.session.decorated_targets() {
            if !self.targets.contains(target) {
                self.destroy_handles(target);
                pruned += 1;
            }
        }
        if pruned > 0 && self.session.is_enabled() {
            self.rebuild_indicators();
        }
        pruned
    }

    /// Scene end: destroy every decoration and target, reset the session.
    pub fn teardown(&mut self) {
        for target in self.session.decorated_targets() {
            self.destroy_handles(target);
        }
        self.destroy_indicators();
        for (_, target) in self.session.tracked() {
            despawn_if_present(&mut self.commands, target);
        }
        self.session.clear();
        info!("Debug session torn down");
    }
}

/// Despawn `entity` (and its children) unless it is already gone.
pub(crate) fn despawn_if_present(commands: &mut Commands, entity: Entity) {
    if let Ok(mut entity_commands) = commands.get_entity(entity) {
        entity_commands.try_despawn();
    }
}

/// Runs [`DebugOverlay::prune`] every frame, then decorates enabled targets
/// that became measurable since the last frame.
pub fn prune_stale_targets(mut overlay: DebugOverlay) {
    overlay.prune();
    if overlay.create_pending_handles() > 0 {
        overlay.rebuild_indicators();
    }
}

/// Insert the overlay resources (unless already present) and spawn its observers.
pub fn install_debug_overlay(world: &mut World) {
    if !world.contains_resource::<EditorConfig>() {
        world.insert_resource(EditorConfig::new());
    }
    let toggle_key = world.resource::<EditorConfig>().toggle_key.clone();
    world.insert_resource(DebugSession::new());
    if !world.contains_resource::<InputState>() {
        world.insert_resource(InputState::with_toggle_key(toggle_key));
    }

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(target_spawned_observer));
    world.spawn(Observer::new(target_removed_observer));
    world.spawn(Observer::new(scene_teardown_observer));
    world.spawn(Observer::new(drag_start_observer));
    world.spawn(Observer::new(drag_observer));
    world.spawn(Observer::new(drag_end_observer));
    world.flush();
}
