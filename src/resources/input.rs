//! Per-frame input resource.
//!
//! The host loop writes the state of the debug toggle key and of the pointer
//! into [`InputState`] each frame. Systems in [`crate::systems::input`] turn
//! that state into [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)s
//! and drag gestures, consuming the `just_*` edges as they go.
use bevy_ecs::prelude::*;
use glam::Vec2;

#[derive(Debug, Clone)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// Name of the key bound to this action.
    pub key_binding: String,
}

impl BoolState {
    pub fn bound_to(key: impl Into<String>) -> Self {
        Self {
            key_binding: key.into(),
            ..Self::default()
        }
    }

    /// Record a key press edge.
    pub fn press(&mut self) {
        self.just_pressed = !self.active;
        self.active = true;
    }

    /// Record a key release edge.
    pub fn release(&mut self) {
        self.just_released = self.active;
        self.active = false;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: String::new(),
        }
    }
}

/// Pointer (mouse or touch) state in world coordinates.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub position: Vec2,
    /// Whether the primary button is held.
    pub down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    /// Whether the position changed since the last gesture update.
    pub moved: bool,
    /// Entity receiving the current drag gesture, if any.
    pub active_drag: Option<Entity>,
}

impl PointerState {
    pub fn press(&mut self, position: Vec2) {
        self.position = position;
        self.just_pressed = !self.down;
        self.down = true;
    }

    pub fn move_to(&mut self, position: Vec2) {
        if position != self.position {
            self.position = position;
            self.moved = true;
        }
    }

    pub fn release(&mut self) {
        self.just_released = self.down;
        self.down = false;
    }
}

/// Resource capturing the per-frame input relevant to the layout overlay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            mode_debug: BoolState::bound_to("F11"),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// Input state with the debug toggle bound to `key`.
    pub fn with_toggle_key(key: impl Into<String>) -> Self {
        Self {
            mode_debug: BoolState::bound_to(key),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert!(bs.key_binding.is_empty());
    }

    #[test]
    fn test_inputstate_default_binding() {
        let input = InputState::default();
        assert_eq!(input.mode_debug.key_binding, "F11");
        assert!(!input.pointer.down);
        assert!(input.pointer.active_drag.is_none());
    }

    #[test]
    fn test_press_while_held_is_not_a_new_edge() {
        let mut bs = BoolState::bound_to("F11");
        bs.press();
        assert!(bs.just_pressed);
        bs.just_pressed = false;
        bs.press();
        assert!(!bs.just_pressed);
        bs.release();
        assert!(bs.just_released);
        assert!(!bs.active);
    }

    #[test]
    fn test_pointer_move_to_same_position_is_not_a_move() {
        let mut pointer = PointerState::default();
        pointer.press(Vec2::new(5.0, 5.0));
        pointer.move_to(Vec2::new(5.0, 5.0));
        assert!(!pointer.moved);
        pointer.move_to(Vec2::new(6.0, 5.0));
        assert!(pointer.moved);
    }
}
