//! Player input sources.
//!
//! [`InputSource`] is the per-controller query interface the intent capture
//! pass reads: four directions plus fire, each reflecting "currently held".
//! [`KeyboardInputs`] implements it on top of raylib key state and
//! [`InputState`] gathers every player controller plus the engine keys
//! (quit, debug toggle). Entities reach their controller through the slot
//! stored in their [`InputHook`](crate::components::inputhook::InputHook).
use raylib::prelude::*;

use crate::components::inputhook::ControllerSlot;

/// Held-state queries for one controller.
pub trait InputSource {
    fn left(&self) -> bool;
    fn right(&self) -> bool;
    fn up(&self) -> bool;
    fn down(&self) -> bool;
    fn fire(&self) -> bool;
}

/// Registry of controllers addressed by slot.
pub trait InputSources {
    /// Controller in `slot`, or `None` if nothing is connected there.
    fn controller(&self, slot: ControllerSlot) -> Option<&dyn InputSource>;
}

impl<T: InputSource> InputSources for [T] {
    fn controller(&self, slot: ControllerSlot) -> Option<&dyn InputSource> {
        self.get(slot.0).map(|source| source as &dyn InputSource)
    }
}

impl<T: InputSource> InputSources for Vec<T> {
    fn controller(&self, slot: ControllerSlot) -> Option<&dyn InputSource> {
        self.as_slice().controller(slot)
    }
}

/// Input source with directly settable buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldButtons {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

impl InputSource for HeldButtons {
    fn left(&self) -> bool {
        self.left
    }
    fn right(&self) -> bool {
        self.right
    }
    fn up(&self) -> bool {
        self.up
    }
    fn down(&self) -> bool {
        self.down
    }
    fn fire(&self) -> bool {
        self.fire
    }
}

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }

    /// Refresh from the keyboard.
    pub fn poll(&mut self, rl: &RaylibHandle) {
        self.active = rl.is_key_down(self.key_binding);
        self.just_pressed = rl.is_key_pressed(self.key_binding);
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Keyboard-driven controller with its own key map.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardInputs {
    pub left: BoolState,
    pub right: BoolState,
    pub up: BoolState,
    pub down: BoolState,
    pub fire: BoolState,
}

impl KeyboardInputs {
    pub fn new(
        left: KeyboardKey,
        right: KeyboardKey,
        up: KeyboardKey,
        down: KeyboardKey,
        fire: KeyboardKey,
    ) -> Self {
        Self {
            left: BoolState::bound_to(left),
            right: BoolState::bound_to(right),
            up: BoolState::bound_to(up),
            down: BoolState::bound_to(down),
            fire: BoolState::bound_to(fire),
        }
    }

    /// Player one: arrow keys, Space fires.
    pub fn arrows() -> Self {
        Self::new(
            KeyboardKey::KEY_LEFT,
            KeyboardKey::KEY_RIGHT,
            KeyboardKey::KEY_UP,
            KeyboardKey::KEY_DOWN,
            KeyboardKey::KEY_SPACE,
        )
    }

    /// Player two: WASD, Left Shift fires.
    pub fn wasd() -> Self {
        Self::new(
            KeyboardKey::KEY_A,
            KeyboardKey::KEY_D,
            KeyboardKey::KEY_W,
            KeyboardKey::KEY_S,
            KeyboardKey::KEY_LEFT_SHIFT,
        )
    }

    pub fn poll(&mut self, rl: &RaylibHandle) {
        self.left.poll(rl);
        self.right.poll(rl);
        self.up.poll(rl);
        self.down.poll(rl);
        self.fire.poll(rl);
    }
}

impl InputSource for KeyboardInputs {
    fn left(&self) -> bool {
        self.left.active
    }
    fn right(&self) -> bool {
        self.right.active
    }
    fn up(&self) -> bool {
        self.up.active
    }
    fn down(&self) -> bool {
        self.down.active
    }
    fn fire(&self) -> bool {
        self.fire.active
    }
}

/// Keyboard state captured once per frame, before the tick runs.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Player controllers, indexed by [`ControllerSlot`].
    pub players: Vec<KeyboardInputs>,
    pub quit: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            players: vec![KeyboardInputs::arrows(), KeyboardInputs::wasd()],
            quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputSources for InputState {
    fn controller(&self, slot: ControllerSlot) -> Option<&dyn InputSource> {
        self.players.controller(slot)
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
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_default_players_key_maps() {
        let input = InputState::default();
        assert_eq!(input.players.len(), 2);
        assert_eq!(input.players[0].left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.players[0].fire.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.players[1].up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.players[1].fire.key_binding, KeyboardKey::KEY_LEFT_SHIFT);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_keyboard_inputs_report_held_state() {
        let mut kb = KeyboardInputs::arrows();
        assert!(!kb.left() && !kb.right() && !kb.up() && !kb.down() && !kb.fire());
        kb.up.active = true;
        kb.fire.active = true;
        assert!(kb.up());
        assert!(kb.fire());
        assert!(!kb.down());
    }

    #[test]
    fn test_missing_slot_is_disconnected() {
        let input = InputState::default();
        assert!(input.controller(ControllerSlot(0)).is_some());
        assert!(input.controller(ControllerSlot(1)).is_some());
        assert!(input.controller(ControllerSlot(2)).is_none());
    }

    #[test]
    fn test_held_buttons_registry() {
        let pads = vec![HeldButtons {
            right: true,
            ..HeldButtons::default()
        }];
        let pad = pads.controller(ControllerSlot(0)).expect("slot 0");
        assert!(pad.right());
        assert!(!pad.left());
    }
}
