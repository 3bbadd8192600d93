//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib once per frame,
//! before the tick runs, and writes the results into
//! [`InputState`]. Nothing reads the keyboard while systems run.
use crate::resources::input::InputState;

/// Poll Raylib for keyboard input and update the `InputState`.
pub fn update_input_state(input: &mut InputState, rl: &raylib::RaylibHandle) {
    for player in input.players.iter_mut() {
        player.poll(rl);
    }
    input.quit.poll(rl);
    input.mode_debug.poll(rl);
}
