use macroquad::prelude::*;
use tracing::warn;

use crate::application::GameState;
use crate::ui::pixel_to_cell;

/// Toggle the cell under the cursor on left click
pub fn handle_mouse_toggle(state: &mut GameState, cell_size: u32, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    if let Some((row, col)) = pixel_to_cell(mouse_pos.0, mouse_pos.1, cell_size) {
        if let Err(err) = state.toggle_cell(row, col) {
            warn!(%err, "click outside the grid ignored");
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::R, GameState::randomize),
        (KeyCode::C, GameState::clear),
        (KeyCode::H, GameState::toggle_ui),
        (KeyCode::Escape, GameState::request_quit),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
