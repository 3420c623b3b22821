use log::error;
use macroquad::prelude::*;
use crate::application::GameState;
use crate::ui::{BoardLayout, BOARD_SIZES};

/// Handle a left click on the board
pub fn handle_board_click(state: &mut GameState, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    let Some((x, y)) = layout.tile_at(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    // tile_at only yields in-bounds coordinates, so a rejection here means
    // the layout and the board size went out of sync.
    if let Err(err) = state.click_at(x, y) {
        error!("rejected click at ({x}, {y}): {err}");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 3] = [
        (KeyCode::R, GameState::new_game),
        (KeyCode::Key1, |s| s.with_size(BOARD_SIZES[0].0)),
        (KeyCode::Key2, |s| s.with_size(BOARD_SIZES[1].0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().enumerate().fold(state, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.new_game(),
            _ => match BOARD_SIZES.get(idx - 1) {
                Some((size, _)) => s.with_size(*size),
                None => s,
            },
        }
    })
}
