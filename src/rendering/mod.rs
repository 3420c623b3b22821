use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Board, Color as TileColor, Tile};
use crate::ui::{panel_x, BoardLayout, Button, PANEL_WIDTH};

/// Screen color for a tile: each lit channel renders at full intensity.
fn fill_color(color: TileColor) -> Color {
    let (r, g, b) = color.channels();
    Color::from_rgba(
        if r { 255 } else { 0 },
        if g { 255 } else { 0 },
        if b { 255 } else { 0 },
        255,
    )
}

/// Draw the board as filled tiles with a thin outline between them.
pub fn draw_board(board: &Board, layout: &BoardLayout) {
    let outline = Color::from_rgba(130, 130, 130, 255); // Gray tile border

    for tile in board.iter_tiles() {
        let (x, y, w, h) = layout.tile_rect(tile.x, tile.y);
        draw_rectangle(x, y, w, h, fill_color(tile.color));
        draw_rectangle_lines(x, y, w, h, 1.0, outline);
    }
}

/// Overlay a fading white outline on the tiles touched by the last spill.
pub fn draw_changed_tiles(changes: &[Tile], layout: &BoardLayout, strength: f32) {
    if strength <= 0.0 {
        return;
    }

    let glow = Color::from_rgba(255, 255, 255, (200.0 * strength) as u8);
    for tile in changes {
        let (x, y, w, h) = layout.tile_rect(tile.x, tile.y);
        draw_rectangle_lines(x, y, w, h, 3.0, glow);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, stats, and the color legend
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();

    // Draw all buttons FIRST
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 10.0;
    let value_color = Color::from_rgba(180, 180, 180, 255);

    draw_text_label("Board size:", px, 82.0, 14.0, WHITE);

    // Game stats
    let total = state.board.size() * state.board.size();
    let labels = [
        ("Stats:", px, 215.0, 16.0, WHITE),
        (
            &format!("Board: {0}×{0}", state.board.size()),
            px,
            235.0,
            13.0,
            value_color,
        ),
        (
            &format!("Clicks: {}", state.clicks),
            px,
            251.0,
            13.0,
            value_color,
        ),
        (
            &format!("Cleared: {} / {}", state.board.cleared_tiles(), total),
            px,
            267.0,
            13.0,
            value_color,
        ),
        (
            &format!("White: {}", state.board.saturated_tiles()),
            px,
            283.0,
            13.0,
            value_color,
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Legend of the eight channel combinations
    draw_text_label("Colors:", px, 315.0, 14.0, WHITE);
    for (i, color) in TileColor::ALL.iter().enumerate() {
        let y = 327.0 + i as f32 * 18.0;
        draw_rectangle(px, y, 12.0, 12.0, fill_color(*color));
        draw_rectangle_lines(px, y, 12.0, 12.0, 1.0, GRAY);
        draw_text_label(color.name(), px + 18.0, y + 10.0, 12.0, GRAY);
    }

    // Controls help
    let controls = [
        ("Controls:", px, 500.0, 14.0, WHITE),
        ("LMB: Spill tile", px, 515.0, 12.0, GRAY),
        ("R: New game", px, 528.0, 12.0, GRAY),
        ("1/2: Board size", px, 541.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });
}
