mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Padding between the board and the edges of the play area.
pub const BOARD_MARGIN: f32 = 16.0;

/// Board size presets offered in the panel and on the number keys.
pub const BOARD_SIZES: &[(usize, &str)] = &[(10, "10×10"), (16, "16×16")];

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the play area left of the panel
pub fn play_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the play area
pub fn play_area_height() -> f32 {
    screen_height()
}

/// Maps board coordinates onto screen pixels. The board is drawn as a
/// centered square inside the play area, so tiles stay square when the
/// window is resized.
pub struct BoardLayout {
    origin_x: f32,
    origin_y: f32,
    tile_px: f32,
    tiles: usize,
}

impl BoardLayout {
    pub fn new(area_width: f32, area_height: f32, tiles: usize) -> Self {
        let side = (area_width.min(area_height) - 2.0 * BOARD_MARGIN).max(0.0);
        Self {
            origin_x: (area_width - side) / 2.0,
            origin_y: (area_height - side) / 2.0,
            tile_px: side / tiles as f32,
            tiles,
        }
    }

    /// Layout for the current window dimensions.
    pub fn current(tiles: usize) -> Self {
        Self::new(play_area_width(), play_area_height(), tiles)
    }

    pub fn tile_px(&self) -> f32 {
        self.tile_px
    }

    /// Screen rectangle (x, y, w, h) of the tile at board coordinates.
    pub fn tile_rect(&self, x: usize, y: usize) -> (f32, f32, f32, f32) {
        (
            self.origin_x + x as f32 * self.tile_px,
            self.origin_y + y as f32 * self.tile_px,
            self.tile_px,
            self.tile_px,
        )
    }

    /// Board coordinates under a screen position, or None outside the board.
    pub fn tile_at(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let dx = screen_x - self.origin_x;
        let dy = screen_y - self.origin_y;
        if dx < 0.0 || dy < 0.0 || self.tile_px <= 0.0 {
            return None;
        }

        let x = (dx / self.tile_px) as usize;
        let y = (dy / self.tile_px) as usize;
        if x < self.tiles && y < self.tiles {
            Some((x, y))
        } else {
            None
        }
    }
}

/// Create the panel buttons: "New Game" plus one per board size preset.
/// The preset matching the active board size is drawn highlighted.
pub fn create_buttons(board_size: usize) -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;

    let mut buttons = vec![Button::new(px, 20.0, width, BUTTON_HEIGHT, "New Game")];
    for (i, (size, label)) in BOARD_SIZES.iter().enumerate() {
        buttons.push(
            Button::new(px, 90.0 + i as f32 * 50.0, width, BUTTON_HEIGHT, *label)
                .with_active(*size == board_size),
        );
    }
    buttons
}
