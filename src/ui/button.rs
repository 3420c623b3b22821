use macroquad::prelude::*;

/// Panel button with hover and click detection.
/// `active` marks the button whose preset is currently in effect.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    active: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            active: false,
        }
    }

    /// Mark the button as the active preset (builder style).
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check if mouse is hovering over the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Draw button with hover and active highlights
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else if self.active {
            Color::from_rgba(60, 110, 170, 255)
        } else {
            Color::from_rgba(55, 55, 65, 255)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        let outline = if self.active { WHITE } else { GRAY };
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, outline);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if the button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
