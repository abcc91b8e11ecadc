//! Clickable text buttons for the menu and level-complete dialog

use macroquad::prelude::*;

use super::theme::{BUTTON_GO, BUTTON_REPEAT, BUTTON_TEXT, FONT_SIZE_SMALL};
use crate::game::Rect;

/// A filled rectangle with a centered label
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub color: Color,
}

impl Button {
    pub fn new(rect: Rect, label: &'static str, color: Color) -> Self {
        Self { rect, label, color }
    }

    /// True if `click` landed inside the button
    pub fn is_clicked(&self, click: Option<(f32, f32)>) -> bool {
        click.map(|(x, y)| self.rect.contains(x, y)).unwrap_or(false)
    }

    pub fn draw(&self) {
        let r = &self.rect;
        draw_rectangle(r.x, r.y, r.w, r.h, self.color);

        let dims = measure_text(self.label, None, FONT_SIZE_SMALL as u16, 1.0);
        let (cx, cy) = r.center();
        draw_text(
            self.label,
            (cx - dims.width * 0.5).round(),
            (cy + dims.offset_y * 0.5).round(),
            FONT_SIZE_SMALL,
            BUTTON_TEXT,
        );
    }
}

// =============================================================================
// Layouts
// =============================================================================

/// "Start Game", centered on screen
pub fn start_button(screen_w: f32, screen_h: f32) -> Button {
    Button::new(
        Rect::new(screen_w / 2.0 - 100.0, screen_h / 2.0 - 25.0, 200.0, 50.0),
        "Start Game",
        BUTTON_GO,
    )
}

/// "Next Level" and "Repeat", side by side below the score
pub fn level_complete_buttons(screen_w: f32, screen_h: f32) -> (Button, Button) {
    let y = screen_h / 2.0 + 50.0;
    let next = Button::new(
        Rect::new(screen_w / 2.0 - 150.0, y, 140.0, 50.0),
        "Next Level",
        BUTTON_GO,
    );
    let repeat = Button::new(
        Rect::new(screen_w / 2.0 + 10.0, y, 140.0, 50.0),
        "Repeat",
        BUTTON_REPEAT,
    );
    (next, repeat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_button_hit_test() {
        let b = start_button(800.0, 600.0);
        assert!(b.is_clicked(Some((400.0, 300.0))));
        assert!(!b.is_clicked(Some((10.0, 10.0))));
        assert!(!b.is_clicked(None));
    }

    #[test]
    fn test_level_complete_buttons_do_not_overlap() {
        let (next, repeat) = level_complete_buttons(800.0, 600.0);
        assert!(!next.rect.overlaps(&repeat.rect));
        assert!(next.is_clicked(Some((300.0, 375.0))));
        assert!(repeat.is_clicked(Some((480.0, 375.0))));
    }
}
