//! Input state management
//!
//! Polls keyboard and mouse (macroquad) and gamepad (gilrs), combining them
//! into one [`FrameInput`] per frame. Bindings are fixed.

use macroquad::prelude::*;

use super::gamepad::{button, Gamepad};
use super::{Action, FrameInput};

/// Every action, in the order they are polled
const ALL_ACTIONS: [Action; 7] = [
    Action::Pause,
    Action::MoveLeft,
    Action::MoveRight,
    Action::Jump,
    Action::Confirm,
    Action::Restart,
    Action::Quit,
];

/// Keyboard keys bound to an action
fn keys_for(action: Action) -> &'static [KeyCode] {
    match action {
        Action::Jump => &[KeyCode::Space],
        Action::Pause => &[KeyCode::Escape],
        Action::MoveLeft => &[KeyCode::Left],
        Action::MoveRight => &[KeyCode::Right],
        Action::Confirm => &[KeyCode::Enter, KeyCode::KpEnter],
        Action::Restart => &[KeyCode::R],
        Action::Quit => &[KeyCode::Q],
    }
}

/// Gamepad button bound to an action
fn button_for(action: Action) -> u32 {
    match action {
        Action::Jump => button::A,
        Action::Pause => button::START,
        Action::MoveLeft => button::DPAD_LEFT,
        Action::MoveRight => button::DPAD_RIGHT,
        Action::Confirm => button::A,
        Action::Restart => button::Y,
        Action::Quit => button::SELECT,
    }
}

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        // Window close goes through is_quit_requested so every phase can
        // react to it
        prevent_quit();
        Self { gamepad: Gamepad::new() }
    }

    /// Call once per frame, before the simulation tick
    pub fn poll(&mut self) -> FrameInput {
        self.gamepad.poll();
        let pad = self.gamepad.edges();

        let mut input = FrameInput::default();
        for action in ALL_ACTIONS {
            let keys = keys_for(action);
            let btn = button_for(action);

            if keys.iter().any(|&k| is_key_pressed(k)) || pad.just_pressed(btn) {
                input.pressed.push(action);
            }
            if keys.iter().any(|&k| is_key_released(k)) || pad.just_released(btn) {
                input.released.push(action);
            }
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            input.click = Some(mouse_position());
        }
        input.close_requested = is_quit_requested();
        input
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
