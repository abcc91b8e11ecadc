//! Game action definitions
//!
//! Physical keys and buttons are translated into these once per frame by
//! [`super::InputState`]; the rest of the game only ever sees actions.

/// All discrete actions the game reacts to
///
/// Keyboard / gamepad (Xbox naming):
/// - Space / A = Jump
/// - Escape / Start = Pause
/// - Left, Right / D-pad = Move
/// - Enter / A = Confirm (start, next level)
/// - R / Y = Restart (game over), Repeat (level complete)
/// - Q / Select = Quit (game over)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Pause,
    MoveLeft,
    MoveRight,
    Confirm,
    Restart,
    Quit,
}

/// Everything the player did during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Actions that went down this frame, in poll order
    pub pressed: Vec<Action>,
    /// Actions that went up this frame
    pub released: Vec<Action>,
    /// Left mouse click position, if any
    pub click: Option<(f32, f32)>,
    /// The window asked to close
    pub close_requested: bool,
}

impl FrameInput {
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    pub fn is_released(&self, action: Action) -> bool {
        self.released.contains(&action)
    }

    #[cfg(test)]
    pub fn press(actions: &[Action]) -> Self {
        Self {
            pressed: actions.to_vec(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn release(actions: &[Action]) -> Self {
        Self {
            released: actions.to_vec(),
            ..Default::default()
        }
    }
}
