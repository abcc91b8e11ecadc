//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend; keyboard and mouse only
//!
//! Buttons are folded into a bitmask once per frame so edge detection
//! (just pressed / just released) is a pair of mask operations.

// Standard gamepad button indices (Xbox layout, matches Web Gamepad API)
pub mod button {
    pub const A: u32 = 0;           // ActionDown / South
    pub const B: u32 = 1;           // ActionRight / East
    pub const X: u32 = 2;           // ActionLeft / West
    pub const Y: u32 = 3;           // ActionUp / North
    pub const SELECT: u32 = 8;      // Back/Select
    pub const START: u32 = 9;       // Start/Options
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Current and previous button masks for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    current: u32,
    previous: u32,
}

impl ButtonEdges {
    /// Shift in a new frame's mask
    pub fn advance(&mut self, mask: u32) {
        self.previous = self.current;
        self.current = mask;
    }

    #[cfg(test)]
    pub fn is_down(&self, button: u32) -> bool {
        self.current & (1 << button) != 0
    }

    pub fn just_pressed(&self, button: u32) -> bool {
        (self.current & !self.previous) & (1 << button) != 0
    }

    pub fn just_released(&self, button: u32) -> bool {
        (self.previous & !self.current) & (1 << button) != 0
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::{button, ButtonEdges};
    use gilrs::{Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the OS backend failed to start
        gilrs: Option<Gilrs>,
        edges: ButtonEdges,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                edges: ButtonEdges::default(),
            }
        }

        /// Pump backend events and latch this frame's buttons
        pub fn poll(&mut self) {
            let mask = match self.gilrs.as_mut() {
                Some(gilrs) => {
                    // Events are processed internally by gilrs
                    while gilrs.next_event().is_some() {}
                    Self::button_mask(gilrs)
                }
                None => 0,
            };
            self.edges.advance(mask);
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .map(|g| g.gamepads().next().is_some())
                .unwrap_or(false)
        }

        pub fn edges(&self) -> &ButtonEdges {
            &self.edges
        }

        fn button_mask(gilrs: &Gilrs) -> u32 {
            let Some((_, gp)) = gilrs.gamepads().next() else { return 0 };
            let mut mask = 0u32;

            if gp.is_pressed(GilrsButton::South) { mask |= 1 << button::A; }
            if gp.is_pressed(GilrsButton::East) { mask |= 1 << button::B; }
            if gp.is_pressed(GilrsButton::West) { mask |= 1 << button::X; }
            if gp.is_pressed(GilrsButton::North) { mask |= 1 << button::Y; }
            if gp.is_pressed(GilrsButton::Select) { mask |= 1 << button::SELECT; }
            if gp.is_pressed(GilrsButton::Start) { mask |= 1 << button::START; }
            if gp.is_pressed(GilrsButton::DPadUp) { mask |= 1 << button::DPAD_UP; }
            if gp.is_pressed(GilrsButton::DPadDown) { mask |= 1 << button::DPAD_DOWN; }
            if gp.is_pressed(GilrsButton::DPadLeft) { mask |= 1 << button::DPAD_LEFT; }
            if gp.is_pressed(GilrsButton::DPadRight) { mask |= 1 << button::DPAD_RIGHT; }

            mask
        }
    }
}

// ============================================================================
// WASM: no backend
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::ButtonEdges;

    pub struct Gamepad {
        edges: ButtonEdges,
    }

    impl Gamepad {
        pub fn new() -> Self {
            Self { edges: ButtonEdges::default() }
        }

        pub fn poll(&mut self) {
            self.edges.advance(0);
        }

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn edges(&self) -> &ButtonEdges {
            &self.edges
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export the platform-specific implementation
pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_edges() {
        let mut edges = ButtonEdges::default();
        edges.advance(1 << button::A);
        assert!(edges.just_pressed(button::A));
        assert!(edges.is_down(button::A));

        edges.advance(1 << button::A);
        assert!(!edges.just_pressed(button::A));
        assert!(edges.is_down(button::A));

        edges.advance(0);
        assert!(edges.just_released(button::A));
        assert!(!edges.is_down(button::A));
        assert!(!edges.just_released(button::START));
    }
}
