//! Menu and dialog widgets
//!
//! Immediate mode: buttons are rebuilt every frame from the screen size,
//! drawn, and hit-tested against the frame's click.

mod button;
mod theme;

pub use button::*;
pub use theme::*;
