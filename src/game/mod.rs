//! Game Module
//!
//! The simulation core of the platformer: entities, physics, collision
//! and the level lifecycle. Nothing in here touches the window, so all of
//! it runs headless under `cargo test`.
//!
//! Key concepts:
//! - Entity: a rectangle tagged with an `EntityKind`
//! - Player: the only entity with velocity
//! - GameState: the explicit state threaded through every tick
//! - Event: what happened this tick, for the presentation layer

pub mod rect;
pub mod entity;
pub mod player;
pub mod collision;
pub mod timer;
pub mod event;
pub mod state;

// Re-export main types
pub use rect::Rect;
pub use entity::EntityKind;
pub use event::{GameEvent, GameOverCause};
pub use state::{GameState, LevelChoice, Phase};
