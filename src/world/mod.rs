//! World module - static level data
//!
//! Levels are plain descriptors (platform, hazard and collectible
//! placements) read once at startup. The game module turns a descriptor
//! into live entities each time a level is (re)loaded.

mod level;

pub use level::*;
