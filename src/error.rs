//! Fatal startup errors
//!
//! Anything in here aborts the game before the first frame. There is no
//! recoverable error path during play.

use thiserror::Error;

use crate::world::LevelError;

#[derive(Debug, Error)]
pub enum GameError {
    /// Level data is absent or does not have the expected shape
    #[error("malformed level data: {0}")]
    MalformedLevelData(#[from] LevelError),

    /// A sprite the game cannot run without failed to load
    #[error("failed to load asset {path}: {reason}")]
    AssetLoadFailure { path: String, reason: String },

    #[error("invalid config: {0}")]
    Config(String),
}
