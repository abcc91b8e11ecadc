//! Sprite loading
//!
//! Every sprite is required; a missing or undecodable file is fatal.

use macroquad::prelude::*;

use crate::config::AssetPaths;
use crate::error::GameError;

pub struct Assets {
    pub background: Texture2D,
    pub astronaut: Texture2D,
    pub coin: Texture2D,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Result<Self, GameError> {
        Ok(Self {
            background: load_sprite(&paths.background, FilterMode::Linear).await?,
            astronaut: load_sprite(&paths.astronaut, FilterMode::Nearest).await?,
            coin: load_sprite(&paths.coin, FilterMode::Nearest).await?,
        })
    }
}

async fn load_sprite(path: &str, filter: FilterMode) -> Result<Texture2D, GameError> {
    let tex = load_texture(path).await.map_err(|e| GameError::AssetLoadFailure {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    tex.set_filter(filter);
    log::info!("Loaded sprite {} ({}x{})", path, tex.width(), tex.height());
    Ok(tex)
}
