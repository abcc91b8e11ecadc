//! Game configuration
//!
//! All tunables live here so the fixed-step assumptions (tick rate,
//! per-tick gravity and speed) are explicit. Loaded from an optional
//! RON file; any field left out falls back to its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Default location of the optional config file
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Physics tunables. Velocities are in pixels per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity constant `g`. Each tick adds `0.5 * g` to the vertical velocity.
    pub gravity: f32,
    /// Jump strength numerator. A jump sets `vy = -jump_impulse / g`, so
    /// raising gravity makes jumps weaker.
    pub jump_impulse: f32,
    /// Horizontal speed while a move key is held
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Collectibles are square
    pub collectible_size: f32,
    /// Spawn position, measured from the left and bottom of the screen
    pub spawn_x: f32,
    pub spawn_from_bottom: f32,
    /// Clamp the player to the bottom of the screen. With this off the
    /// player can fall out of the world, which ends the run.
    pub solid_floor: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: 10.0,
            move_speed: 3.0,
            player_width: 50.0,
            player_height: 50.0,
            collectible_size: 30.0,
            spawn_x: 50.0,
            spawn_from_bottom: 100.0,
            solid_floor: true,
        }
    }
}

/// Asset file locations, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub levels: String,
    pub background: String,
    pub astronaut: String,
    pub coin: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            levels: "assets/levels.ron".to_string(),
            background: "assets/sprites/background.png".to_string(),
            astronaut: "assets/sprites/astronaut.png".to_string(),
            coin: "assets/sprites/coin.png".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation ticks per second. One tick runs per rendered frame.
    pub tick_rate: u32,
    /// Seconds on the clock at the start of every level
    pub level_time_secs: u32,
    pub physics: PhysicsConfig,
    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            tick_rate: 60,
            level_time_secs: 60,
            physics: PhysicsConfig::default(),
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    /// Load config from a RON file. A missing file yields the defaults;
    /// a file that exists but does not parse is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_ron_str(&contents)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config from a RON string
    pub fn from_ron_str(s: &str) -> Result<Self, GameError> {
        let config: GameConfig = ron::from_str(s).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GameError> {
        if self.tick_rate == 0 {
            return Err(GameError::Config("tick_rate must be positive".into()));
        }
        let p = &self.physics;
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("gravity", p.gravity),
            ("jump_impulse", p.jump_impulse),
            ("move_speed", p.move_speed),
            ("player_width", p.player_width),
            ("player_height", p.player_height),
            ("collectible_size", p.collectible_size),
        ];
        // NaN fails `> 0.0` as well
        for (name, v) in sizes {
            if !(v > 0.0 && v.is_finite()) {
                return Err(GameError::Config(format!(
                    "{} must be positive and finite, got {}",
                    name, v
                )));
            }
        }
        for (name, v) in [("spawn_x", p.spawn_x), ("spawn_from_bottom", p.spawn_from_bottom)] {
            if !v.is_finite() {
                return Err(GameError::Config(format!("{} must be finite, got {}", name, v)));
            }
        }
        if self.screen_width < p.player_width || self.screen_height < p.player_height {
            return Err(GameError::Config("screen is smaller than the player".into()));
        }
        Ok(())
    }

    /// Length of one tick in seconds
    pub fn tick_secs(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig::load(dir.path().join("nope.ron")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = GameConfig::from_ron_str("(tick_rate: 30, physics: (gravity: 1.0))").unwrap();
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.physics.gravity, 1.0);
        assert_eq!(config.physics.move_speed, 3.0);
        assert_eq!(config.screen_width, 800.0);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.ron");
        std::fs::write(&path, "(tick_rate: \"fast\")").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(GameError::Config(_))));
    }

    #[test]
    fn test_bundled_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config.ron");
        let config = GameConfig::load(path).unwrap();
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.assets, AssetPaths::default());
    }

    #[test]
    fn test_rejects_non_positive_gravity() {
        assert!(GameConfig::from_ron_str("(physics: (gravity: 0.0))").is_err());
        assert!(GameConfig::from_ron_str("(tick_rate: 0)").is_err());
    }

    #[test]
    fn test_rejects_degenerate_sizes() {
        // A zero-sized coin can never be overlapped, so no level could finish
        for src in [
            "(physics: (collectible_size: 0.0))",
            "(physics: (player_width: -50.0))",
            "(physics: (player_height: 0.0))",
            "(physics: (move_speed: 0.0))",
            "(physics: (jump_impulse: -10.0))",
            "(screen_width: 0.0)",
        ] {
            assert!(
                matches!(GameConfig::from_ron_str(src), Err(GameError::Config(_))),
                "accepted {}",
                src
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut config = GameConfig::default();
        config.screen_width = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.physics.collectible_size = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.physics.spawn_x = f32::NAN;
        assert!(config.validate().is_err());

        assert!(GameConfig::default().validate().is_ok());
    }
}
