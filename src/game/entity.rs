//! Entities
//!
//! Every entity is a positioned rectangle tagged with an [`EntityKind`].
//! Platforms, hazards and collectibles are passive; only the player
//! carries velocity, which lives on [`Player`] rather than on the shared
//! entity type.

use super::player::Player;
use super::rect::Rect;
use crate::config::GameConfig;
use crate::world::LevelDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Platform,
    Hazard,
    Collectible,
}

/// A passive, positioned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub bounds: Rect,
}

impl Entity {
    pub fn new(kind: EntityKind, bounds: Rect) -> Self {
        Self { kind, bounds }
    }
}

/// All live entities of one level instance.
///
/// Each list keeps the order from the level file; collision relies on it.
/// `collectibles` is the active set: picked-up items are removed and the
/// list never grows during a level.
#[derive(Debug, Clone)]
pub struct EntitySet {
    pub player: Player,
    pub platforms: Vec<Entity>,
    pub hazards: Vec<Entity>,
    pub collectibles: Vec<Entity>,
}

impl EntitySet {
    /// Build a fresh level instance with a newly spawned player
    pub fn from_level(level: &LevelDescriptor, config: &GameConfig) -> Self {
        let physics = &config.physics;

        let platforms = level
            .platforms
            .iter()
            .map(|p| Entity::new(EntityKind::Platform, Rect::new(p.x, p.y, p.width, p.height)))
            .collect();

        let hazards = level
            .hazards
            .iter()
            .map(|h| Entity::new(EntityKind::Hazard, Rect::new(h.x, h.y, h.width, h.height)))
            .collect();

        let size = physics.collectible_size;
        let collectibles = level
            .collectibles
            .iter()
            .map(|c| Entity::new(EntityKind::Collectible, Rect::new(c.x, c.y, size, size)))
            .collect();

        Self {
            player: Player::spawn(config.screen_height, physics),
            platforms,
            hazards,
            collectibles,
        }
    }

    /// Number of collectibles still in play
    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.len()
    }

    /// Every entity in draw order: platforms, hazards, collectibles, then
    /// the player on top.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.platforms
            .iter()
            .chain(&self.hazards)
            .chain(&self.collectibles)
            .copied()
            .chain(std::iter::once(Entity::new(EntityKind::Player, self.player.bounds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{BoxSpec, CollectibleSpec};

    fn sample_level() -> LevelDescriptor {
        LevelDescriptor {
            platforms: vec![
                BoxSpec { x: 0.0, y: 500.0, width: 200.0, height: 20.0 },
                BoxSpec { x: 300.0, y: 400.0, width: 100.0, height: 20.0 },
            ],
            hazards: vec![BoxSpec { x: 500.0, y: 580.0, width: 60.0, height: 20.0 }],
            collectibles: vec![CollectibleSpec { x: 320.0, y: 350.0 }],
        }
    }

    #[test]
    fn test_from_level_spawns_player() {
        let config = GameConfig::default();
        let set = EntitySet::from_level(&sample_level(), &config);

        assert_eq!(set.player.bounds, Rect::new(50.0, 500.0, 50.0, 50.0));
        assert!(!set.player.airborne);
        assert_eq!(set.platforms.len(), 2);
        assert_eq!(set.hazards.len(), 1);
        assert_eq!(set.remaining_collectibles(), 1);
        assert_eq!(set.collectibles[0].bounds, Rect::new(320.0, 350.0, 30.0, 30.0));
    }

    #[test]
    fn test_iter_draw_order() {
        let set = EntitySet::from_level(&sample_level(), &GameConfig::default());
        let kinds: Vec<_> = set.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntityKind::Platform,
                EntityKind::Platform,
                EntityKind::Hazard,
                EntityKind::Collectible,
                EntityKind::Player,
            ]
        );
        // Exactly one player
        assert_eq!(kinds.iter().filter(|k| **k == EntityKind::Player).count(), 1);
    }
}
