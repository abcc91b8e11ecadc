//! Collision System
//!
//! Rectangle overlap checks between the player and the level, run once per
//! tick after the player has been integrated.
//!
//! Platform resolution uses the FIRST overlapping platform in level order,
//! not the nearest one. With several simultaneous overlaps the snap target
//! depends on file order and can be the wrong platform. Side and underside
//! hits also snap the player on top.

use super::entity::EntitySet;

/// What happened during one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Index of the platform the player was snapped onto
    pub landed_on: Option<usize>,
    /// Collectibles removed this pass
    pub collected: usize,
    /// Hazards overlapping the player. Hazards are inert; this is
    /// informational only.
    pub hazard_contacts: usize,
}

/// Resolve platform contact and consume overlapping collectibles
pub fn resolve(entities: &mut EntitySet) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    // 1. First overlapping platform wins
    let hit = entities
        .platforms
        .iter()
        .position(|p| p.bounds.overlaps(&entities.player.bounds));
    if let Some(i) = hit {
        let top = entities.platforms[i].bounds.top();
        entities.player.land_on(top);
        outcome.landed_on = Some(i);
    }

    // 2. Every overlapping collectible goes in the same pass
    let player = entities.player.bounds;
    let before = entities.collectibles.len();
    entities.collectibles.retain(|c| !c.bounds.overlaps(&player));
    outcome.collected = before - entities.collectibles.len();

    outcome.hazard_contacts = entities
        .hazards
        .iter()
        .filter(|h| h.bounds.overlaps(&player))
        .count();

    if outcome.hazard_contacts > 0 {
        log::debug!("Player touching {} hazard(s)", outcome.hazard_contacts);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::entity::{Entity, EntityKind};
    use crate::game::rect::Rect;
    use crate::world::LevelDescriptor;

    fn empty_set() -> EntitySet {
        let level = LevelDescriptor { platforms: vec![], hazards: vec![], collectibles: vec![] };
        EntitySet::from_level(&level, &GameConfig::default())
    }

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Entity {
        Entity::new(EntityKind::Platform, Rect::new(x, y, w, h))
    }

    fn coin(x: f32, y: f32) -> Entity {
        Entity::new(EntityKind::Collectible, Rect::new(x, y, 30.0, 30.0))
    }

    #[test]
    fn test_land_on_platform() {
        let mut set = empty_set();
        set.player.bounds = Rect::new(100.0, 255.0, 50.0, 50.0);
        set.player.vy = 5.0;
        set.player.airborne = true;
        set.platforms.push(platform(80.0, 300.0, 200.0, 20.0));

        let outcome = resolve(&mut set);
        assert_eq!(outcome.landed_on, Some(0));
        assert_eq!(set.player.bounds.bottom(), 300.0);
        assert_eq!(set.player.vy, 0.0);
        assert!(!set.player.airborne);
    }

    #[test]
    fn test_first_platform_in_order_wins() {
        let mut set = empty_set();
        set.player.bounds = Rect::new(100.0, 100.0, 50.0, 50.0);
        // Both overlap; the lower one comes first in the list
        set.platforms.push(platform(90.0, 140.0, 100.0, 20.0));
        set.platforms.push(platform(90.0, 110.0, 100.0, 20.0));

        let outcome = resolve(&mut set);
        assert_eq!(outcome.landed_on, Some(0));
        assert_eq!(set.player.bounds.bottom(), 140.0);
    }

    #[test]
    fn test_touching_platform_is_not_a_hit() {
        let mut set = empty_set();
        set.player.bounds = Rect::new(100.0, 250.0, 50.0, 50.0);
        set.player.airborne = true;
        set.platforms.push(platform(80.0, 300.0, 200.0, 20.0));

        let outcome = resolve(&mut set);
        assert_eq!(outcome.landed_on, None);
        assert!(set.player.airborne);
    }

    #[test]
    fn test_collects_all_overlapping_in_one_pass() {
        let mut set = empty_set();
        set.player.bounds = Rect::new(100.0, 100.0, 50.0, 50.0);
        set.collectibles = vec![coin(110.0, 110.0), coin(500.0, 500.0), coin(120.0, 90.0)];

        let outcome = resolve(&mut set);
        assert_eq!(outcome.collected, 2);
        assert_eq!(set.remaining_collectibles(), 1);
        assert_eq!(set.collectibles[0].bounds.x, 500.0);
    }

    #[test]
    fn test_hazards_are_inert() {
        let mut set = empty_set();
        set.player.bounds = Rect::new(100.0, 100.0, 50.0, 50.0);
        set.hazards.push(Entity::new(EntityKind::Hazard, Rect::new(110.0, 110.0, 20.0, 20.0)));
        let before = set.player.clone();

        let outcome = resolve(&mut set);
        assert_eq!(outcome.hazard_contacts, 1);
        assert_eq!(set.player, before);
        assert_eq!(set.hazards.len(), 1);
    }
}
