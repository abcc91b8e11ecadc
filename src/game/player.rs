//! Player physics body
//!
//! Semi-implicit Euler in pixels per tick: gravity feeds velocity, velocity
//! feeds position, then the body is clamped to the screen. Horizontal
//! motion is a velocity toggle with no acceleration curve.

use super::rect::Rect;
use crate::config::PhysicsConfig;

/// The player-controlled astronaut
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Not resting on a platform or the floor
    pub airborne: bool,
    pub move_speed: f32,
    jump_impulse: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, physics: &PhysicsConfig) -> Self {
        Self {
            bounds: Rect::new(x, y, physics.player_width, physics.player_height),
            vx: 0.0,
            vy: 0.0,
            airborne: false,
            move_speed: physics.move_speed,
            jump_impulse: physics.jump_impulse,
        }
    }

    /// Spawn at the configured start point for a screen of the given height
    pub fn spawn(screen_height: f32, physics: &PhysicsConfig) -> Self {
        Self::new(physics.spawn_x, screen_height - physics.spawn_from_bottom, physics)
    }

    /// Add half of `g` to the downward velocity. No terminal velocity.
    pub fn apply_gravity(&mut self, g: f32) {
        self.vy += 0.5 * g;
    }

    /// Jump if standing. The impulse is divided by gravity, so stronger
    /// gravity means a weaker jump.
    pub fn jump(&mut self, g: f32) {
        if !self.airborne {
            self.vy = -self.jump_impulse / g;
            self.airborne = true;
        }
    }

    pub fn move_left(&mut self) {
        self.vx = -self.move_speed;
    }

    pub fn move_right(&mut self) {
        self.vx = self.move_speed;
    }

    pub fn stop(&mut self) {
        self.vx = 0.0;
    }

    /// Apply velocity, then clamp to the screen. The bottom clamp acts as a
    /// fallback floor and only runs when `solid_floor` is set.
    pub fn integrate(&mut self, screen_width: f32, screen_height: f32, solid_floor: bool) {
        self.bounds.x += self.vx;
        self.bounds.y += self.vy;

        if self.bounds.left() < 0.0 {
            self.bounds.set_left(0.0);
        }
        if self.bounds.right() > screen_width {
            self.bounds.set_right(screen_width);
        }
        if self.bounds.top() < 0.0 {
            self.bounds.set_top(0.0);
            self.vy = 0.0;
        }
        if solid_floor && self.bounds.bottom() >= screen_height {
            self.bounds.set_bottom(screen_height);
            self.airborne = false;
            self.vy = 0.0;
        }
    }

    /// Rest the player's feet on a surface at height `top`
    pub fn land_on(&mut self, top: f32) {
        self.bounds.set_bottom(top);
        self.airborne = false;
        self.vy = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, &PhysicsConfig::default())
    }

    #[test]
    fn test_gravity_increases_downward_velocity() {
        for g in [0.01, 0.5, 1.0, 9.8, 100.0] {
            let mut p = player_at(100.0, 100.0);
            let mut last = p.vy;
            for _ in 0..200 {
                p.apply_gravity(g);
                assert!(p.vy > last, "vy did not grow for g={}", g);
                last = p.vy;
            }
        }
    }

    #[test]
    fn test_jump_uses_inverse_gravity() {
        let mut p = player_at(100.0, 100.0);
        p.jump(0.5);
        assert_eq!(p.vy, -20.0);
        assert!(p.airborne);

        let mut p = player_at(100.0, 100.0);
        p.jump(2.0);
        assert_eq!(p.vy, -5.0);
    }

    #[test]
    fn test_jump_is_noop_while_airborne() {
        let mut p = player_at(100.0, 100.0);
        p.jump(0.5);
        p.apply_gravity(0.5);
        let vy = p.vy;
        p.jump(0.5);
        assert_eq!(p.vy, vy);
        assert!(p.airborne);
    }

    #[test]
    fn test_move_is_velocity_toggle() {
        let mut p = player_at(100.0, 100.0);
        p.move_left();
        assert_eq!(p.vx, -3.0);
        p.move_right();
        assert_eq!(p.vx, 3.0);
        p.stop();
        assert_eq!(p.vx, 0.0);
    }

    #[test]
    fn test_horizontal_clamp_for_any_inputs() {
        let mut p = player_at(400.0, 100.0);
        // Deterministic mix of moves and jumps
        for i in 0..2000u32 {
            match (i / 37) % 4 {
                0 => p.move_left(),
                1 => p.move_right(),
                2 => p.jump(0.5),
                _ => p.stop(),
            }
            p.apply_gravity(0.5);
            p.integrate(W, H, true);
            assert!(p.bounds.x >= 0.0);
            assert!(p.bounds.x <= W - p.bounds.w);
        }

        let mut p = player_at(0.0, 100.0);
        p.move_left();
        p.integrate(W, H, true);
        assert_eq!(p.bounds.x, 0.0);

        let mut p = player_at(W - 51.0, 100.0);
        p.move_right();
        p.integrate(W, H, true);
        assert_eq!(p.bounds.x, W - 50.0);
    }

    #[test]
    fn test_bottom_edge_lands_player() {
        let mut p = player_at(100.0, H - 50.0);
        p.airborne = true;
        p.vy = 4.0;
        p.integrate(W, H, true);
        assert!(!p.airborne);
        assert_eq!(p.vy, 0.0);
        assert_eq!(p.bounds.bottom(), H);
    }

    #[test]
    fn test_top_clamp_zeroes_velocity() {
        let mut p = player_at(100.0, 5.0);
        p.vy = -20.0;
        p.airborne = true;
        p.integrate(W, H, true);
        assert_eq!(p.bounds.y, 0.0);
        assert_eq!(p.vy, 0.0);
        // Still in the air after bumping the ceiling
        assert!(p.airborne);
    }

    #[test]
    fn test_no_floor_lets_player_fall_out() {
        let mut p = player_at(100.0, H - 10.0);
        p.vy = 30.0;
        p.integrate(W, H, false);
        assert!(p.bounds.top() > H);
    }
}
