//! Level lifecycle
//!
//! `GameState` is the whole simulation: the level store, the live entities,
//! the per-level run state and the current [`Phase`]. The app owns one
//! instance and drives it explicitly each frame; nothing here is global.
//!
//! ```text
//! Menu ──start──> Playing <──toggle_pause──> Paused
//!                   │  │
//!     last coin ────┘  └──── fell off / time up
//!         v                         v
//!   LevelComplete ──choose──>   GameOver ──restart──> Menu (same level)
//!     (next | repeat)             └──quit──> (process exits)
//! ```

use super::collision::{self, CollisionOutcome};
use super::entity::EntitySet;
use super::event::{Events, GameEvent, GameOverCause};
use super::timer::Countdown;
use crate::config::GameConfig;
use crate::input::{Action, FrameInput};
use crate::world::LevelStore;

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start action
    Menu,
    Playing,
    /// Simulation and countdown frozen; still rendered
    Paused,
    /// All coins taken; waiting for next/repeat
    LevelComplete,
    /// Run over; waiting for restart or quit
    GameOver(GameOverCause),
}

/// Choice offered on the level-complete screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelChoice {
    Next,
    Repeat,
}

/// Per-level counters. Built fresh on every (re)load, so score and clock
/// always reset together.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRunState {
    /// Wrapped level index
    pub index: usize,
    pub score: u32,
    pub countdown: Countdown,
}

impl LevelRunState {
    pub fn new(index: usize, config: &GameConfig) -> Self {
        Self {
            index,
            score: 0,
            countdown: Countdown::new(config.level_time_secs, config.tick_rate),
        }
    }
}

pub struct GameState {
    pub phase: Phase,
    pub run: LevelRunState,
    pub entities: EntitySet,
    pub events: Events,
    levels: LevelStore,
    config: GameConfig,
}

impl GameState {
    /// New game sitting at the menu with level 0 staged
    pub fn new(levels: LevelStore, config: GameConfig) -> Self {
        let entities = EntitySet::from_level(levels.level_at(0), &config);
        Self {
            phase: Phase::Menu,
            run: LevelRunState::new(0, &config),
            entities,
            events: Events::new(),
            levels,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// (Re)build a level: fresh player, fresh entities, score 0, full clock.
    /// The index wraps modulo the level count.
    pub fn load_level(&mut self, index: usize) {
        let index = self.levels.wrap_index(index);
        self.entities = EntitySet::from_level(self.levels.level_at(index), &self.config);
        self.run = LevelRunState::new(index, &self.config);
        self.phase = Phase::Playing;
        log::info!("Level {} loaded", index + 1);
        self.events.game.send(GameEvent::LevelLoaded { index });
    }

    /// Leave the menu and play the staged level
    pub fn start(&mut self) {
        if self.phase == Phase::Menu {
            self.load_level(self.run.index);
        }
    }

    /// Switch between Playing and Paused. Ignored in other phases.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => Phase::Paused,
            Phase::Paused => Phase::Playing,
            other => other,
        };
    }

    /// Pick the next level (wrapping) or repeat the current one
    pub fn choose(&mut self, choice: LevelChoice) {
        if self.phase != Phase::LevelComplete {
            return;
        }
        let index = match choice {
            LevelChoice::Next => self.run.index + 1,
            LevelChoice::Repeat => self.run.index,
        };
        log::info!("Level choice {:?}: moving to level {}", choice, self.levels.wrap_index(index) + 1);
        self.load_level(index);
    }

    /// From game over back to the menu. The level the run ended on stays
    /// staged, so starting again replays it.
    pub fn restart(&mut self) {
        if let Phase::GameOver(_) = self.phase {
            let index = self.run.index;
            self.entities = EntitySet::from_level(self.levels.level_at(index), &self.config);
            self.run = LevelRunState::new(index, &self.config);
            self.phase = Phase::Menu;
            log::info!("Restarting from menu at level {}", index + 1);
        }
    }

    /// Apply the frame's input, then advance the simulation one tick if
    /// playing. Returns the collision outcome when a tick ran.
    pub fn tick(&mut self, input: &FrameInput) -> Option<CollisionOutcome> {
        if matches!(self.phase, Phase::Playing | Phase::Paused) {
            self.apply_input(input);
        }
        if self.phase == Phase::Playing {
            Some(self.step())
        } else {
            None
        }
    }

    fn apply_input(&mut self, input: &FrameInput) {
        let g = self.config.physics.gravity;
        for &action in &input.pressed {
            match (self.phase, action) {
                (Phase::Playing | Phase::Paused, Action::Pause) => self.toggle_pause(),
                (Phase::Playing, Action::Jump) => self.entities.player.jump(g),
                (Phase::Playing, Action::MoveLeft) => self.entities.player.move_left(),
                (Phase::Playing, Action::MoveRight) => self.entities.player.move_right(),
                _ => {}
            }
        }
        // Releases apply even while paused so movement never sticks
        if input.is_released(Action::MoveLeft) || input.is_released(Action::MoveRight) {
            self.entities.player.stop();
        }
    }

    /// One simulation tick: physics, collision, lifecycle checks
    fn step(&mut self) -> CollisionOutcome {
        let physics = &self.config.physics;
        let (w, h) = (self.config.screen_width, self.config.screen_height);

        let player = &mut self.entities.player;
        player.apply_gravity(physics.gravity);
        player.integrate(w, h, physics.solid_floor);

        let outcome = collision::resolve(&mut self.entities);
        if let Some(i) = outcome.landed_on {
            log::trace!("Landed on platform {}", i);
        }

        if outcome.collected > 0 {
            self.run.score += outcome.collected as u32;
            self.events.game.send(GameEvent::CoinsCollected {
                count: outcome.collected,
                score: self.run.score,
            });
        }

        let level_complete = self.entities.remaining_collectibles() == 0;
        if level_complete {
            self.phase = Phase::LevelComplete;
            log::info!("Level {} completed! Score: {}", self.run.index + 1, self.run.score);
            self.events.game.send(GameEvent::LevelCompleted {
                index: self.run.index,
                score: self.run.score,
            });
        } else {
            self.run.countdown.tick();
        }

        // Checked regardless of completion; game over wins a tie
        let cause = if self.entities.player.bounds.top() > h {
            Some(GameOverCause::FellOff)
        } else if self.run.countdown.expired() {
            Some(GameOverCause::TimeUp)
        } else {
            None
        };
        if let Some(cause) = cause {
            self.phase = Phase::GameOver(cause);
            log::info!("Game over ({:?}). Final score: {}", cause, self.run.score);
            self.events.game.send(GameEvent::GameOver { cause, score: self.run.score });
        }

        outcome
    }
}
