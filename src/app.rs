//! Application state and the per-frame loop body
//!
//! One frame is: poll input, update the game for the current phase,
//! render. The menu, level-complete and game-over screens are phases of
//! this same loop, so the quit check runs on every frame.

use crate::assets::Assets;
use crate::game::{GameEvent, GameState, LevelChoice, Phase};
use crate::input::{Action, FrameInput, InputState};
use crate::render;
use crate::ui::{level_complete_buttons, start_button};

/// Degrees the astronaut turns per frame on the level-complete screen
const CELEBRATE_SPIN_DEG: f32 = 2.0;

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Quit,
}

/// Route one frame of input to the game according to its phase
pub fn handle_input(game: &mut GameState, input: &FrameInput) -> AppControl {
    if input.close_requested {
        log::info!("Window close requested");
        return AppControl::Quit;
    }

    let (w, h) = (game.config().screen_width, game.config().screen_height);

    match game.phase {
        Phase::Menu => {
            if start_button(w, h).is_clicked(input.click) || input.is_pressed(Action::Confirm) {
                game.start();
            }
        }
        Phase::Playing | Phase::Paused => {
            game.tick(input);
        }
        Phase::LevelComplete => {
            let (next, repeat) = level_complete_buttons(w, h);
            if next.is_clicked(input.click) || input.is_pressed(Action::Confirm) {
                game.choose(LevelChoice::Next);
            } else if repeat.is_clicked(input.click) || input.is_pressed(Action::Restart) {
                game.choose(LevelChoice::Repeat);
            }
        }
        Phase::GameOver(_) => {
            if input.is_pressed(Action::Quit) {
                log::info!("Quit from game over screen");
                return AppControl::Quit;
            }
            if input.is_pressed(Action::Restart) {
                game.restart();
            }
        }
    }

    AppControl::Continue
}

/// Everything the running game owns
pub struct App {
    pub game: GameState,
    input: InputState,
    assets: Assets,
    /// Spin of the astronaut on the level-complete screen, in degrees
    celebrate_angle: f32,
}

impl App {
    pub fn new(game: GameState, assets: Assets) -> Self {
        let input = InputState::new();
        if input.has_gamepad() {
            log::info!("Gamepad connected");
        }
        Self {
            game,
            input,
            assets,
            celebrate_angle: 0.0,
        }
    }

    /// Run one frame: input, simulation, render
    pub fn frame(&mut self) -> AppControl {
        let input = self.input.poll();
        let control = handle_input(&mut self.game, &input);

        for event in self.game.events.game.drain() {
            match event {
                GameEvent::LevelLoaded { index } => log::debug!("Level {} ready", index + 1),
                GameEvent::CoinsCollected { count, score } => {
                    log::debug!("Collected {} coin(s), score {}", count, score)
                }
                GameEvent::LevelCompleted { index, score } => {
                    log::debug!("Level {} cleared with {} coin(s)", index + 1, score)
                }
                GameEvent::GameOver { cause, score } => {
                    log::debug!("Run ended ({:?}) at score {}", cause, score)
                }
            }
        }

        if self.game.phase == Phase::LevelComplete {
            self.celebrate_angle = (self.celebrate_angle + CELEBRATE_SPIN_DEG) % 360.0;
        } else {
            self.celebrate_angle = 0.0;
        }

        render::draw_frame(&self.game, &self.assets, self.celebrate_angle.to_radians());
        control
    }
}
