//! Drawing
//!
//! Turns a `GameState` into draw calls. Holds no state of its own; the
//! only animated element (the spinning astronaut on the level-complete
//! screen) takes its angle from the caller.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::game::{EntityKind, GameOverCause, GameState, Phase, Rect};
use crate::ui::{
    level_complete_buttons, start_button, FONT_SIZE_LARGE, FONT_SIZE_SMALL, HAZARD_COLOR,
    OVERLAY_COLOR, PLATFORM_COLOR, TEXT_COLOR,
};

/// Draw the whole frame for the current phase
pub fn draw_frame(game: &GameState, assets: &Assets, celebrate_angle: f32) {
    let cfg = game.config();
    let (w, h) = (cfg.screen_width, cfg.screen_height);

    clear_background(BLACK);
    draw_sprite(&assets.background, Rect::new(0.0, 0.0, w, h), 0.0);

    match game.phase {
        Phase::Menu => start_button(w, h).draw(),
        Phase::Playing => {
            draw_world(game, assets);
            draw_hud(game);
        }
        Phase::Paused => {
            draw_world(game, assets);
            draw_hud(game);
            draw_rectangle(0.0, 0.0, w, h, OVERLAY_COLOR);
            draw_centered("PAUSED", w, h / 2.0, FONT_SIZE_LARGE);
        }
        Phase::LevelComplete => draw_level_complete(game, assets, celebrate_angle),
        Phase::GameOver(cause) => draw_game_over(game, cause),
    }
}

/// Platforms, hazards, coins and the player, in that order
fn draw_world(game: &GameState, assets: &Assets) {
    for entity in game.entities.iter() {
        let r = entity.bounds;
        match entity.kind {
            EntityKind::Platform => draw_rectangle(r.x, r.y, r.w, r.h, PLATFORM_COLOR),
            EntityKind::Hazard => draw_rectangle(r.x, r.y, r.w, r.h, HAZARD_COLOR),
            EntityKind::Collectible => draw_sprite(&assets.coin, r, 0.0),
            EntityKind::Player => draw_sprite(&assets.astronaut, r, 0.0),
        }
    }
}

/// Score top-left, level top-center, time top-right
fn draw_hud(game: &GameState) {
    let w = game.config().screen_width;
    let baseline = 10.0 + FONT_SIZE_SMALL * 0.6;
    let run = &game.run;

    draw_text(&format!("Score: {}", run.score), 10.0, baseline, FONT_SIZE_SMALL, TEXT_COLOR);
    draw_text(
        &format!("Level: {}", run.index + 1),
        w / 2.0 - 50.0,
        baseline,
        FONT_SIZE_SMALL,
        TEXT_COLOR,
    );
    draw_text(
        &format!("Time: {}", run.countdown.seconds_left() as u32),
        w - 120.0,
        baseline,
        FONT_SIZE_SMALL,
        TEXT_COLOR,
    );
}

fn draw_level_complete(game: &GameState, assets: &Assets, angle: f32) {
    let cfg = game.config();
    let (w, h) = (cfg.screen_width, cfg.screen_height);

    let size = cfg.physics.player_width;
    let spin = Rect::new(w / 2.0 - size / 2.0, h / 2.0 - 200.0, size, cfg.physics.player_height);
    draw_sprite(&assets.astronaut, spin, angle);

    draw_centered("Congratulations!", w, h / 2.0 - 100.0, FONT_SIZE_LARGE);
    draw_centered(&format!("Score: {}", game.run.score), w, h / 2.0, FONT_SIZE_LARGE);

    let (next, repeat) = level_complete_buttons(w, h);
    next.draw();
    repeat.draw();
}

fn draw_game_over(game: &GameState, cause: GameOverCause) {
    let cfg = game.config();
    let (w, h) = (cfg.screen_width, cfg.screen_height);

    draw_centered("Game Over", w, h / 2.0 - 100.0, FONT_SIZE_LARGE);
    let reason = match cause {
        GameOverCause::FellOff => "Lost in space",
        GameOverCause::TimeUp => "Out of time",
    };
    draw_centered(reason, w, h / 2.0 - 40.0, FONT_SIZE_SMALL);
    draw_centered(&format!("Final Score: {}", game.run.score), w, h / 2.0, FONT_SIZE_LARGE);
    draw_centered("Press R to Restart", w, h / 2.0 + 100.0, FONT_SIZE_LARGE);
    draw_centered("Press Q to Quit", w, h / 2.0 + 150.0, FONT_SIZE_LARGE);
}

/// Draw a texture stretched to `dest`, rotated about its center
fn draw_sprite(tex: &Texture2D, dest: Rect, rotation: f32) {
    draw_texture_ex(
        tex,
        dest.x,
        dest.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(dest.w, dest.h)),
            rotation,
            ..Default::default()
        },
    );
}

/// Horizontally centered text with its top at `top`
fn draw_centered(text: &str, screen_w: f32, top: f32, size: f32) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(
        text,
        (screen_w / 2.0 - dims.width / 2.0).round(),
        (top + dims.offset_y).round(),
        size,
        TEXT_COLOR,
    );
}
