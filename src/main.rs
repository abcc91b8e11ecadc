//! ASTRO-HOP: a tiny space platformer
//!
//! Guide the astronaut across floating platforms and grab every coin
//! before the clock runs out. Clearing a level offers the next one or a
//! replay; running out of time ends the run.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod config;
mod error;
mod game;
mod input;
mod render;
mod ui;
mod world;

use macroquad::prelude::*;

use app::{App, AppControl};
use assets::Assets;
use config::{GameConfig, CONFIG_PATH};
use error::GameError;
use game::GameState;
use world::LevelStore;

fn window_conf() -> Conf {
    // Errors are reported properly once logging is up in main
    let config = GameConfig::load(CONFIG_PATH).unwrap_or_default();
    Conf {
        window_title: format!("ASTRO-HOP v{}", VERSION),
        window_width: config.screen_width as i32,
        window_height: config.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== ASTRO-HOP v{} ===", VERSION);

    let mut app = match startup().await {
        Ok(app) => app,
        Err(e) => {
            log::error!("Fatal: {}", e);
            #[cfg(not(target_arch = "wasm32"))]
            std::process::exit(1);
            #[cfg(target_arch = "wasm32")]
            return;
        }
    };

    let target_frame_time = app.game.config().tick_secs();

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        if app.frame() == AppControl::Quit {
            break;
        }

        // Fixed tick rate: one simulation step per frame, so hold each frame
        // to the configured length
        let elapsed = get_time() - frame_start;
        if elapsed < target_frame_time {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < target_frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < target_frame_time {
                    std::hint::spin_loop();
                }
            }
            // WASM: the browser paces frames via requestAnimationFrame
        }

        next_frame().await;
    }

    log::info!("Goodbye");
}

/// Load config, levels and sprites. Any failure here is fatal.
async fn startup() -> Result<App, GameError> {
    let config = GameConfig::load(CONFIG_PATH)?;

    let levels = load_levels(&config.assets.levels).await?;

    let assets = Assets::load(&config.assets).await?;

    Ok(App::new(GameState::new(levels, config), assets))
}

#[cfg(not(target_arch = "wasm32"))]
async fn load_levels(path: &str) -> Result<LevelStore, GameError> {
    Ok(LevelStore::load(path)?)
}

/// WASM has no filesystem; fetch the file through macroquad instead
#[cfg(target_arch = "wasm32")]
async fn load_levels(path: &str) -> Result<LevelStore, GameError> {
    let bytes = load_file(path).await.map_err(|e| {
        GameError::MalformedLevelData(world::LevelError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{}: {}", path, e),
        )))
    })?;
    Ok(LevelStore::from_bytes(path, bytes)?)
}
