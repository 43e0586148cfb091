//! Street Buds entry point
//!
//! Runs a scripted headless session: no window, silent audio, frames drawn
//! into a vertex batch. Useful for smoke-testing the loop end to end.

use std::time::{Duration, Instant};

use street_buds::audio::AudioManager;
use street_buds::consts::*;
use street_buds::input::Key;
use street_buds::renderer::QuadBatch;
use street_buds::sim::{GamePhase, LevelRegistry};
use street_buds::{Game, Settings};

/// Frames to run before giving up
const DEMO_FRAMES: u32 = 60 * 20;
const FRAME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();
    log::info!("Street Buds (headless) starting...");

    let settings = Settings::load();
    let registry = LevelRegistry::with_default_levels();
    let seed: u64 = rand::random();
    let mut game = Game::new(settings, registry, AudioManager::default(), seed);
    let mut batch = QuadBatch::new();

    game.key_down(Key::Enter);
    let mut last = Instant::now();
    for frame in 0..DEMO_FRAMES {
        std::thread::sleep(FRAME);
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        script_input(&mut game, frame);
        game.update(dt);

        batch.clear();
        game.render(&mut batch);
        if frame % TICK_RATE == 0 {
            log::debug!(
                "frame {frame}: {:?}, {} vertices, {} bytes",
                game.state().phase,
                batch.vertices().len(),
                batch.as_bytes().len()
            );
        }

        if matches!(
            game.state().phase,
            GamePhase::GameOver | GamePhase::LevelComplete
        ) {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Demo finished: {:?}, level {}, score {}, total {}, lives {}",
        state.phase,
        state.level_index + 1,
        state.score,
        state.total_score,
        state.lives
    );
}

/// Walk right and hop every second
fn script_input(game: &mut Game, frame: u32) {
    if frame == 1 {
        game.key_up(Key::Enter);
        game.key_down(Key::Right);
    }
    match frame % TICK_RATE {
        0 => game.key_down(Key::Up),
        10 => game.key_up(Key::Up),
        _ => {}
    }
}
