//! Host driver
//!
//! Owns everything around the simulation: input latching, the fixed-step
//! accumulator, audio and particle reactions to tick events, and drawing.

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::*;
use crate::input::{Key, KeyboardState};
use crate::particles::ParticleSystem;
use crate::renderer::{DrawContext, draw_frame, vertex::colors};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, LevelRegistry, tick};

/// Longest frame fed into the accumulator; anything slower is dropped
const MAX_FRAME_DT: f32 = 0.1;

/// A running session
pub struct Game {
    state: GameState,
    registry: LevelRegistry,
    audio: AudioManager,
    particles: ParticleSystem,
    settings: Settings,
    input: KeyboardState,
    accumulator: f32,
}

impl Game {
    pub fn new(
        settings: Settings,
        registry: LevelRegistry,
        mut audio: AudioManager,
        seed: u64,
    ) -> Self {
        audio.configure(&settings);
        let max_particles = settings.max_particles();
        log::info!(
            "New session: {} levels, {} lives, quality {}",
            registry.len(),
            settings.starting_lives,
            settings.quality.as_str()
        );
        Self {
            state: GameState::new(settings.starting_lives),
            registry,
            audio,
            particles: ParticleSystem::new(seed, max_particles),
            settings,
            input: KeyboardState::new(),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Window lost focus: drop held keys and pause a running level
    pub fn focus_lost(&mut self) {
        self.input.release_all();
        if self.state.phase == GamePhase::Playing {
            self.input.request_pause();
        }
    }

    /// Advance by a frame's worth of wall time. Returns the number of
    /// simulation ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.snapshot();
            let before = self.state.phase;
            tick(&mut self.state, &mut self.registry, &input);
            if self.state.phase == GamePhase::Playing
                && matches!(
                    before,
                    GamePhase::Menu | GamePhase::GameOver | GamePhase::LevelComplete
                )
            {
                self.input.suppress_held_jump();
            }
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();

            self.dispatch_events();
            if self.state.phase == GamePhase::Playing {
                self.particles.update(SIM_DT);
            }
        }
        substeps
    }

    /// Paint the current frame
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        draw_frame(&self.state, &self.particles, ctx);
    }

    fn dispatch_events(&mut self) {
        for event in &self.state.events {
            match event {
                GameEvent::LevelStarted { index, name } => {
                    log::debug!("Level {} ({name}) on screen", index + 1);
                    self.particles.clear();
                    if let Some(music) = &self.settings.background_music {
                        if !self.audio.is_music_playing() {
                            self.audio.play_background_music(music);
                        }
                    }
                }
                GameEvent::EnemyStomped { .. } => self.audio.play(SoundEffect::Stomp),
                GameEvent::CollectiblePicked { kind, center, .. } => {
                    self.audio.play(SoundEffect::Pickup);
                    self.particles
                        .burst(*center, PICKUP_BURST_PARTICLES, colors::collectible(*kind));
                }
                GameEvent::PlayerHurt { .. } => self.audio.play(SoundEffect::Hurt),
                GameEvent::LifeLost { .. } => self.audio.play(SoundEffect::LifeLost),
                GameEvent::GameOver { .. } => {
                    self.audio.stop_background_music();
                    self.audio.play(SoundEffect::GameOver);
                }
                GameEvent::LevelComplete { .. } => self.audio.play(SoundEffect::LevelComplete),
                GameEvent::Paused | GameEvent::Resumed => {}
            }
        }
    }
}
