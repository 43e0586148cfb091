//! Street Buds - a 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, collisions, game state)
//! - `renderer`: Immediate-mode draw surface and vertex batching
//! - `audio`: Fire-and-forget sound cues
//! - `particles`: Cosmetic particle bursts
//! - `input`: Semantic key mapping
//! - `settings`: JSON configuration with defaults
//! - `game`: Fixed-timestep host driver

pub mod audio;
pub mod game;
pub mod input;
pub mod particles;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{QualityPreset, Settings};

/// Game configuration constants
///
/// Every rate here is expressed per tick (velocities in px/tick, gravity in
/// px/tick²) or in tick counts. Changing `TICK_RATE` means retuning them all.
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Lowest top-edge y the player may reach (safety floor)
    pub const FLOOR_Y: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const MOVE_SPEED: f32 = 5.0;
    /// Negative is upward
    pub const JUMP_SPEED: f32 = -15.0;
    pub const GRAVITY: f32 = 1.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    /// 2 seconds at 60 Hz
    pub const INVULNERABILITY_TICKS: u64 = 2 * TICK_RATE as u64;

    /// Enemy defaults
    /// 1 second at 60 Hz
    pub const STUN_TICKS: u64 = TICK_RATE as u64;

    /// Scoring and session
    pub const STOMP_REWARD: u64 = 100;
    pub const STARTING_LIVES: u8 = 3;
    pub const DEFAULT_SCORE_TO_COMPLETE: u64 = 1000;
    /// Seconds
    pub const DEFAULT_TIME_LIMIT: u32 = 300;

    /// Particles spawned when a collectible is picked up
    pub const PICKUP_BURST_PARTICLES: usize = 20;
}
