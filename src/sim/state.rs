//! Game state and core simulation types
//!
//! Everything the tick mutates lives here or hangs off `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::level::Level;
use super::player::Player;
use crate::consts::*;

/// Simulation time, counted in fixed ticks since the session started
pub type Tick = u64;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen gameplay under an overlay
    Paused,
    /// All lives lost
    GameOver,
    /// Score threshold reached
    LevelComplete,
}

/// A static collision surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Aabb,
    /// Carried from level data; collision treats both kinds the same
    pub solid: bool,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, solid: bool) -> Self {
        Self {
            bounds: Aabb::from_xywh(x, y, width, height),
            solid,
        }
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    Coin,
    PowerUp,
    Health,
}

/// A static pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub bounds: Aabb,
    pub kind: CollectibleKind,
    pub value: u64,
    collected: bool,
}

impl Collectible {
    pub fn new(x: f32, y: f32, width: f32, height: f32, kind: CollectibleKind, value: u64) -> Self {
        Self {
            bounds: Aabb::from_xywh(x, y, width, height),
            kind,
            value,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark as collected. Returns the value on the first call and `None` on
    /// every call after that, so the score can only ever be paid once.
    pub fn collect(&mut self) -> Option<u64> {
        if self.collected {
            return None;
        }
        self.collected = true;
        Some(self.value)
    }
}

/// Something that happened during a tick.
///
/// The host drains these after each tick to drive audio and particles.
/// Nothing in the simulation reads them back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { index: usize, name: String },
    EnemyStomped { pos: Vec2 },
    PlayerHurt { health: i32 },
    LifeLost { lives_left: u8 },
    CollectiblePicked { kind: CollectibleKind, center: Vec2, value: u64 },
    Paused,
    Resumed,
    GameOver { total_score: u64 },
    LevelComplete { index: usize, score: u64 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Score on the current level
    pub score: u64,
    /// Score accumulated over completed levels plus the current one
    pub total_score: u64,
    pub lives: u8,
    /// Lives granted on (re)start
    pub starting_lives: u8,
    /// Simulation tick counter. This is the clock for every timer.
    pub time_ticks: Tick,
    /// Tick at which the current level started
    pub level_start_tick: Tick,
    /// Registry index of the level being played
    pub level_index: usize,
    /// Working copy of the current level (enemies and pickups mutate)
    pub level: Option<Level>,
    pub player: Player,
    /// Events raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}

impl GameState {
    /// Create a fresh session sitting on the menu
    pub fn new(starting_lives: u8) -> Self {
        Self {
            phase: GamePhase::Menu,
            score: 0,
            total_score: 0,
            lives: starting_lives,
            starting_lives,
            time_ticks: 0,
            level_start_tick: 0,
            level_index: 0,
            level: None,
            player: Player::new(Vec2::ZERO),
            events: Vec::new(),
        }
    }

    /// Install a level and put the player on its spawn point
    pub fn load_level(&mut self, index: usize, level: Level) {
        self.player = Player::new(level.spawn_point);
        self.events.push(GameEvent::LevelStarted {
            index,
            name: level.name.clone(),
        });
        self.level_index = index;
        self.level = Some(level);
        self.score = 0;
        self.level_start_tick = self.time_ticks;
    }

    /// Add to both the level score and the running total
    pub fn add_score(&mut self, amount: u64) {
        self.score += amount;
        self.total_score += amount;
    }

    /// Whole seconds of play since the level started
    pub fn elapsed_secs(&self) -> u64 {
        (self.time_ticks - self.level_start_tick) / TICK_RATE as u64
    }

    /// Seconds left on the level clock, floored at zero
    pub fn remaining_secs(&self) -> u64 {
        self.level
            .as_ref()
            .map(|level| u64::from(level.time_limit).saturating_sub(self.elapsed_secs()))
            .unwrap_or(0)
    }
}
