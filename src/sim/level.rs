//! Levels and the level registry
//!
//! A `Level` owns its platforms, enemies and collectibles. The registry
//! holds pristine definitions; the session plays a clone, so restarting a
//! level is just cloning it again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::state::{Collectible, CollectibleKind, Platform, Tick};
use crate::consts::*;

/// One playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub spawn_point: Vec2,
    /// Seconds
    pub time_limit: u32,
    pub score_to_complete: u64,
    /// Draw order: platforms, then enemies, then collectibles
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
}

impl Level {
    pub fn new(name: impl Into<String>, spawn_point: Vec2) -> Self {
        Self {
            name: name.into(),
            spawn_point,
            time_limit: DEFAULT_TIME_LIMIT,
            score_to_complete: DEFAULT_SCORE_TO_COMPLETE,
            platforms: Vec::new(),
            enemies: Vec::new(),
            collectibles: Vec::new(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    pub fn with_collectible(mut self, collectible: Collectible) -> Self {
        self.collectibles.push(collectible);
        self
    }

    /// Advance every enemy by one tick. Interactions are the driver's job.
    pub fn update(&mut self, now: Tick) {
        for enemy in &mut self.enemies {
            enemy.update(now);
        }
    }

    /// Score still outstanding after `score`
    pub fn remaining_score(&self, score: u64) -> u64 {
        self.score_to_complete.saturating_sub(score)
    }
}

/// Ordered list of level definitions with a cursor
#[derive(Debug, Clone, Default)]
pub struct LevelRegistry {
    levels: Vec<Level>,
    current: usize,
}

impl LevelRegistry {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels, current: 0 }
    }

    /// The stock two-level campaign
    pub fn with_default_levels() -> Self {
        let coin = |x, y| Collectible::new(x, y, 20.0, 20.0, CollectibleKind::Coin, 100);

        let level1 = Level::new("Level 1", Vec2::new(100.0, 400.0))
            .with_platform(Platform::new(0.0, 450.0, 800.0, 50.0, true))
            .with_platform(Platform::new(100.0, 350.0, 100.0, 20.0, false))
            .with_platform(Platform::new(300.0, 300.0, 100.0, 20.0, false))
            .with_platform(Platform::new(500.0, 250.0, 100.0, 20.0, false))
            .with_enemy(Enemy::walker(200.0, 400.0))
            .with_enemy(Enemy::walker(400.0, 400.0))
            .with_collectible(coin(150.0, 300.0))
            .with_collectible(coin(350.0, 250.0))
            .with_collectible(Collectible::new(
                550.0,
                200.0,
                20.0,
                20.0,
                CollectibleKind::PowerUp,
                200,
            ));

        let level2 = Level::new("Level 2", Vec2::new(100.0, 400.0))
            .with_platform(Platform::new(0.0, 450.0, 800.0, 50.0, true))
            .with_platform(Platform::new(150.0, 350.0, 100.0, 20.0, false))
            .with_platform(Platform::new(350.0, 300.0, 100.0, 20.0, false))
            .with_platform(Platform::new(550.0, 250.0, 100.0, 20.0, false))
            .with_platform(Platform::new(250.0, 200.0, 100.0, 20.0, false))
            .with_enemy(Enemy::walker(200.0, 400.0))
            .with_enemy(Enemy::walker(400.0, 400.0))
            .with_enemy(Enemy::walker(600.0, 400.0))
            .with_collectible(coin(200.0, 300.0))
            .with_collectible(coin(400.0, 250.0))
            .with_collectible(Collectible::new(
                600.0,
                200.0,
                20.0,
                20.0,
                CollectibleKind::Health,
                0,
            ));

        Self::new(vec![level1, level2])
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 1-based, for display
    pub fn current_number(&self) -> usize {
        self.current + 1
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn current(&self) -> Option<&Level> {
        self.levels.get(self.current)
    }

    /// Move to the next level, wrapping to the first after the last
    pub fn advance(&mut self) {
        self.current += 1;
        if self.current >= self.levels.len() {
            self.current = 0;
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
