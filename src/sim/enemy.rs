//! Patrolling enemies with a stun/death state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::state::Tick;
use crate::consts::*;

/// Enemy variants. Behaviour differences live in `EnemyStats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slow patroller that hits hard enough to cost a full health bar
    #[default]
    Walker,
    /// Quick patroller with a lighter hit
    Runner,
}

/// Per-kind tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// px/tick
    pub speed: f32,
    pub damage: i32,
}

impl EnemyKind {
    pub const fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Walker => EnemyStats {
                speed: 2.0,
                damage: 100,
            },
            EnemyKind::Runner => EnemyStats {
                speed: 4.0,
                damage: 50,
            },
        }
    }
}

/// Life-cycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    Patrolling,
    /// Frozen and harmless until the stun runs out
    Stunned { since: Tick },
    /// Permanent. Dead enemies never update, draw or interact.
    Dead,
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// +1 moving right, -1 moving left
    pub direction: f32,
    pub state: EnemyState,
}

impl Enemy {
    pub fn new(kind: EnemyKind, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            direction: 1.0,
            state: EnemyState::Patrolling,
        }
    }

    pub fn walker(x: f32, y: f32) -> Self {
        Self::new(EnemyKind::Walker, x, y, 30.0, 30.0)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_alive(&self) -> bool {
        self.state != EnemyState::Dead
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self.state, EnemyState::Stunned { .. })
    }

    pub fn damage(&self) -> i32 {
        self.kind.stats().damage
    }

    /// Advance one tick: recover from stun when due, otherwise patrol
    pub fn update(&mut self, now: Tick) {
        match self.state {
            EnemyState::Dead => return,
            EnemyState::Stunned { since } => {
                if now.saturating_sub(since) < STUN_TICKS {
                    return;
                }
                self.state = EnemyState::Patrolling;
            }
            EnemyState::Patrolling => {}
        }

        self.pos.x += self.kind.stats().speed * self.direction;

        // Reverse at the world edges
        if self.pos.x <= 0.0 || self.pos.x >= SCREEN_WIDTH - self.size.x {
            self.direction = -self.direction;
        }
    }

    /// A hit from above kills outright; any other hit stuns (refreshing an
    /// existing stun). Dead enemies stay dead.
    pub fn take_damage(&mut self, from_above: bool, now: Tick) {
        if self.state == EnemyState::Dead {
            return;
        }
        self.state = if from_above {
            EnemyState::Dead
        } else {
            EnemyState::Stunned { since: now }
        };
    }
}
