//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, every timer counted in ticks
//! - Stable iteration order (level insertion order)
//! - No rendering, audio or platform dependencies

pub mod aabb;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod player;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{VerticalResult, resolve_horizontal, resolve_vertical};
pub use enemy::{Enemy, EnemyKind, EnemyState, EnemyStats};
pub use level::{Level, LevelRegistry};
pub use player::Player;
pub use state::{Collectible, CollectibleKind, GameEvent, GamePhase, GameState, Platform, Tick};
pub use tick::{TickInput, tick};
