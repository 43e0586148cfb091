//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Stride between vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    use crate::sim::CollectibleKind;

    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PLATFORM: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
    pub const PLAYER: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const PLAYER_DETAIL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ATTACK_HALO: [f32; 4] = [1.0, 1.0, 0.0, 0.5];
    pub const HEALTH_BAR_BG: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HEALTH_BAR_FG: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ENEMY_STUNNED: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const COIN: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const POWER_UP: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
    pub const HEALTH: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PAUSE_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.59];
    pub const END_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.78];

    pub fn collectible(kind: CollectibleKind) -> [f32; 4] {
        match kind {
            CollectibleKind::Coin => COIN,
            CollectibleKind::PowerUp => POWER_UP,
            CollectibleKind::Health => HEALTH,
        }
    }

    /// Same color with alpha scaled by `alpha`
    pub fn faded(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], color[3] * alpha.clamp(0.0, 1.0)]
    }
}
