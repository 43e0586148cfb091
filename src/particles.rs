//! Cosmetic particle bursts
//!
//! Purely visual. The simulation never reads particle state, so the RNG here
//! is separate from anything gameplay-affecting.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::TICK_RATE;

/// Ticks per second, for converting per-tick tuning to per-second
const TPS: f32 = TICK_RATE as f32;
/// Downward pull, 0.1 px/tick²
const PARTICLE_GRAVITY: f32 = 0.1 * TPS * TPS;

/// A single spark
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    /// px/s
    pub vel: Vec2,
    pub color: [f32; 4],
    /// Seconds remaining; doubles as alpha
    pub life: f32,
    pub size: f32,
}

impl Particle {
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Pool of live particles with a hard cap
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: Pcg32,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(seed: u64, max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            rng: Pcg32::seed_from_u64(seed),
            max_particles,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spray `count` particles outward from `center`. Oldest particles are
    /// dropped when the cap is hit.
    pub fn burst(&mut self, center: Vec2, count: usize, color: [f32; 4]) {
        if self.max_particles == 0 {
            return;
        }
        // Only the newest `max_particles` of old plus new survive
        let count = count.min(self.max_particles);
        let overflow = (self.particles.len() + count).saturating_sub(self.max_particles);
        self.particles.drain(..overflow);

        for _ in 0..count {
            let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
            // 2..7 px/tick
            let speed = (self.rng.random::<f32>() * 5.0 + 2.0) * TPS;
            self.particles.push(Particle {
                pos: center,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                color,
                life: self.rng.random::<f32>() + 0.5,
                size: self.rng.random::<f32>() * 5.0 + 2.0,
            });
        }
    }

    /// Age every particle by `dt` seconds and drop the dead ones
    pub fn update(&mut self, dt: f32) {
        for p in self.particles.iter_mut() {
            p.pos += p.vel * dt;
            p.vel.y += PARTICLE_GRAVITY * dt;
            p.life -= dt;
            p.size *= 0.99;
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}
