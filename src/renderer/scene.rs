//! Per-phase scene composition
//!
//! Reads the simulation after a tick and paints it. Nothing here mutates
//! game state.

use glam::Vec2;

use super::vertex::colors;
use super::{Draw, DrawContext};
use crate::consts::*;
use crate::particles::ParticleSystem;
use crate::sim::{Collectible, Enemy, GamePhase, GameState, Level, Platform, Player};

const TITLE_SIZE: f32 = 48.0;
const HEADING_SIZE: f32 = 36.0;
const BODY_SIZE: f32 = 24.0;

const HEALTH_BAR_WIDTH: f32 = 50.0;
const HEALTH_BAR_HEIGHT: f32 = 5.0;

impl Draw for Platform {
    fn draw(&self, ctx: &mut dyn DrawContext) {
        ctx.fill_rect(self.bounds.min, self.bounds.size, colors::PLATFORM);
    }
}

impl Draw for Enemy {
    fn draw(&self, ctx: &mut dyn DrawContext) {
        if !self.is_alive() {
            return;
        }
        let color = if self.is_stunned() {
            colors::ENEMY_STUNNED
        } else {
            colors::ENEMY
        };
        ctx.fill_rect(self.pos, self.size, color);
    }
}

impl Draw for Collectible {
    fn draw(&self, ctx: &mut dyn DrawContext) {
        if self.is_collected() {
            return;
        }
        ctx.fill_oval(self.bounds.min, self.bounds.size, colors::collectible(self.kind));
    }
}

impl Draw for Player {
    fn draw(&self, ctx: &mut dyn DrawContext) {
        let pos = self.pos;
        ctx.fill_rect(pos, self.size, colors::PLAYER);

        // Eyes and mouth
        let eye = Vec2::splat(10.0);
        ctx.fill_oval(pos + Vec2::new(5.0, 10.0), eye, colors::PLAYER_DETAIL);
        ctx.fill_oval(pos + Vec2::new(25.0, 10.0), eye, colors::PLAYER_DETAIL);
        ctx.line(
            pos + Vec2::new(10.0, 30.0),
            pos + Vec2::new(30.0, 30.0),
            1.0,
            colors::PLAYER_DETAIL,
        );

        // Health bar centered above the head
        let bar_min = pos + Vec2::new((self.size.x - HEALTH_BAR_WIDTH) / 2.0, -10.0);
        ctx.fill_rect(
            bar_min,
            Vec2::new(HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT),
            colors::HEALTH_BAR_BG,
        );
        let fraction = (self.health() as f32 / self.max_health as f32).clamp(0.0, 1.0);
        if fraction > 0.0 {
            ctx.fill_rect(
                bar_min,
                Vec2::new(HEALTH_BAR_WIDTH * fraction, HEALTH_BAR_HEIGHT),
                colors::HEALTH_BAR_FG,
            );
        }

        if self.is_attacking() {
            ctx.fill_oval(
                pos - Vec2::splat(5.0),
                self.size + Vec2::splat(10.0),
                colors::ATTACK_HALO,
            );
        }
    }
}

impl Draw for Level {
    fn draw(&self, ctx: &mut dyn DrawContext) {
        for platform in &self.platforms {
            platform.draw(ctx);
        }
        for enemy in &self.enemies {
            enemy.draw(ctx);
        }
        for collectible in &self.collectibles {
            collectible.draw(ctx);
        }
    }
}

impl Draw for ParticleSystem {
    fn draw(&self, ctx: &mut dyn DrawContext) {
        for p in self.particles() {
            ctx.fill_oval(p.pos, Vec2::splat(p.size), colors::faded(p.color, p.alpha()));
        }
    }
}

/// Paint one full frame for the current phase
pub fn draw_frame(state: &GameState, particles: &ParticleSystem, ctx: &mut dyn DrawContext) {
    ctx.fill_rect(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), colors::BACKGROUND);

    match state.phase {
        GamePhase::Menu => draw_menu(ctx),
        GamePhase::Playing => draw_game(state, particles, ctx),
        GamePhase::Paused => {
            draw_game(state, particles, ctx);
            draw_overlay(
                ctx,
                colors::PAUSE_OVERLAY,
                ("PAUSED", Vec2::new(330.0, 250.0)),
                &[("Press ESC to resume".to_string(), Vec2::new(250.0, 300.0))],
            );
        }
        GamePhase::GameOver => {
            draw_game(state, particles, ctx);
            draw_overlay(
                ctx,
                colors::END_OVERLAY,
                ("GAME OVER", Vec2::new(300.0, 250.0)),
                &[
                    (format!("Final score: {}", state.total_score), Vec2::new(300.0, 300.0)),
                    ("Press SPACE to restart".to_string(), Vec2::new(200.0, 350.0)),
                ],
            );
        }
        GamePhase::LevelComplete => {
            draw_game(state, particles, ctx);
            draw_overlay(
                ctx,
                colors::END_OVERLAY,
                ("Level Complete!", Vec2::new(250.0, 250.0)),
                &[
                    (format!("Score: {}", state.score), Vec2::new(300.0, 300.0)),
                    ("Press SPACE to continue".to_string(), Vec2::new(200.0, 350.0)),
                ],
            );
        }
    }
}

fn draw_menu(ctx: &mut dyn DrawContext) {
    ctx.text(Vec2::new(250.0, 200.0), TITLE_SIZE, "Street Buds", colors::TEXT);
    ctx.text(
        Vec2::new(200.0, 300.0),
        BODY_SIZE,
        "Press SPACE to start",
        colors::TEXT,
    );
}

fn draw_game(state: &GameState, particles: &ParticleSystem, ctx: &mut dyn DrawContext) {
    if let Some(level) = &state.level {
        level.draw(ctx);
    }
    state.player.draw(ctx);
    particles.draw(ctx);
    draw_hud(state, ctx);
}

fn draw_hud(state: &GameState, ctx: &mut dyn DrawContext) {
    let lines = [
        format!("Score: {}", state.score),
        format!("Lives: {}", state.lives),
        format!("Time: {}", state.remaining_secs()),
    ];
    for (i, line) in lines.iter().enumerate() {
        ctx.text(Vec2::new(20.0, 30.0 + 30.0 * i as f32), BODY_SIZE, line, colors::TEXT);
    }

    if let Some(level) = &state.level {
        let label = format!("Level {}: {}", state.level_index + 1, level.name);
        ctx.text(Vec2::new(SCREEN_WIDTH - 260.0, 30.0), BODY_SIZE, &label, colors::TEXT);
        let goal = format!("Goal: {}", level.remaining_score(state.score));
        ctx.text(Vec2::new(SCREEN_WIDTH - 260.0, 60.0), BODY_SIZE, &goal, colors::TEXT);
    }
}

fn draw_overlay(
    ctx: &mut dyn DrawContext,
    shade: [f32; 4],
    heading: (&str, Vec2),
    lines: &[(String, Vec2)],
) {
    ctx.fill_rect(Vec2::ZERO, Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), shade);
    ctx.text(heading.1, HEADING_SIZE, heading.0, colors::TEXT);
    for (text, pos) in lines {
        ctx.text(*pos, BODY_SIZE, text, colors::TEXT);
    }
}
