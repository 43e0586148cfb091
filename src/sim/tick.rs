//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically: phase
//! transitions, entity updates, then cross-entity interactions (stomps,
//! damage, pickups) and the score/lives bookkeeping they drive.

use super::level::{Level, LevelRegistry};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: move left
    pub left: bool,
    /// Held: move right
    pub right: bool,
    /// Held: jump
    pub jump: bool,
    /// One-shot: pause toggle
    pub pause: bool,
    /// One-shot: start / restart / continue on the non-playing screens
    pub start: bool,
}

/// Advance the session by one fixed timestep
pub fn tick(state: &mut GameState, registry: &mut LevelRegistry, input: &TickInput) {
    state.events.clear();

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                log::info!("Paused");
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
                log::info!("Resumed");
            }
            _ => {}
        }
    }

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Paused => return,
        GamePhase::Menu => {
            if input.start {
                start_level(state, registry);
            }
            return;
        }
        GamePhase::GameOver => {
            if input.start {
                registry.reset();
                state.total_score = 0;
                state.lives = state.starting_lives;
                start_level(state, registry);
            }
            return;
        }
        GamePhase::LevelComplete => {
            if input.start {
                registry.advance();
                start_level(state, registry);
            }
            return;
        }
    }

    // Take the level out so entities and session bookkeeping can be
    // mutated side by side
    let Some(mut level) = state.level.take() else {
        return;
    };

    state.time_ticks += 1;
    let now = state.time_ticks;

    level.update(now);
    state.player.update(input, &level.platforms, now);

    resolve_enemy_contacts(state, &mut level);
    if state.phase == GamePhase::Playing {
        resolve_pickups(state, &mut level);

        if state.score >= level.score_to_complete {
            state.phase = GamePhase::LevelComplete;
            state.events.push(GameEvent::LevelComplete {
                index: state.level_index,
                score: state.score,
            });
            log::info!(
                "Level {} complete with {} points",
                state.level_index + 1,
                state.score
            );
        }
    }

    state.level = Some(level);
}

/// Load the registry's current level and enter `Playing`
fn start_level(state: &mut GameState, registry: &LevelRegistry) {
    let Some(level) = registry.current() else {
        log::warn!("No levels registered, staying on {:?}", state.phase);
        return;
    };
    log::info!(
        "Starting level {} of {}: {}",
        registry.current_number(),
        registry.len(),
        level.name
    );
    state.load_level(registry.current_index(), level.clone());
    state.phase = GamePhase::Playing;
}

/// Stomp or get hurt by every live enemy the player overlaps
fn resolve_enemy_contacts(state: &mut GameState, level: &mut Level) {
    let now = state.time_ticks;

    for enemy in level.enemies.iter_mut() {
        let player_box = state.player.bounds();
        let enemy_box = enemy.bounds();
        if !enemy.is_alive() || !player_box.intersects(&enemy_box) {
            continue;
        }

        if state.player.is_attacking() && player_box.top() < enemy_box.top() {
            enemy.take_damage(true, now);
            state.player.bounce();
            state.add_score(STOMP_REWARD);
            state.events.push(GameEvent::EnemyStomped {
                pos: enemy_box.center(),
            });
            log::debug!("Stomped enemy at {:?}", enemy_box.center());
        } else if !enemy.is_stunned() {
            if state.player.take_damage(enemy.damage(), now) {
                state.events.push(GameEvent::PlayerHurt {
                    health: state.player.health(),
                });
            }
            if state.player.health() <= 0 {
                state.lives = state.lives.saturating_sub(1);
                state.events.push(GameEvent::LifeLost {
                    lives_left: state.lives,
                });
                if state.lives == 0 {
                    state.phase = GamePhase::GameOver;
                    state.events.push(GameEvent::GameOver {
                        total_score: state.total_score,
                    });
                    log::info!("Game over with {} points", state.total_score);
                    return;
                }
                log::debug!("Life lost, {} left", state.lives);
                state.player.respawn(now);
            }
        }
    }
}

/// Collect every uncollected pickup the player overlaps
fn resolve_pickups(state: &mut GameState, level: &mut Level) {
    let player_box = state.player.bounds();
    for collectible in level.collectibles.iter_mut() {
        if collectible.is_collected() || !player_box.intersects(&collectible.bounds) {
            continue;
        }
        if let Some(value) = collectible.collect() {
            state.add_score(value);
            state.events.push(GameEvent::CollectiblePicked {
                kind: collectible.kind,
                center: collectible.bounds.center(),
                value,
            });
            log::debug!("Picked up {:?} worth {}", collectible.kind, value);
        }
    }
}
