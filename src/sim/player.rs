//! The player character: movement, gravity, jumping and platform collision

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::collision::{resolve_horizontal, resolve_vertical};
use super::state::{Platform, Tick};
use super::tick::TickInput;
use crate::consts::*;

/// The player-controlled character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity in px/tick
    pub vel: Vec2,
    pub size: Vec2,
    /// Airborne. Also gates jump input.
    pub(crate) is_jumping: bool,
    pub facing_right: bool,
    /// May go below zero; callers compare against `<= 0`
    health: i32,
    pub max_health: i32,
    pub spawn_point: Vec2,
    /// Tick at which the current invulnerability window opened
    invulnerable_since: Option<Tick>,
    /// Descending while airborne, recomputed every update
    attacking: bool,
}

impl Player {
    pub fn new(spawn_point: Vec2) -> Self {
        Self {
            pos: spawn_point,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            is_jumping: false,
            facing_right: true,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            spawn_point,
            invulnerable_since: None,
            attacking: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_since.is_some()
    }

    /// True while airborne and descending, i.e. able to stomp
    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Advance the player by exactly one tick
    pub fn update(&mut self, input: &TickInput, platforms: &[Platform], now: Tick) {
        // Horizontal velocity follows input directly, no acceleration
        if input.left {
            self.vel.x = -MOVE_SPEED;
            self.facing_right = false;
        } else if input.right {
            self.vel.x = MOVE_SPEED;
            self.facing_right = true;
        } else {
            self.vel.x = 0.0;
        }

        if input.jump && !self.is_jumping {
            self.vel.y = JUMP_SPEED;
            self.is_jumping = true;
        }

        // Gravity always applies, including on the way up
        self.vel.y += GRAVITY;

        self.pos.x += self.vel.x;
        resolve_horizontal(&mut self.pos, self.size, self.vel.x, platforms);

        self.pos.y += self.vel.y;
        let vertical = resolve_vertical(&mut self.pos, self.size, &mut self.vel.y, platforms);
        if vertical.landed {
            self.is_jumping = false;
        } else if self.vel.y == 0.0 {
            // Stopped mid-air (head bump or apex) with nothing underfoot
            self.is_jumping = true;
        }

        if self.pos.y > FLOOR_Y {
            self.pos.y = FLOOR_Y;
            self.vel.y = 0.0;
            self.is_jumping = false;
        }

        if let Some(since) = self.invulnerable_since {
            if now.saturating_sub(since) >= INVULNERABILITY_TICKS {
                self.invulnerable_since = None;
            }
        }

        self.attacking = self.is_jumping && self.vel.y > 0.0;
    }

    /// Apply damage unless invulnerable. Returns true if damage was taken.
    pub fn take_damage(&mut self, amount: i32, now: Tick) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        self.health -= amount;
        self.invulnerable_since = Some(now);
        true
    }

    /// Return to the spawn point at full health with a fresh
    /// invulnerability window
    pub fn respawn(&mut self, now: Tick) {
        self.pos = self.spawn_point;
        self.vel = Vec2::ZERO;
        self.health = self.max_health;
        self.invulnerable_since = Some(now);
    }

    /// Force an upward launch if grounded
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.vel.y = JUMP_SPEED;
            self.is_jumping = true;
        }
    }

    /// Launch upward off a stomped enemy. Unlike `jump` this works in the
    /// air, which is the only place a stomp can happen. The attack flag is
    /// left alone until the next `update`, so one descent can stomp every
    /// enemy it lands on.
    pub fn bounce(&mut self) {
        self.vel.y = JUMP_SPEED;
        self.is_jumping = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Vec<Platform> {
        vec![Platform::new(0.0, 450.0, 800.0, 50.0, true)]
    }

    /// A player standing still on the ground platform
    fn grounded_player() -> Player {
        let mut player = Player::new(Vec2::new(100.0, 400.0));
        player.update(&TickInput::default(), &ground(), 0);
        player
    }

    #[test]
    fn test_settles_on_ground() {
        let player = grounded_player();
        assert_eq!(player.pos.y, 390.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.is_jumping());
        assert!(!player.is_attacking());
    }

    #[test]
    fn test_jump_from_rest() {
        let mut player = grounded_player();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(&jump, &ground(), 1);
        assert_eq!(player.vel.y, JUMP_SPEED + GRAVITY);
        assert_eq!(player.vel.y, -14.0);
        assert!(player.is_jumping());
        assert_eq!(player.pos.y, 376.0);

        // Stays airborne until it lands again
        let idle = TickInput::default();
        let mut ticks = 0;
        while player.is_jumping() {
            player.update(&idle, &ground(), 2 + ticks);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.pos.y, 390.0);
    }

    #[test]
    fn test_holding_jump_midair_does_not_rejump() {
        let mut player = grounded_player();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(&jump, &ground(), 1);
        player.update(&jump, &ground(), 2);
        assert_eq!(player.vel.y, -13.0);
    }

    #[test]
    fn test_horizontal_movement_and_facing() {
        let mut player = grounded_player();
        let left = TickInput {
            left: true,
            ..Default::default()
        };
        player.update(&left, &ground(), 1);
        assert_eq!(player.pos.x, 95.0);
        assert_eq!(player.vel.x, -MOVE_SPEED);
        assert!(!player.facing_right);

        player.update(&TickInput::default(), &ground(), 2);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.pos.x, 95.0);
        assert!(!player.facing_right);
    }

    #[test]
    fn test_wall_stops_player_without_zeroing_velocity() {
        let mut platforms = ground();
        platforms.push(Platform::new(143.0, 300.0, 50.0, 150.0, true));
        let mut player = grounded_player();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        player.update(&right, &platforms, 1);
        assert_eq!(player.pos.x, 103.0);
        assert_eq!(player.vel.x, MOVE_SPEED);
    }

    #[test]
    fn test_head_bump_marks_airborne() {
        let platforms = vec![
            Platform::new(0.0, 450.0, 800.0, 50.0, true),
            Platform::new(80.0, 360.0, 100.0, 20.0, false),
        ];
        let mut player = Player::new(Vec2::new(100.0, 385.0));
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(&jump, &platforms, 0);
        assert_eq!(player.pos.y, 380.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.is_jumping());
    }

    #[test]
    fn test_attack_window_while_descending() {
        let mut player = grounded_player();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        player.update(&jump, &ground(), 1);
        assert!(!player.is_attacking());

        // Rise for 13 more ticks, hit the apex, then start falling
        let idle = TickInput::default();
        for t in 0..14 {
            player.update(&idle, &ground(), 2 + t);
            assert!(!player.is_attacking());
        }
        player.update(&idle, &ground(), 20);
        assert!(player.vel.y > 0.0);
        assert!(player.is_attacking());
    }

    #[test]
    fn test_floor_clamp() {
        let mut player = Player::new(Vec2::new(100.0, 395.0));
        player.vel.y = 20.0;
        player.update(&TickInput::default(), &[], 0);
        assert_eq!(player.pos.y, FLOOR_Y);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_damage_and_invulnerability_window() {
        let mut player = grounded_player();
        assert!(player.take_damage(30, 10));
        assert_eq!(player.health(), 70);
        assert!(player.is_invulnerable());

        assert!(!player.take_damage(30, 11));
        assert_eq!(player.health(), 70);

        // Window still open one tick before it expires
        player.update(&TickInput::default(), &ground(), 10 + INVULNERABILITY_TICKS - 1);
        assert!(player.is_invulnerable());
        player.update(&TickInput::default(), &ground(), 10 + INVULNERABILITY_TICKS);
        assert!(!player.is_invulnerable());

        assert!(player.take_damage(100, 200));
        assert_eq!(player.health(), -30);
    }

    #[test]
    fn test_respawn_restores_everything() {
        let mut player = grounded_player();
        player.pos = Vec2::new(600.0, 120.0);
        player.vel = Vec2::new(5.0, 9.0);
        player.take_damage(150, 5);
        player.respawn(7);
        assert_eq!(player.pos, player.spawn_point);
        assert_eq!(player.vel, Vec2::ZERO);
        assert_eq!(player.health(), player.max_health);
        assert!(player.is_invulnerable());
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = grounded_player();
        player.jump();
        assert_eq!(player.vel.y, JUMP_SPEED);
        assert!(player.is_jumping());

        player.vel.y = 4.0;
        player.jump();
        assert_eq!(player.vel.y, 4.0);
    }

    #[test]
    fn test_bounce_works_midair() {
        let mut player = grounded_player();
        player.is_jumping = true;
        player.vel.y = 6.0;
        player.attacking = true;
        player.bounce();
        assert_eq!(player.vel.y, JUMP_SPEED);
        assert!(player.is_jumping());
        assert!(player.is_attacking());

        player.update(&TickInput::default(), &[], 1);
        assert!(!player.is_attacking());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn damage_within_window_is_ignored(
                first in 1i32..200,
                rest in proptest::collection::vec(1i32..200, 1..10),
            ) {
                let mut player = Player::new(Vec2::new(100.0, 390.0));
                player.take_damage(first, 0);
                let after_first = player.health();
                prop_assert_eq!(after_first, PLAYER_MAX_HEALTH - first);
                for (i, amount) in rest.iter().enumerate() {
                    player.take_damage(*amount, 1 + i as u64);
                    prop_assert_eq!(player.health(), after_first);
                }
            }

            #[test]
            fn respawn_ignores_prior_state(
                x in -500.0f32..1500.0,
                y in -500.0f32..1500.0,
                vx in -50.0f32..50.0,
                vy in -50.0f32..50.0,
                damage in 0i32..500,
            ) {
                let mut player = Player::new(Vec2::new(100.0, 400.0));
                player.pos = Vec2::new(x, y);
                player.vel = Vec2::new(vx, vy);
                player.take_damage(damage, 3);
                player.respawn(4);
                prop_assert_eq!(player.pos, Vec2::new(100.0, 400.0));
                prop_assert_eq!(player.vel, Vec2::ZERO);
                prop_assert_eq!(player.health(), PLAYER_MAX_HEALTH);
            }
        }
    }
}
