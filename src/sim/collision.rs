//! Axis-separated collision resolution against static platforms
//!
//! A body moves along X first and is pushed out of anything it overlaps,
//! then moves along Y and is pushed out again. There is no sweep: a body
//! fast enough to cross a thin platform in one tick, or one that clips a
//! corner on both axes at once, can tunnel through.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::Platform;

/// Result of a vertical resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalResult {
    /// Body came down onto a platform top
    pub landed: bool,
    /// Body hit a platform underside while rising
    pub bumped: bool,
}

/// Push a body out of every platform it overlaps after a horizontal move.
///
/// Moving right snaps the body's right edge to the platform's left edge;
/// moving left snaps its left edge to the platform's right edge. A body with
/// zero horizontal velocity is left where it is. Velocity is not modified.
///
/// Returns true if any platform was hit.
pub fn resolve_horizontal(pos: &mut Vec2, size: Vec2, vel_x: f32, platforms: &[Platform]) -> bool {
    let mut hit = false;
    for platform in platforms {
        let body = Aabb::new(*pos, size);
        if !body.intersects(&platform.bounds) {
            continue;
        }
        if vel_x > 0.0 {
            pos.x = platform.bounds.left() - size.x;
            hit = true;
        } else if vel_x < 0.0 {
            pos.x = platform.bounds.right();
            hit = true;
        }
    }
    hit
}

/// Push a body out of every platform it overlaps after a vertical move.
///
/// Falling bodies land on the platform top, rising bodies are stopped at the
/// platform underside. Either case zeroes `vel_y`.
pub fn resolve_vertical(
    pos: &mut Vec2,
    size: Vec2,
    vel_y: &mut f32,
    platforms: &[Platform],
) -> VerticalResult {
    let mut result = VerticalResult::default();
    for platform in platforms {
        let body = Aabb::new(*pos, size);
        if !body.intersects(&platform.bounds) {
            continue;
        }
        if *vel_y > 0.0 {
            pos.y = platform.bounds.top() - size.y;
            *vel_y = 0.0;
            result.landed = true;
        } else if *vel_y < 0.0 {
            pos.y = platform.bounds.bottom();
            *vel_y = 0.0;
            result.bumped = true;
        }
    }
    result
}
