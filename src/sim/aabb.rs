//! Axis-aligned bounding boxes
//!
//! Every collision test in the game is a box-vs-box overlap. Boxes use
//! screen coordinates: `min` is the top-left corner and y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// True if the interiors overlap. Boxes that merely share an edge do not
    /// intersect, so a player standing exactly on a platform is not inside it.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_xywh(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_xywh(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let player = Aabb::from_xywh(100.0, 390.0, 40.0, 60.0);
        let ground = Aabb::from_xywh(0.0, 450.0, 800.0, 50.0);
        assert!(!player.intersects(&ground));

        let side = Aabb::from_xywh(140.0, 390.0, 20.0, 20.0);
        assert!(!player.intersects(&side));
    }

    #[test]
    fn test_empty_box_never_intersects() {
        let a = Aabb::from_xywh(0.0, 0.0, 0.0, 10.0);
        let b = Aabb::from_xywh(-5.0, -5.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edges_and_center() {
        let a = Aabb::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.right(), 40.0);
        assert_eq!(a.bottom(), 60.0);
        assert_eq!(a.center(), Vec2::new(25.0, 40.0));
    }
}
