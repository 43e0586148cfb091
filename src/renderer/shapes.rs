//! Shape generation for 2D primitives
//!
//! Everything comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segments used to approximate an ellipse
pub const OVAL_SEGMENTS: usize = 16;

/// Axis-aligned filled rectangle (two triangles)
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Filled ellipse inscribed in the box at `min` with `size`
pub fn oval(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let center = min + size * 0.5;
    let radii = size * 0.5;
    let mut vertices = Vec::with_capacity(OVAL_SEGMENTS * 3);

    for i in 0..OVAL_SEGMENTS {
        let a0 = i as f32 / OVAL_SEGMENTS as f32 * TAU;
        let a1 = (i + 1) as f32 / OVAL_SEGMENTS as f32 * TAU;
        let p0 = center + Vec2::new(a0.cos(), a0.sin()) * radii;
        let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radii;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p0.x, p0.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
    }

    vertices
}

/// Line segment of the given width (a thin quad)
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> [Vertex; 6] {
    let dir = (b - a).normalize_or_zero();
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a0 = a + perp;
    let a1 = a - perp;
    let b0 = b + perp;
    let b1 = b - perp;

    [
        Vertex::new(a0.x, a0.y, color),
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b0.x, b0.y, color),
        Vertex::new(b0.x, b0.y, color),
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
    ]
}
