//! Rendering module
//!
//! Drawables paint onto a `DrawContext`, an immediate-mode 2D surface.
//! `QuadBatch` is the stock context: it tessellates every call into a
//! GPU-ready vertex list plus a list of text runs for the host to rasterize.

pub mod batch;
pub mod scene;
pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use batch::{QuadBatch, TextItem};
pub use scene::draw_frame;
pub use vertex::Vertex;

/// Immediate-mode 2D drawing surface. Coordinates are screen pixels,
/// y down.
pub trait DrawContext {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]);
    /// Ellipse inscribed in the given box
    fn fill_oval(&mut self, min: Vec2, size: Vec2, color: [f32; 4]);
    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: [f32; 4]);
    /// Text with its baseline starting at `pos`
    fn text(&mut self, pos: Vec2, size: f32, text: &str, color: [f32; 4]);
}

/// Anything that can paint itself
pub trait Draw {
    fn draw(&self, ctx: &mut dyn DrawContext);
}
