//! Vertex batching draw context

use glam::Vec2;

use super::DrawContext;
use super::shapes;
use super::vertex::Vertex;

/// A run of text queued for the host's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub pos: Vec2,
    pub size: f32,
    pub text: String,
    pub color: [f32; 4],
}

/// Collects one frame of geometry
#[derive(Debug, Clone, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    text: Vec<TextItem>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, keeping allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.text.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn text_items(&self) -> &[TextItem] {
        &self.text
    }

    /// Vertex data ready to upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl DrawContext for QuadBatch {
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::rect(min, size, color));
    }

    fn fill_oval(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend(shapes::oval(min, size, color));
    }

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::line(a, b, width, color));
    }

    fn text(&mut self, pos: Vec2, size: f32, text: &str, color: [f32; 4]) {
        self.text.push(TextItem {
            pos,
            size,
            text: text.to_string(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::shapes::OVAL_SEGMENTS;

    #[test]
    fn test_batch_accumulates_and_clears() {
        let mut batch = QuadBatch::new();
        batch.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        batch.fill_oval(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        batch.line(Vec2::ZERO, Vec2::X, 1.0, [1.0; 4]);
        batch.text(Vec2::ZERO, 24.0, "Score: 0", [1.0; 4]);

        assert_eq!(batch.vertices().len(), 6 + OVAL_SEGMENTS * 3 + 6);
        assert_eq!(batch.as_bytes().len(), batch.vertices().len() * Vertex::STRIDE);
        assert_eq!(batch.text_items()[0].text, "Score: 0");

        batch.clear();
        assert!(batch.vertices().is_empty());
        assert!(batch.text_items().is_empty());
    }
}
