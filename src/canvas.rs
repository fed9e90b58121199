use super::*;

/// Persistent drawing surface in scene pixels (y grows down).
///
/// Nothing is cleared between frames: whatever was painted stays until painted over.
pub trait Canvas {
    fn fill(&mut self, color: Rgba<f32>);
    /// Filled convex polygon
    fn polygon(&mut self, points: &[vec2<f32>], color: Rgba<f32>);
    fn rect(&mut self, rect: Aabb2<f32>, color: Rgba<f32>);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Fill(Rgba<f32>),
        Polygon(Vec<vec2<f32>>, Rgba<f32>),
        Rect(Aabb2<f32>, Rgba<f32>),
    }

    /// Remembers every paint call instead of drawing
    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    impl RecordingCanvas {
        pub fn take(&mut self) -> Vec<Op> {
            mem::take(&mut self.ops)
        }
    }

    impl Canvas for RecordingCanvas {
        fn fill(&mut self, color: Rgba<f32>) {
            self.ops.push(Op::Fill(color));
        }
        fn polygon(&mut self, points: &[vec2<f32>], color: Rgba<f32>) {
            self.ops.push(Op::Polygon(points.to_vec(), color));
        }
        fn rect(&mut self, rect: Aabb2<f32>, color: Rgba<f32>) {
            self.ops.push(Op::Rect(rect, color));
        }
    }
}
