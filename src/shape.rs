use super::*;

/// Which of the two interleaved tilings a shape belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Primary,
    Secondary,
}

impl Layer {
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Foreground and background color roles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub color: Rgba<f32>,
    pub background: Rgba<f32>,
}

impl Palette {
    pub fn swapped(self) -> Self {
        Self {
            color: self.background,
            background: self.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeState {
    Idle,
    Animating {
        /// Frames rotated so far
        frames: usize,
        /// Square painted under the shape while it turns
        footprint: Aabb2<f32>,
    },
}

/// A plus made of a vertical and a horizontal bar
#[derive(Debug, Clone)]
pub struct Shape {
    pub center: vec2<f32>,
    pub size: f32,
    pub layer: Layer,
    pub palette: Palette,
    /// Vertical then horizontal, never rotated
    bars: [Aabb2<f32>; 2],
    corners: [[vec2<f32>; 4]; 2],
    points: [[vec2<f32>; 4]; 2],
    rotation: Angle<f32>,
    /// Settled quarter turns, modulo a full turn
    quarter_turns: u8,
    state: ShapeState,
}

impl Shape {
    pub fn new(center: vec2<f32>, size: f32, layer: Layer, palette: Palette) -> Self {
        let thickness = size / 3.0;
        let bars = [
            geometry::centered_rect(center, vec2(thickness, size)),
            geometry::centered_rect(center, vec2(size, thickness)),
        ];
        let corners = bars.map(geometry::corners_of);
        Self {
            center,
            size,
            layer,
            palette,
            bars,
            corners,
            points: corners,
            rotation: Angle::ZERO,
            quarter_turns: 0,
            state: ShapeState::Idle,
        }
    }

    /// Current outlines of both bars
    pub fn points(&self) -> &[[vec2<f32>; 4]; 2] {
        &self.points
    }

    pub fn rotation(&self) -> Angle<f32> {
        self.rotation
    }

    /// Frames into the current animation. A freshly selected shape is at 0,
    /// a settling one reaches the frames-per-turn count, idle shapes report 0.
    pub fn rotation_count(&self) -> usize {
        match self.state {
            ShapeState::Idle => 0,
            ShapeState::Animating { frames, .. } => frames,
        }
    }

    /// Whether the shape is in the animating state, including the frame 0
    /// right after selection
    pub fn is_animating(&self) -> bool {
        matches!(self.state, ShapeState::Animating { .. })
    }

    pub fn footprint(&self) -> Option<Aabb2<f32>> {
        match self.state {
            ShapeState::Idle => None,
            ShapeState::Animating { footprint, .. } => Some(footprint),
        }
    }

    pub fn rotate(&mut self, theta: Angle<f32>) {
        self.set_rotation(Angle::from_radians(
            self.rotation.as_radians() + theta.as_radians(),
        ));
    }

    fn set_rotation(&mut self, rotation: Angle<f32>) {
        let center = self.center;
        self.rotation = rotation;
        self.points = self
            .corners
            .map(|bar| bar.map(|point| geometry::rotate_point(point, center, rotation)));
    }

    /// Hit-testing always uses the unrotated bars, even mid-turn
    pub fn hit_test(&self, point: vec2<f32>) -> bool {
        self.bars.iter().any(|bar| bar.contains(point))
    }

    pub fn create_background_footprint(&mut self) {
        self.state = ShapeState::Animating {
            frames: 0,
            footprint: geometry::centered_rect(self.center, vec2::splat(self.size)),
        };
    }

    /// Turns one frame further; returns `true` once the quarter turn is done
    /// and the shape is idle again.
    pub fn advance(&mut self, frames_per_turn: usize) -> bool {
        let ShapeState::Animating { frames, .. } = &mut self.state else {
            return false;
        };
        *frames += 1;
        if *frames < frames_per_turn {
            self.rotate(Angle::from_radians(
                f32::PI / 2.0 / frames_per_turn as f32,
            ));
            return false;
        }
        self.quarter_turns = (self.quarter_turns + 1) % 4;
        self.set_rotation(Angle::from_radians(
            f32::PI / 2.0 * self.quarter_turns as f32,
        ));
        self.state = ShapeState::Idle;
        true
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, color: Rgba<f32>) {
        for bar in &self.points {
            canvas.polygon(bar, color);
        }
    }

    pub fn draw_background_footprint(&self, canvas: &mut dyn Canvas, color: Rgba<f32>) {
        if let Some(footprint) = self.footprint() {
            canvas.rect(footprint, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::recording::*;
    use approx::assert_abs_diff_eq;

    const SIZE: f32 = 30.0;

    fn palette() -> Palette {
        Palette {
            color: Rgba::WHITE,
            background: Rgba::BLACK,
        }
    }

    fn shape() -> Shape {
        Shape::new(vec2(100.0, 200.0), SIZE, Layer::Primary, palette())
    }

    fn assert_points_eq(a: &[[vec2<f32>; 4]; 2], b: &[[vec2<f32>; 4]; 2]) {
        for (a, b) in a.iter().flatten().zip(b.iter().flatten()) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-3);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn bars_are_centered() {
        let shape = shape();
        let [vertical, horizontal] = shape.bars;
        assert_eq!(vertical.center(), shape.center);
        assert_eq!(horizontal.center(), shape.center);
        assert_abs_diff_eq!(vertical.width(), SIZE / 3.0);
        assert_abs_diff_eq!(vertical.height(), SIZE);
        assert_abs_diff_eq!(horizontal.width(), SIZE);
        assert_abs_diff_eq!(horizontal.height(), SIZE / 3.0);
        assert_eq!(shape.points()[0], geometry::corners_of(vertical));
    }

    #[test]
    fn hit_test_center_and_far_away() {
        let shape = shape();
        assert!(shape.hit_test(shape.center));
        assert!(shape.hit_test(shape.center + vec2(SIZE / 2.0 - 1.0, 0.0)));
        assert!(!shape.hit_test(shape.center + vec2(SIZE + 1.0, SIZE + 1.0)));
        assert!(!shape.hit_test(shape.center - vec2(SIZE + 1.0, SIZE + 1.0)));
        // the cut-out corners of the plus are not part of it
        assert!(!shape.hit_test(shape.center + vec2(SIZE / 3.0, SIZE / 3.0)));
    }

    #[test]
    fn hit_test_ignores_rotation() {
        let mut shape = shape();
        let corner = shape.center + vec2(SIZE / 2.0 - 0.5, 0.0);
        shape.rotate(Angle::from_radians(f32::PI / 4.0));
        assert!(shape.hit_test(corner));
    }

    #[test]
    fn rotate_keeps_center_and_recomputes_from_corners() {
        let mut shape = shape();
        let original = *shape.points();
        for _ in 0..1000 {
            shape.rotate(Angle::from_radians(0.001));
        }
        shape.rotate(Angle::from_radians(-1.0));
        assert_points_eq(shape.points(), &original);
    }

    #[test]
    fn full_animation_is_a_quarter_turn() {
        const FPS: usize = 7;
        let mut shape = shape();
        let quarter = Angle::from_radians(f32::PI / 2.0);
        let expected = shape
            .points()
            .map(|bar| bar.map(|p| geometry::rotate_point(p, shape.center, quarter)));
        shape.create_background_footprint();
        assert!(shape.is_animating());
        assert_eq!(shape.rotation_count(), 0);
        for frame in 1..FPS {
            assert!(!shape.advance(FPS));
            assert_eq!(shape.rotation_count(), frame);
            assert!(shape.footprint().is_some());
        }
        assert!(shape.advance(FPS));
        assert!(!shape.is_animating());
        assert_eq!(shape.state, ShapeState::Idle);
        assert_eq!(shape.footprint(), None);
        assert_abs_diff_eq!(shape.rotation().as_radians(), f32::PI / 2.0);
        assert_points_eq(shape.points(), &expected);
    }

    #[test]
    fn four_quarter_turns_wrap() {
        let mut shape = shape();
        let original = *shape.points();
        for _ in 0..4 {
            shape.create_background_footprint();
            while !shape.advance(3) {}
        }
        assert_eq!(shape.rotation().as_radians(), 0.0);
        assert_points_eq(shape.points(), &original);
    }

    #[test]
    fn advance_when_idle_does_nothing() {
        let mut shape = shape();
        assert!(!shape.advance(30));
        assert_eq!(shape.rotation_count(), 0);
        assert_eq!(shape.rotation().as_radians(), 0.0);
    }

    #[test]
    fn footprint_is_a_shape_sized_square() {
        let mut shape = shape();
        shape.create_background_footprint();
        let footprint = shape.footprint().unwrap();
        assert_eq!(footprint.center(), shape.center);
        assert_abs_diff_eq!(footprint.width(), SIZE);
        assert_abs_diff_eq!(footprint.height(), SIZE);
    }

    #[test]
    fn draws_both_bars_and_footprint() {
        let mut shape = shape();
        let mut canvas = RecordingCanvas::default();
        shape.draw_background_footprint(&mut canvas, Rgba::BLACK);
        assert!(canvas.ops.is_empty());
        shape.draw(&mut canvas, Rgba::WHITE);
        assert_eq!(
            canvas.take(),
            vec![
                Op::Polygon(shape.points()[0].to_vec(), Rgba::WHITE),
                Op::Polygon(shape.points()[1].to_vec(), Rgba::WHITE),
            ]
        );
        shape.create_background_footprint();
        shape.draw_background_footprint(&mut canvas, Rgba::BLACK);
        assert_eq!(
            canvas.take(),
            vec![Op::Rect(shape.footprint().unwrap(), Rgba::BLACK)]
        );
    }
}
