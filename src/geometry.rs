use super::*;

/// Rotates `point` around `pivot` by `theta`
pub fn rotate_point(point: vec2<f32>, pivot: vec2<f32>, theta: Angle<f32>) -> vec2<f32> {
    pivot + (point - pivot).rotate(theta)
}

/// Corners in screen order (y grows down): top-left, bottom-left, bottom-right, top-right.
///
/// This is the winding the filled polygon draw relies on.
pub fn corners_of(rect: Aabb2<f32>) -> [vec2<f32>; 4] {
    [
        vec2(rect.min.x, rect.min.y),
        vec2(rect.min.x, rect.max.y),
        vec2(rect.max.x, rect.max.y),
        vec2(rect.max.x, rect.min.y),
    ]
}

/// Axis-aligned rectangle of `size` centered on `center`
pub fn centered_rect(center: vec2<f32>, size: vec2<f32>) -> Aabb2<f32> {
    Aabb2::point(center).extend_symmetric(size / 2.0)
}
