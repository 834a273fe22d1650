use crate::color::Rgba;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgba,
    pub blur: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Global alpha applied on top of `color`.
    pub alpha: f32,
    pub glow: Option<Glow>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgba,
    /// Global alpha applied on top of `color`.
    pub alpha: f32,
    pub width: f32,
}

/// 2D drawing target for a scene. Coordinates are CSS pixels.
///
/// Implementations must leave no state (alpha, shadow, line width) behind
/// between calls.
pub trait Surface {
    /// Erase everything inside `size`.
    fn clear(&mut self, size: Vec2);
    fn fill_rect(&mut self, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, circle: &Circle);
    fn stroke_line(&mut self, line: &Line);
    /// Stroke disjoint segments as a single path.
    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: Rgba, width: f32);
}
