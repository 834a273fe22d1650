// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]
use glam::Vec2;
use starfield_core::{Circle, FrameScheduler, Line, Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(Vec2),
    FillRect(Vec2, Rgba),
    Circle(Circle),
    Line(Line),
    Segments(Vec<(Vec2, Vec2)>, Rgba, f32),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn circles(&self) -> impl Iterator<Item = &Circle> {
        self.calls.iter().filter_map(|c| match c {
            Call::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.calls.iter().filter_map(|c| match c {
            Call::Line(line) => Some(line),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        self.calls.push(Call::Clear(size));
    }
    fn fill_rect(&mut self, size: Vec2, color: Rgba) {
        self.calls.push(Call::FillRect(size, color));
    }
    fn fill_circle(&mut self, circle: &Circle) {
        self.calls.push(Call::Circle(*circle));
    }
    fn stroke_line(&mut self, line: &Line) {
        self.calls.push(Call::Line(*line));
    }
    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: Rgba, width: f32) {
        self.calls.push(Call::Segments(segments.to_vec(), color, width));
    }
}

/// Hands out increasing handles and remembers which were cancelled.
#[derive(Default)]
pub struct CountingScheduler {
    pub requested: u32,
    pub cancelled: Vec<u32>,
}

impl FrameScheduler for CountingScheduler {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.requested += 1;
        Some(self.requested)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}
