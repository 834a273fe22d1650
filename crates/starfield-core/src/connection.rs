//! Distance-faded connection lines between nearby points.
//!
//! Brute force over every unordered pair; scenes hold tens to low hundreds of
//! particles so the quadratic pass stays cheap.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Linear falloff: `base_alpha` at distance 0, zero at and beyond `threshold`.
#[inline]
pub fn falloff_alpha(distance: f32, threshold: f32, base_alpha: f32) -> f32 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    (threshold - distance) / threshold * base_alpha
}

/// Every pair `a < b` closer than `threshold`, with its line alpha.
pub fn connections(
    points: &[Vec2],
    threshold: f32,
    base_alpha: f32,
) -> impl Iterator<Item = Connection> + '_ {
    (0..points.len()).flat_map(move |a| {
        ((a + 1)..points.len()).filter_map(move |b| {
            let alpha = falloff_alpha(points[a].distance(points[b]), threshold, base_alpha);
            (alpha > 0.0).then_some(Connection { a, b, alpha })
        })
    })
}
