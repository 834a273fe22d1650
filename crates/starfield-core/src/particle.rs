use crate::config::{heading, ClickBurst, EdgePolicy, KindProfile, SceneConfig, Span};
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;

/// Drawable area in CSS pixels, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether `p` lies inside the bounds grown by `margin` on every side.
    #[inline]
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x >= -margin
            && p.x <= self.width + margin
            && p.y >= -margin
            && p.y <= self.height + margin
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Random point on the line `inset` px outside this edge.
    pub fn spawn_point<R: Rng + ?Sized>(self, bounds: Bounds, inset: f32, rng: &mut R) -> Vec2 {
        let along_x = Span::new(0.0, bounds.width).sample(rng);
        let along_y = Span::new(0.0, bounds.height).sample(rng);
        match self {
            Edge::Top => Vec2::new(along_x, -inset),
            Edge::Right => Vec2::new(bounds.width + inset, along_y),
            Edge::Bottom => Vec2::new(along_x, bounds.height + inset),
            Edge::Left => Vec2::new(-inset, along_y),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    Drifter,
    FastMover,
}

/// Phase and angular speed (radians per millisecond) of a periodic shimmer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Twinkle {
    pub phase: f32,
    pub speed: f32,
}

impl Twinkle {
    pub fn random<R: Rng + ?Sized>(speed: Span, rng: &mut R) -> Self {
        Self {
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            speed: speed.sample(rng),
        }
    }

    /// `sin(t * speed + phase)` for a timestamp in milliseconds.
    #[inline]
    pub fn wave(&self, now_ms: f64) -> f32 {
        (now_ms * self.speed as f64 + self.phase as f64).sin() as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved,
    Wrapped,
    Recycled(Edge),
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub fading_in: bool,
    pub kind: ParticleKind,
    pub brightness: f32,
    pub twinkle: Twinkle,
    trail: VecDeque<Vec2>,
}

impl Particle {
    /// Fully specified particle at the start of its fade-in.
    pub fn new(pos: Vec2, vel: Vec2, kind: ParticleKind) -> Self {
        Self {
            pos,
            vel,
            radius: 1.0,
            opacity: 0.0,
            fading_in: true,
            kind,
            brightness: 1.0,
            twinkle: Twinkle::default(),
            trail: VecDeque::new(),
        }
    }

    /// Initial population member: random kind, anywhere inside the bounds.
    pub fn spawn<R: Rng + ?Sized>(config: &SceneConfig, bounds: Bounds, rng: &mut R) -> Self {
        let kind = if rng.gen_bool(config.fast_mover_chance.clamp(0.0, 1.0)) {
            ParticleKind::FastMover
        } else {
            ParticleKind::Drifter
        };
        let profile = profile_for(config, kind);
        let pos = Vec2::new(
            Span::new(0.0, bounds.width).sample(rng),
            Span::new(0.0, bounds.height).sample(rng),
        );
        Self {
            radius: profile.radius.sample(rng),
            brightness: profile.brightness.sample(rng),
            twinkle: Twinkle::random(config.twinkle_speed, rng),
            ..Self::new(pos, profile.velocity.sample(rng), kind)
        }
    }

    /// One particle of a pointer-click burst, leaving `at` up and to the right.
    pub fn burst<R: Rng + ?Sized>(
        burst: &ClickBurst,
        twinkle_speed: Span,
        at: Vec2,
        rng: &mut R,
    ) -> Self {
        let vel = heading(burst.angle.sample(rng), burst.speed.sample(rng));
        Self {
            radius: burst.radius.sample(rng),
            twinkle: Twinkle::random(twinkle_speed, rng),
            ..Self::new(at, vel, ParticleKind::Drifter)
        }
    }

    pub fn trail(&self) -> &VecDeque<Vec2> {
        &self.trail
    }

    pub fn is_fast_mover(&self) -> bool {
        self.kind == ParticleKind::FastMover
    }

    /// One frame of motion, trail bookkeeping, fade-in and edge handling.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        config: &SceneConfig,
        bounds: Bounds,
        rng: &mut R,
    ) -> Advance {
        self.pos += self.vel;

        if self.is_fast_mover() {
            self.trail.push_back(self.pos);
            while self.trail.len() > config.trail_cap {
                self.trail.pop_front();
            }
        }

        if self.fading_in && self.opacity < 1.0 {
            self.opacity = (self.opacity + config.fade_step).min(1.0);
        } else {
            self.opacity = 1.0;
            self.fading_in = false;
        }

        match config.edge {
            EdgePolicy::Recycle { margin, inset } => {
                if bounds.contains_with_margin(self.pos, margin) {
                    Advance::Moved
                } else {
                    Advance::Recycled(self.recycle(config, bounds, inset, rng))
                }
            }
            EdgePolicy::Wrap => {
                if self.wrap(bounds) {
                    Advance::Wrapped
                } else {
                    Advance::Moved
                }
            }
        }
    }

    /// Shift the true position, as the pointer nudge does.
    pub fn nudge(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    fn recycle<R: Rng + ?Sized>(
        &mut self,
        config: &SceneConfig,
        bounds: Bounds,
        inset: f32,
        rng: &mut R,
    ) -> Edge {
        let edge = Edge::random(rng);
        let profile = profile_for(config, self.kind);
        self.pos = edge.spawn_point(bounds, inset, rng);
        self.vel = profile.respawn_velocity().sample(rng);
        self.radius = profile.radius.sample(rng);
        self.opacity = 0.0;
        self.fading_in = true;
        self.trail.clear();
        edge
    }

    fn wrap(&mut self, bounds: Bounds) -> bool {
        let before = self.pos;
        if self.pos.x > bounds.width {
            self.pos.x = 0.0;
        } else if self.pos.x < 0.0 {
            self.pos.x = bounds.width;
        }
        if self.pos.y > bounds.height {
            self.pos.y = 0.0;
        } else if self.pos.y < 0.0 {
            self.pos.y = bounds.height;
        }
        self.pos != before
    }
}

fn profile_for(config: &SceneConfig, kind: ParticleKind) -> &KindProfile {
    match kind {
        ParticleKind::Drifter => &config.drifter,
        ParticleKind::FastMover => &config.fast_mover,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wrap_jumps_to_opposite_edge_without_resetting() {
        let config = SceneConfig::sidebar_particles();
        let bounds = Bounds::new(100.0, 100.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::new(Vec2::new(99.9, 50.0), Vec2::new(0.3, 0.0), ParticleKind::Drifter);
        p.opacity = 1.0;
        p.fading_in = false;
        assert_eq!(p.advance(&config, bounds, &mut rng), Advance::Wrapped);
        assert_eq!(p.pos, Vec2::new(0.0, 50.0));
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn drifters_never_record_a_trail() {
        let config = SceneConfig::main_canvas();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(4);
        let mut p = Particle::new(Vec2::new(10.0, 300.0), Vec2::new(1.0, 0.0), ParticleKind::Drifter);
        for _ in 0..50 {
            p.advance(&config, bounds, &mut rng);
        }
        assert!(p.trail().is_empty());
    }

    #[test]
    fn fade_in_reaches_one_then_holds() {
        let config = SceneConfig::main_canvas();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::new(Vec2::new(400.0, 300.0), Vec2::ZERO, ParticleKind::Drifter);
        for _ in 0..60 {
            p.advance(&config, bounds, &mut rng);
        }
        assert_eq!(p.opacity, 1.0);
        assert!(!p.fading_in);
        p.advance(&config, bounds, &mut rng);
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn spawn_points_sit_on_their_edge_line() {
        let bounds = Bounds::new(320.0, 240.0);
        let mut rng = StdRng::seed_from_u64(6);
        for edge in Edge::ALL {
            let p = edge.spawn_point(bounds, 10.0, &mut rng);
            match edge {
                Edge::Top => assert_eq!(p.y, -10.0),
                Edge::Right => assert_eq!(p.x, 330.0),
                Edge::Bottom => assert_eq!(p.y, 250.0),
                Edge::Left => assert_eq!(p.x, -10.0),
            }
        }
    }
}
