//! Per-instance scene state and the per-frame update/draw passes.

use crate::color::{Rgba, Theme, ThemeColors};
use crate::config::{pointer_offset, Backdrop, Parallax, SceneConfig, TwinkleStyle};
use crate::connection::connections;
use crate::constellation::ConstellationGroup;
use crate::particle::{Advance, Bounds, Particle};
use crate::surface::{Circle, Glow, Line, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

/// Counters from one simulation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub recycled: usize,
    pub wrapped: usize,
}

pub struct Scene {
    config: SceneConfig,
    bounds: Bounds,
    pointer: Vec2,
    particles: Vec<Particle>,
    constellations: Vec<ConstellationGroup>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig, rng: StdRng) -> Self {
        Self {
            config,
            bounds: Bounds::default(),
            pointer: Vec2::ZERO,
            particles: Vec::new(),
            constellations: Vec::new(),
            rng,
        }
    }

    pub fn with_seed(config: SceneConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view for repositioning; the population itself cannot shrink.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn constellations(&self) -> &[ConstellationGroup] {
        &self.constellations
    }

    /// Rebuild particles and constellations for a (possibly new) surface size.
    pub fn reset(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.particles.clear();
        self.particles.reserve(self.config.particle_count);
        for _ in 0..self.config.particle_count {
            let p = Particle::spawn(&self.config, bounds, &mut self.rng);
            self.particles.push(p);
        }

        self.constellations.clear();
        let style = self.config.constellation_style;
        let placements = self.config.constellations;
        for placement in placements {
            if !placement.is_visible(bounds) {
                continue;
            }
            match ConstellationGroup::from_template(
                placement.template,
                placement.offset(bounds),
                style.twinkle_speed,
                &mut self.rng,
            ) {
                Ok(group) => self.constellations.push(group),
                Err(e) => log::warn!("[scene] skipping constellation: {}", e),
            }
        }
        log::debug!(
            "[scene] reset {}x{} particles={} constellations={}",
            bounds.width,
            bounds.height,
            self.particles.len(),
            self.constellations.len()
        );
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) -> StepStats {
        let mut stats = StepStats::default();
        for p in &mut self.particles {
            match p.advance(&self.config, self.bounds, &mut self.rng) {
                Advance::Moved => {}
                Advance::Wrapped => stats.wrapped += 1,
                Advance::Recycled(_) => stats.recycled += 1,
            }
        }
        stats
    }

    /// Record the pointer for parallax and apply the nudge, if configured.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
        if let Some(nudge) = self.config.nudge {
            let delta = nudge.delta(pos, self.bounds);
            for p in &mut self.particles {
                p.nudge(delta);
            }
        }
    }

    /// Append a click burst at `pos`; returns how many particles were added.
    pub fn clicked(&mut self, pos: Vec2) -> usize {
        let Some(burst) = self.config.click_burst else {
            return 0;
        };
        for _ in 0..burst.count {
            let p = Particle::burst(&burst, self.config.twinkle_speed, pos, &mut self.rng);
            self.particles.push(p);
        }
        burst.count
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, theme: Theme, now_ms: f64) {
        let colors = self.config.palette.colors(theme);
        let size = self.bounds.size();
        match self.config.backdrop {
            Backdrop::Clear => surface.clear(size),
            Backdrop::Overlay(color) => surface.fill_rect(size, color),
        }
        self.draw_constellations(surface, colors, now_ms);
        self.draw_connections(surface, colors);
        self.draw_particles(surface, colors, now_ms);
    }

    fn parallax(&self, span: impl Fn(&Parallax) -> f32) -> Vec2 {
        match &self.config.parallax {
            Some(p) => pointer_offset(self.pointer, self.bounds, span(p)),
            None => Vec2::ZERO,
        }
    }

    fn draw_constellations<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        colors: &ThemeColors,
        now_ms: f64,
    ) {
        let style = &self.config.constellation_style;
        let offset = self.parallax(|p| p.constellation_span);
        for group in &self.constellations {
            for point in group.points() {
                surface.fill_circle(&Circle {
                    center: point.pos + offset,
                    radius: style.point_radius + point.twinkle.wave(now_ms) * style.point_amplitude,
                    color: colors.constellation_point,
                    alpha: 1.0,
                    glow: Some(Glow {
                        color: colors.constellation_point,
                        blur: style.glow_blur,
                    }),
                });
            }
            let segments: SmallVec<[(Vec2, Vec2); 24]> = group
                .segments()
                .map(|(a, b)| (a + offset, b + offset))
                .collect();
            surface.stroke_segments(&segments, colors.constellation_line, style.line_width);
        }
    }

    fn draw_connections<S: Surface + ?Sized>(&self, surface: &mut S, colors: &ThemeColors) {
        let Some(style) = self.config.connections else {
            return;
        };
        let points: Vec<Vec2> = self.particles.iter().map(|p| p.pos).collect();
        for c in connections(&points, style.threshold, style.base_alpha) {
            surface.stroke_line(&Line {
                from: points[c.a],
                to: points[c.b],
                color: colors.connection,
                alpha: c.alpha,
                width: style.width,
            });
        }
    }

    fn draw_particles<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        colors: &ThemeColors,
        now_ms: f64,
    ) {
        let fast = &self.config.fast_mover_style;
        let fast_offset = self.parallax(|p| p.fast_mover_span);
        for p in &self.particles {
            let offset = if p.is_fast_mover() {
                fast_offset
            } else {
                Vec2::ZERO
            };

            let trail = p.trail();
            if p.is_fast_mover() && trail.len() > 1 {
                let len = trail.len() as f32;
                for (i, (a, b)) in trail.iter().zip(trail.iter().skip(1)).enumerate() {
                    let alpha = i as f32 / len * fast.trail_alpha;
                    if alpha <= 0.0 {
                        continue;
                    }
                    surface.stroke_line(&Line {
                        from: *a + offset,
                        to: *b + offset,
                        color: Rgba::WHITE.with_alpha(alpha),
                        alpha: 1.0,
                        width: alpha * fast.trail_width,
                    });
                }
            }

            let wave = p.twinkle.wave(now_ms);
            let (radius, alpha) = match self.config.twinkle {
                TwinkleStyle::Radius { amount } => {
                    (p.radius * (1.0 + wave.abs() * amount), p.opacity * p.brightness)
                }
                TwinkleStyle::Pulse => (p.radius, p.opacity * p.brightness * (0.5 + 0.5 * wave)),
            };
            let glow = if p.is_fast_mover() {
                Some(Glow {
                    color: Rgba::WHITE,
                    blur: fast.glow_blur,
                })
            } else {
                self.config.drifter_glow.map(|k| Glow {
                    color: colors.particle_glow,
                    blur: p.radius * k,
                })
            };
            surface.fill_circle(&Circle {
                center: p.pos + offset,
                radius,
                color: colors.particle,
                alpha: alpha.clamp(0.0, 1.0),
                glow,
            });
        }
    }
}
