//! Scene configuration.
//!
//! Every scene runs the same engine; what differs between the main page
//! background and the two sidebar backgrounds is captured in a
//! [`SceneConfig`]. The built-in [`Variant`]s return the presets used on the
//! site.

use crate::color::{Palette, Rgba, ThemeColors};
use crate::constants::*;
use crate::constellation::{Placement, MAIN_PLACEMENTS, SIDEBAR_PLACEMENTS};
use crate::error::VariantError;
use crate::particle::Bounds;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

/// Closed-open sampling range. A degenerate span always yields `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max > self.min {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VelocityProfile {
    /// Independent speed per axis, in px per frame.
    Drift { x: Span, y: Span },
    /// Heading in radians (0 = right, positive turns towards screen-up) and speed.
    Angled { angle: Span, speed: Span },
}

impl VelocityProfile {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        match *self {
            VelocityProfile::Drift { x, y } => Vec2::new(x.sample(rng), y.sample(rng)),
            VelocityProfile::Angled { angle, speed } => {
                heading(angle.sample(rng), speed.sample(rng))
            }
        }
    }
}

/// Screen-space velocity for a heading measured counter-clockwise from +x.
#[inline]
pub fn heading(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos() * speed, -angle.sin() * speed)
}

/// Per-kind ranges used whenever a particle is created or recycled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KindProfile {
    pub radius: Span,
    pub velocity: VelocityProfile,
    /// Velocity drawn on recycle; `None` reuses `velocity`.
    pub respawn_velocity: Option<VelocityProfile>,
    /// Peak alpha multiplier once fully faded in.
    pub brightness: Span,
}

impl KindProfile {
    pub fn respawn_velocity(&self) -> VelocityProfile {
        self.respawn_velocity.unwrap_or(self.velocity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgePolicy {
    /// Leaving the bounds (plus `margin`) respawns the particle `inset` px
    /// outside a random edge with fresh properties.
    Recycle { margin: f32, inset: f32 },
    /// Coordinates past an edge jump to the opposite edge.
    Wrap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TwinkleStyle {
    /// Radius grows by up to `amount` (fraction) with `|sin|` of the twinkle wave.
    Radius { amount: f32 },
    /// Alpha follows `0.5 + 0.5 * sin` of the twinkle wave.
    Pulse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionStyle {
    pub threshold: f32,
    pub base_alpha: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstellationStyle {
    pub point_radius: f32,
    pub point_amplitude: f32,
    pub glow_blur: f32,
    pub line_width: f32,
    pub twinkle_speed: Span,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FastMoverStyle {
    pub glow_blur: f32,
    /// Alpha of the newest trail segment.
    pub trail_alpha: f32,
    /// Trail segment width per unit of segment alpha.
    pub trail_width: f32,
}

/// Draw-time offset following the pointer; never touches simulation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub constellation_span: f32,
    pub fast_mover_span: f32,
}

/// Shifts every particle's true position on each pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerNudge {
    pub span: f32,
    pub fraction: f32,
}

impl PointerNudge {
    pub fn delta(&self, pointer: Vec2, bounds: Bounds) -> Vec2 {
        pointer_offset(pointer, bounds, self.span) * self.fraction
    }
}

/// `(pointer / size - 0.5) * span`, or zero for an empty surface.
pub fn pointer_offset(pointer: Vec2, bounds: Bounds, span: f32) -> Vec2 {
    if bounds.is_empty() {
        return Vec2::ZERO;
    }
    (pointer / bounds.size() - Vec2::splat(0.5)) * span
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickBurst {
    pub count: usize,
    pub radius: Span,
    pub speed: Span,
    pub angle: Span,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    Clear,
    /// Translucent fill that leaves a short afterglow of the previous frame.
    Overlay(Rgba),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub fast_mover_chance: f64,
    pub drifter: KindProfile,
    pub fast_mover: KindProfile,
    pub fast_mover_style: FastMoverStyle,
    pub trail_cap: usize,
    pub fade_step: f32,
    pub edge: EdgePolicy,
    pub twinkle: TwinkleStyle,
    pub twinkle_speed: Span,
    /// Glow blur per px of radius for normal particles.
    pub drifter_glow: Option<f32>,
    pub connections: Option<ConnectionStyle>,
    pub constellations: &'static [Placement],
    pub constellation_style: ConstellationStyle,
    pub parallax: Option<Parallax>,
    pub nudge: Option<PointerNudge>,
    pub click_burst: Option<ClickBurst>,
    pub backdrop: Backdrop,
    pub palette: Palette,
}

const WHITE: Rgba = Rgba::WHITE;

const fn white(a: f32) -> Rgba {
    Rgba::new(255, 255, 255, a)
}

const FAST_MOVER_HEADING: Span = Span::new(FAST_MOVER_ANGLE_MIN, FAST_MOVER_ANGLE_MAX);

impl SceneConfig {
    /// Whether the host should forward pointer moves (for nudge or parallax).
    pub fn tracks_pointer(&self) -> bool {
        self.nudge.is_some() || self.parallax.is_some()
    }

    /// Full-page starfield with constellations, shooting stars and click bursts.
    pub fn main_canvas() -> Self {
        Self {
            particle_count: 150,
            fast_mover_chance: 0.08,
            drifter: KindProfile {
                radius: Span::new(0.5, 1.5),
                velocity: VelocityProfile::Drift {
                    x: Span::new(0.5, 1.0),
                    y: Span::new(-1.0, -0.5),
                },
                // Recycled stars come back a little quicker.
                respawn_velocity: Some(VelocityProfile::Drift {
                    x: Span::new(0.5, 1.5),
                    y: Span::new(-1.5, -0.5),
                }),
                brightness: Span::fixed(1.0),
            },
            fast_mover: KindProfile {
                radius: Span::new(1.0, 2.5),
                velocity: VelocityProfile::Angled {
                    angle: FAST_MOVER_HEADING,
                    speed: Span::new(3.0, 7.0),
                },
                respawn_velocity: None,
                brightness: Span::fixed(1.0),
            },
            fast_mover_style: FastMoverStyle {
                glow_blur: 10.0,
                trail_alpha: 0.8,
                trail_width: 3.0,
            },
            trail_cap: MAIN_TRAIL_CAP,
            fade_step: FADE_IN_STEP,
            edge: EdgePolicy::Recycle {
                margin: RECYCLE_MARGIN,
                inset: EDGE_SPAWN_INSET,
            },
            twinkle: TwinkleStyle::Radius { amount: 0.3 },
            twinkle_speed: Span::new(
                TWINKLE_SPEED_MIN,
                TWINKLE_SPEED_MIN + TWINKLE_SPEED_STAR_JITTER,
            ),
            drifter_glow: None,
            connections: None,
            constellations: MAIN_PLACEMENTS,
            constellation_style: ConstellationStyle {
                point_radius: 2.0,
                point_amplitude: 1.0,
                glow_blur: 8.0,
                line_width: 1.0,
                twinkle_speed: Span::new(
                    TWINKLE_SPEED_MIN,
                    TWINKLE_SPEED_MIN + TWINKLE_SPEED_POINT_JITTER,
                ),
            },
            parallax: Some(Parallax {
                constellation_span: 10.0,
                fast_mover_span: 5.0,
            }),
            nudge: Some(PointerNudge {
                span: 10.0,
                fraction: 0.1,
            }),
            click_burst: Some(ClickBurst {
                count: CLICK_BURST_COUNT,
                radius: Span::new(1.0, 2.0),
                speed: Span::new(0.5, 1.0),
                angle: Span::new(0.0, FRAC_PI_2),
            }),
            backdrop: Backdrop::Overlay(Rgba::new(23, 23, 23, 0.4)),
            palette: Palette::fixed(ThemeColors {
                particle: WHITE,
                particle_glow: WHITE,
                connection: WHITE,
                constellation_point: WHITE,
                constellation_line: white(0.5),
            }),
        }
    }

    /// Sparser, slower starfield for the sidebar, with size-gated constellations.
    pub fn sidebar_stars() -> Self {
        Self {
            particle_count: 75,
            fast_mover_chance: 0.05,
            drifter: KindProfile {
                radius: Span::new(0.3, 1.1),
                velocity: VelocityProfile::Drift {
                    x: Span::new(0.3, 0.6),
                    y: Span::new(-0.6, -0.3),
                },
                respawn_velocity: None,
                brightness: Span::fixed(1.0),
            },
            fast_mover: KindProfile {
                radius: Span::new(0.5, 1.5),
                velocity: VelocityProfile::Angled {
                    angle: FAST_MOVER_HEADING,
                    speed: Span::new(2.0, 4.0),
                },
                respawn_velocity: None,
                brightness: Span::fixed(1.0),
            },
            fast_mover_style: FastMoverStyle {
                glow_blur: 6.0,
                trail_alpha: 0.6,
                trail_width: 2.0,
            },
            trail_cap: SIDEBAR_TRAIL_CAP,
            fade_step: FADE_IN_STEP,
            edge: EdgePolicy::Recycle {
                margin: RECYCLE_MARGIN,
                inset: EDGE_SPAWN_INSET,
            },
            twinkle: TwinkleStyle::Radius { amount: 0.2 },
            twinkle_speed: Span::new(
                TWINKLE_SPEED_MIN,
                TWINKLE_SPEED_MIN + TWINKLE_SPEED_STAR_JITTER,
            ),
            drifter_glow: None,
            connections: None,
            constellations: SIDEBAR_PLACEMENTS,
            constellation_style: ConstellationStyle {
                point_radius: 1.5,
                point_amplitude: 0.5,
                glow_blur: 4.0,
                line_width: 1.0,
                twinkle_speed: Span::new(
                    TWINKLE_SPEED_MIN,
                    TWINKLE_SPEED_MIN + TWINKLE_SPEED_POINT_JITTER,
                ),
            },
            parallax: Some(Parallax {
                constellation_span: 3.0,
                fast_mover_span: 2.0,
            }),
            nudge: None,
            click_burst: None,
            backdrop: Backdrop::Clear,
            palette: Palette {
                light: ThemeColors {
                    particle: white(0.8),
                    particle_glow: WHITE,
                    connection: WHITE,
                    constellation_point: white(0.8),
                    constellation_line: white(0.4),
                },
                dark: ThemeColors {
                    particle: white(0.9),
                    particle_glow: WHITE,
                    connection: WHITE,
                    constellation_point: white(0.6),
                    constellation_line: white(0.3),
                },
            },
        }
    }

    /// Wrapping, pulsing dots joined by distance-faded lines.
    pub fn sidebar_particles() -> Self {
        let drift = Span::new(-0.4, 0.4);
        let drifter = KindProfile {
            radius: Span::new(0.5, 2.0),
            velocity: VelocityProfile::Drift { x: drift, y: drift },
            respawn_velocity: None,
            brightness: Span::new(0.1, 0.5),
        };
        Self {
            particle_count: 100,
            fast_mover_chance: 0.0,
            drifter,
            fast_mover: drifter,
            fast_mover_style: FastMoverStyle {
                glow_blur: 0.0,
                trail_alpha: 0.0,
                trail_width: 0.0,
            },
            trail_cap: 0,
            // These dots have no fade-in; they show at full brightness immediately.
            fade_step: 1.0,
            edge: EdgePolicy::Wrap,
            twinkle: TwinkleStyle::Pulse,
            // 0.01..0.03 rad per frame at 60 Hz
            twinkle_speed: Span::new(0.0006, 0.0018),
            drifter_glow: Some(2.0),
            connections: Some(ConnectionStyle {
                threshold: CONNECTION_THRESHOLD_PX,
                base_alpha: CONNECTION_BASE_ALPHA,
                width: 1.0,
            }),
            constellations: &[],
            constellation_style: ConstellationStyle {
                point_radius: 0.0,
                point_amplitude: 0.0,
                glow_blur: 0.0,
                line_width: 0.0,
                twinkle_speed: Span::fixed(0.0),
            },
            parallax: None,
            nudge: None,
            click_burst: None,
            backdrop: Backdrop::Clear,
            palette: Palette {
                light: ThemeColors {
                    particle: white(0.8),
                    particle_glow: white(0.5),
                    connection: white(0.2),
                    constellation_point: WHITE,
                    constellation_line: WHITE,
                },
                dark: ThemeColors {
                    particle: white(0.6),
                    particle_glow: white(0.3),
                    connection: white(0.1),
                    constellation_point: WHITE,
                    constellation_line: WHITE,
                },
            },
        }
    }
}

/// Named presets for the scenes mounted on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Main,
    SidebarStars,
    SidebarParticles,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::Main,
        Variant::SidebarStars,
        Variant::SidebarParticles,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Main => "main",
            Variant::SidebarStars => "sidebar-stars",
            Variant::SidebarParticles => "sidebar-particles",
        }
    }

    pub fn config(self) -> SceneConfig {
        match self {
            Variant::Main => SceneConfig::main_canvas(),
            Variant::SidebarStars => SceneConfig::sidebar_stars(),
            Variant::SidebarParticles => SceneConfig::sidebar_particles(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| VariantError::Unknown(s.to_owned()))
    }
}
