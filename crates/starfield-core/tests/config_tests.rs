// Host-side checks for presets, constants and built-in constellation data.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::constellation::{
    ConstellationGroup, MAIN_PLACEMENTS, SIDEBAR_PLACEMENTS, TEMPLATES,
};
use starfield_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(FADE_IN_STEP > 0.0 && FADE_IN_STEP <= 1.0);
    // Recycled particles must reappear inside the tolerated margin.
    assert!(EDGE_SPAWN_INSET < RECYCLE_MARGIN);
    assert!(FAST_MOVER_ANGLE_MIN > 0.0);
    assert!(FAST_MOVER_ANGLE_MAX > FAST_MOVER_ANGLE_MIN);
    assert!(FAST_MOVER_ANGLE_MAX < std::f32::consts::FRAC_PI_2);
    assert!(MAIN_TRAIL_CAP > SIDEBAR_TRAIL_CAP);
    assert!(CONNECTION_BASE_ALPHA > 0.0 && CONNECTION_BASE_ALPHA <= 1.0);
}

#[test]
fn every_template_has_valid_lines() {
    let mut rng = StdRng::seed_from_u64(51);
    for template in TEMPLATES {
        let group =
            ConstellationGroup::from_template(template, Vec2::ZERO, Span::fixed(0.002), &mut rng)
                .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(group.points().len(), template.points.len());
        assert_eq!(group.segments().count(), template.lines.len());
    }
}

#[test]
fn placements_reference_known_templates() {
    for placement in MAIN_PLACEMENTS.iter().chain(SIDEBAR_PLACEMENTS) {
        assert!(TEMPLATES.iter().any(|t| std::ptr::eq(*t, placement.template)));
    }
    assert_eq!(MAIN_PLACEMENTS.len(), 9);
}

#[test]
fn presets_are_well_formed() {
    for variant in Variant::ALL {
        let c = variant.config();
        assert!(c.particle_count > 0, "{variant}");
        assert!((0.0..=1.0).contains(&c.fast_mover_chance), "{variant}");
        assert!(c.fade_step > 0.0 && c.fade_step <= 1.0, "{variant}");
        for profile in [c.drifter, c.fast_mover] {
            assert!(profile.radius.min > 0.0 && profile.radius.max >= profile.radius.min);
            assert!(profile.brightness.max <= 1.0);
        }
        if c.fast_mover_chance > 0.0 {
            assert!(c.trail_cap > 0, "{variant}");
        }
        if let EdgePolicy::Recycle { margin, inset } = c.edge {
            assert!(inset < margin, "{variant}");
        }
        for theme in [Theme::Light, Theme::Dark] {
            let colors = c.palette.colors(theme);
            for color in [
                colors.particle,
                colors.particle_glow,
                colors.connection,
                colors.constellation_point,
                colors.constellation_line,
            ] {
                assert!((0.0..=1.0).contains(&color.a), "{variant}");
            }
        }
    }
}

#[test]
fn only_the_main_canvas_nudges_and_bursts() {
    let main = SceneConfig::main_canvas();
    assert!(main.nudge.is_some() && main.click_burst.is_some() && main.parallax.is_some());
    let stars = SceneConfig::sidebar_stars();
    assert!(stars.nudge.is_none() && stars.click_burst.is_none() && stars.parallax.is_some());
    let dots = SceneConfig::sidebar_particles();
    assert!(dots.connections.is_some() && dots.parallax.is_none());
    assert_eq!(dots.edge, EdgePolicy::Wrap);
}

#[test]
fn presets_with_parallax_or_nudge_track_the_pointer() {
    for variant in Variant::ALL {
        let c = variant.config();
        let uses_pointer = c.parallax.is_some() || c.nudge.is_some();
        assert_eq!(c.tracks_pointer(), uses_pointer, "{variant}");
    }
    assert!(SceneConfig::sidebar_stars().tracks_pointer());
    assert!(!SceneConfig::sidebar_particles().tracks_pointer());
}
