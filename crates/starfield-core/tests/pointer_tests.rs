// Host-side tests for pointer parallax, pointer nudge and click bursts.

mod support;

use glam::Vec2;
use starfield_core::*;
use support::RecordingSurface;

fn positions(scene: &Scene) -> Vec<Vec2> {
    scene.particles().iter().map(|p| p.pos).collect()
}

#[test]
fn nudge_moves_true_positions_by_fraction_of_pointer_offset() {
    let mut scene = Scene::with_seed(SceneConfig::main_canvas(), 41);
    scene.reset(Bounds::new(800.0, 600.0));
    let before = positions(&scene);

    // Bottom-right corner: offset (0.5 * 10) scaled by 0.1.
    scene.pointer_moved(Vec2::new(800.0, 600.0));
    for (a, b) in before.iter().zip(positions(&scene)) {
        assert!((b - *a - Vec2::splat(0.5)).length() < 1e-4);
    }

    // Centre: no shift at all.
    let before = positions(&scene);
    scene.pointer_moved(Vec2::new(400.0, 300.0));
    assert_eq!(before, positions(&scene));
}

#[test]
fn parallax_only_offsets_rendering() {
    let bounds = Bounds::new(260.0, 700.0);
    let mut scene = Scene::with_seed(SceneConfig::sidebar_stars(), 42);
    scene.reset(bounds);
    assert_eq!(scene.constellations().len(), 2);
    let before = positions(&scene);

    scene.pointer_moved(Vec2::new(130.0, 350.0));
    let mut centred = RecordingSurface::default();
    scene.draw(&mut centred, Theme::Dark, 0.0);

    scene.pointer_moved(Vec2::new(260.0, 700.0));
    let mut cornered = RecordingSurface::default();
    scene.draw(&mut cornered, Theme::Dark, 0.0);

    assert_eq!(before, positions(&scene), "parallax must not move particles");

    let first_point = scene.constellations()[0].points()[0].pos;
    let centred_first = centred.circles().next().map(|c| c.center);
    let cornered_first = cornered.circles().next().map(|c| c.center);
    assert_eq!(centred_first, Some(first_point));
    // Constellation span is 3 px: half of it at the far corner.
    assert_eq!(cornered_first, Some(first_point + Vec2::splat(1.5)));
}

#[test]
fn drifters_ignore_parallax() {
    let mut config = SceneConfig::sidebar_stars();
    config.fast_mover_chance = 0.0;
    config.constellations = &[];
    let mut scene = Scene::with_seed(config, 43);
    scene.reset(Bounds::new(260.0, 700.0));
    scene.pointer_moved(Vec2::new(260.0, 700.0));
    let mut surface = RecordingSurface::default();
    scene.draw(&mut surface, Theme::Light, 0.0);
    let centers: Vec<Vec2> = surface.circles().map(|c| c.center).collect();
    assert_eq!(centers, positions(&scene));
}

#[test]
fn click_burst_appends_particles_at_pointer() {
    let mut scene = Scene::with_seed(SceneConfig::main_canvas(), 44);
    scene.reset(Bounds::new(800.0, 600.0));
    let at = Vec2::new(320.0, 240.0);

    assert_eq!(scene.clicked(at), CLICK_BURST_COUNT);
    assert_eq!(scene.clicked(at), CLICK_BURST_COUNT);
    assert_eq!(scene.particles().len(), 150 + 2 * CLICK_BURST_COUNT);

    for p in &scene.particles()[150..] {
        assert_eq!(p.pos, at);
        assert_eq!(p.kind, ParticleKind::Drifter);
        assert_eq!(p.opacity, 0.0);
        assert!(p.vel.x >= 0.0 && p.vel.y <= 0.0, "burst heads up and right");
        assert!((0.499..=1.001).contains(&p.vel.length()));
    }
}

#[test]
fn sidebars_ignore_clicks() {
    for config in [SceneConfig::sidebar_stars(), SceneConfig::sidebar_particles()] {
        let mut scene = Scene::with_seed(config, 45);
        scene.reset(Bounds::new(260.0, 700.0));
        let count = scene.particles().len();
        assert_eq!(scene.clicked(Vec2::new(10.0, 10.0)), 0);
        assert_eq!(scene.particles().len(), count);
    }
}
