// Host-side tests for the scene driver state machine.

mod support;

use starfield_core::*;
use support::{CountingScheduler, RecordingSurface};

fn driver(variant: Variant) -> SceneDriver<CountingScheduler> {
    SceneDriver::new(
        Scene::with_seed(variant.config(), 21),
        CountingScheduler::default(),
    )
}

#[test]
fn starts_stopped_and_draws_nothing() {
    let mut d = driver(Variant::Main);
    let mut surface = RecordingSurface::default();
    assert_eq!(d.state(), DriverState::Stopped);
    assert!(!d.tick(16.0, &mut surface, Theme::Dark));
    assert!(surface.calls.is_empty());
    assert_eq!(d.scheduler().requested, 0);
}

#[test]
fn start_schedules_and_each_tick_reschedules_once() {
    let mut d = driver(Variant::SidebarStars);
    let mut surface = RecordingSurface::default();
    d.start(Bounds::new(260.0, 700.0));
    assert_eq!(d.state(), DriverState::Running { pending: Some(1) });

    for frame in 0..5 {
        assert!(d.tick(frame as f64 * 16.0, &mut surface, Theme::Light));
    }
    assert_eq!(d.scheduler().requested, 6);
    assert_eq!(d.state(), DriverState::Running { pending: Some(6) });
    assert!(!surface.calls.is_empty());
}

#[test]
fn stop_cancels_pending_frame_and_silences_ticks() {
    let mut d = driver(Variant::Main);
    let mut surface = RecordingSurface::default();
    d.start(Bounds::new(800.0, 600.0));
    d.tick(0.0, &mut surface, Theme::Dark);
    d.stop();
    assert_eq!(d.scheduler().cancelled, vec![2]);
    assert!(!d.is_running());

    surface.calls.clear();
    for frame in 0..100 {
        assert!(!d.tick(frame as f64, &mut surface, Theme::Dark));
    }
    assert!(surface.calls.is_empty());
    assert_eq!(d.scheduler().requested, 2);
}

#[test]
fn stop_is_idempotent() {
    let mut d = driver(Variant::SidebarParticles);
    d.stop();
    d.start(Bounds::new(260.0, 700.0));
    d.stop();
    d.stop();
    assert_eq!(d.scheduler().cancelled, vec![1]);
}

#[test]
fn restart_cancels_previous_frame_and_rebuilds_population() {
    let mut d = driver(Variant::Main);
    let mut surface = RecordingSurface::default();
    d.start(Bounds::new(800.0, 600.0));
    d.scene_mut().clicked(glam::Vec2::new(10.0, 10.0));
    assert_eq!(d.scene().particles().len(), 157);

    d.start(Bounds::new(1024.0, 768.0));
    assert_eq!(d.scheduler().cancelled, vec![1]);
    assert_eq!(d.scene().particles().len(), 150);
    assert_eq!(d.scene().bounds(), Bounds::new(1024.0, 768.0));
    assert!(d.tick(0.0, &mut surface, Theme::Light));
}

#[test]
fn refused_frame_request_still_counts_as_running() {
    struct Refusing;
    impl FrameScheduler for Refusing {
        type Handle = ();
        fn request_frame(&mut self) -> Option<()> {
            None
        }
        fn cancel_frame(&mut self, _: ()) {
            panic!("nothing was scheduled");
        }
    }
    let mut d = SceneDriver::new(Scene::with_seed(SceneConfig::main_canvas(), 1), Refusing);
    d.start(Bounds::new(100.0, 100.0));
    assert_eq!(d.state(), DriverState::Running { pending: None });
    d.stop();
    assert_eq!(d.state(), DriverState::Stopped);
}
