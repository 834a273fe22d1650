//! Stopped/running state machine around a [`Scene`].
//!
//! The driver does not own a clock or a display. The host supplies a
//! [`FrameScheduler`] (requestAnimationFrame on the web), calls
//! [`SceneDriver::tick`] from each scheduled callback and passes in the
//! surface and theme for that frame.

use crate::color::Theme;
use crate::particle::Bounds;
use crate::scene::Scene;
use crate::surface::Surface;

/// Host facility that fires a callback once on the next display refresh.
pub trait FrameScheduler {
    type Handle: Copy + std::fmt::Debug;

    /// Schedule one callback; `None` when the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState<H> {
    Stopped,
    Running { pending: Option<H> },
}

pub struct SceneDriver<F: FrameScheduler> {
    scene: Scene,
    scheduler: F,
    state: DriverState<F::Handle>,
}

impl<F: FrameScheduler> SceneDriver<F> {
    pub fn new(scene: Scene, scheduler: F) -> Self {
        Self {
            scene,
            scheduler,
            state: DriverState::Stopped,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn state(&self) -> DriverState<F::Handle> {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// (Re)start: stop, rebuild the scene for `bounds`, schedule the first frame.
    pub fn start(&mut self, bounds: Bounds) {
        self.stop();
        self.scene.reset(bounds);
        let pending = self.scheduler.request_frame();
        self.state = DriverState::Running { pending };
        log::debug!("[scene] running ({}x{})", bounds.width, bounds.height);
    }

    /// Cancel the pending frame; no callback fires after this returns.
    pub fn stop(&mut self) {
        if let DriverState::Running { pending } =
            std::mem::replace(&mut self.state, DriverState::Stopped)
        {
            if let Some(handle) = pending {
                self.scheduler.cancel_frame(handle);
            }
            log::debug!("[scene] stopped");
        }
    }

    /// One frame: advance, draw, schedule the next. Returns false (and draws
    /// nothing) while stopped.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S, theme: Theme) -> bool {
        if !self.is_running() {
            return false;
        }
        self.scene.step();
        self.scene.draw(surface, theme, now_ms);
        let pending = self.scheduler.request_frame();
        self.state = DriverState::Running { pending };
        true
    }
}
