use crate::canvas::CanvasSurface;
use crate::dom;
use starfield_core::{FrameScheduler, SceneDriver};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The requestAnimationFrame callback, shared between the scheduler that
/// re-arms it and the handle that drops it on teardown.
pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct RafScheduler {
    window: web::Window,
    callback: FrameSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, callback: FrameSlot) -> Self {
        Self { window, callback }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let slot = self.callback.borrow();
        let cb = slot.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("[frame] cancelAnimationFrame({}) failed: {:?}", handle, e);
        }
    }
}

/// Everything a frame needs: the driver, where to draw and where the theme lives.
pub struct FrameContext {
    pub driver: SceneDriver<RafScheduler>,
    pub surface: CanvasSurface,
    pub container: web::HtmlElement,
    pub document: web::Document,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let theme = dom::read_theme(&self.document);
        self.driver.tick(now_ms, &mut self.surface, theme);
    }

    /// Re-measure the container and start over with a fresh population.
    pub fn restart(&mut self) {
        let bounds = self.surface.fit_to(&self.container);
        self.driver.start(bounds);
    }
}

/// Fill `slot` with the per-frame callback. The callback holds only a weak
/// reference, so dropping the context ends the loop.
pub fn install_frame_callback(frame_ctx: &Rc<RefCell<FrameContext>>, slot: &FrameSlot) {
    let weak = Rc::downgrade(frame_ctx);
    let tick = Closure::wrap(Box::new(move |now_ms: f64| {
        if let Some(ctx) = weak.upgrade() {
            ctx.borrow_mut().frame(now_ms);
        }
    }) as Box<dyn FnMut(f64)>);
    *slot.borrow_mut() = Some(tick);
}
