use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom::js_err;
use crate::frame::FrameContext;
use crate::input;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event listener that detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Coalesces bursts of resize events into one restart.
pub struct ResizeDebounce {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    fire: Closure<dyn FnMut()>,
}

impl ResizeDebounce {
    pub fn new(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) -> Self {
        let pending = Rc::new(Cell::new(None));
        let pending_fire = pending.clone();
        let weak = Rc::downgrade(frame_ctx);
        let fire = Closure::wrap(Box::new(move || {
            pending_fire.set(None);
            if let Some(ctx) = weak.upgrade() {
                log::debug!("[events] resize settled; restarting");
                ctx.borrow_mut().restart();
            }
        }) as Box<dyn FnMut()>);
        Self {
            window: window.clone(),
            pending,
            fire,
        }
    }

    /// Push the restart back by the debounce interval.
    pub fn arm(&self) {
        self.cancel();
        let callback: &js_sys::Function = self.fire.as_ref().unchecked_ref();
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, RESIZE_DEBOUNCE_MS)
        {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => log::warn!("[events] setTimeout failed: {:?}", e),
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

pub fn on_resize(window: &web::Window, debounce: &Rc<ResizeDebounce>) -> anyhow::Result<Listener> {
    let debounce = debounce.clone();
    Listener::attach(window, "resize", move |_| debounce.arm())
}

/// Stop while the tab is hidden; start over when it is shown again.
pub fn on_visibility_change(
    document: &web::Document,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    let weak = Rc::downgrade(frame_ctx);
    let doc = document.clone();
    Listener::attach(document, "visibilitychange", move |_| {
        let Some(ctx) = weak.upgrade() else {
            return;
        };
        let mut ctx = ctx.borrow_mut();
        if doc.hidden() {
            ctx.driver.stop();
        } else {
            ctx.restart();
        }
    })
}

pub fn on_pointer_move(
    host: &web::Element,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    let weak = Rc::downgrade(frame_ctx);
    Listener::attach(host, "pointermove", move |ev| {
        with_pointer(&weak, &ev, |ctx, pos| {
            ctx.driver.scene_mut().pointer_moved(pos);
        });
    })
}

pub fn on_click(
    host: &web::Element,
    frame_ctx: &Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Listener> {
    let weak = Rc::downgrade(frame_ctx);
    Listener::attach(host, "click", move |ev| {
        with_pointer(&weak, &ev, |ctx, pos| {
            let added = ctx.driver.scene_mut().clicked(pos);
            log::debug!(
                "[events] click burst of {} at ({:.0},{:.0})",
                added,
                pos.x,
                pos.y
            );
        });
    })
}

fn with_pointer(
    weak: &Weak<RefCell<FrameContext>>,
    ev: &web::Event,
    apply: impl FnOnce(&mut FrameContext, glam::Vec2),
) {
    let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
        return;
    };
    let Some(ctx) = weak.upgrade() else {
        return;
    };
    let mut ctx = ctx.borrow_mut();
    let pos = input::pointer_local_px(mouse, &ctx.container);
    apply(&mut ctx, pos);
}
