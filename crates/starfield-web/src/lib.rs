#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::{Scene, SceneDriver, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod canvas;
pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;

use canvas::CanvasSurface;
use events::{Listener, ResizeDebounce};
use frame::{FrameContext, FrameSlot, RafScheduler};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web loaded");
    Ok(())
}

/// Mount an animated background into the element with id `container_id`.
///
/// `variant` is one of `main`, `sidebar-stars` or `sidebar-particles`. A
/// missing host element, an unknown variant or a failed setup is logged and
/// returns `undefined`.
#[wasm_bindgen(js_name = mountScene)]
pub fn mount_scene(container_id: &str, variant: &str) -> Option<SceneHandle> {
    let variant = match variant.parse::<Variant>() {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[mount] {}", e);
            return None;
        }
    };
    match mount(container_id, variant) {
        Ok(Some(mounted)) => Some(SceneHandle {
            inner: Some(mounted),
        }),
        Ok(None) => {
            log::warn!("[mount] #{} not found; {} not mounted", container_id, variant);
            None
        }
        Err(e) => {
            log::warn!("[mount] {} failed: {:?}", variant, e);
            None
        }
    }
}

/// A mounted background. Calling `destroy` (or `free` from JS) stops the
/// loop and removes the injected canvas.
#[wasm_bindgen]
pub struct SceneHandle {
    inner: Option<Mounted>,
}

struct Mounted {
    variant: Variant,
    frame_ctx: Rc<RefCell<FrameContext>>,
    frame_slot: FrameSlot,
    debounce: Rc<ResizeDebounce>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SceneHandle {
    /// Stop animating, detach every listener and remove the container.
    /// Calling it again is a no-op.
    pub fn destroy(&mut self) {
        let Some(mounted) = self.inner.take() else {
            return;
        };
        let Mounted {
            variant,
            frame_ctx,
            frame_slot,
            debounce,
            listeners,
        } = mounted;

        drop(listeners);
        debounce.cancel();
        {
            let mut ctx = frame_ctx.borrow_mut();
            ctx.driver.stop();
            ctx.container.remove();
        }
        frame_slot.borrow_mut().take();
        log::info!("[mount] {} destroyed", variant);
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|m| m.frame_ctx.borrow().driver.is_running())
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> Option<String> {
        self.inner.as_ref().map(|m| m.variant.name().to_string())
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn mount(container_id: &str, variant: Variant) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(host) = document.get_element_by_id(container_id) else {
        return Ok(None);
    };

    let (container, canvas) = dom::mount_container(&document, &host, variant)?;
    let surface = match CanvasSurface::new(canvas) {
        Ok(surface) => surface,
        Err(e) => {
            container.remove();
            return Err(e);
        }
    };

    let config = variant.config();
    let wants_pointer = config.tracks_pointer();
    let wants_click = config.click_burst.is_some();
    let scene = Scene::new(config, StdRng::from_entropy());

    let frame_slot: FrameSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler::new(window.clone(), frame_slot.clone());
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        driver: SceneDriver::new(scene, scheduler),
        surface,
        container,
        document: document.clone(),
    }));
    frame::install_frame_callback(&frame_ctx, &frame_slot);

    let debounce = Rc::new(ResizeDebounce::new(&window, &frame_ctx));
    let listeners = match attach_listeners(
        &window,
        &document,
        &host,
        &frame_ctx,
        &debounce,
        wants_pointer,
        wants_click,
    ) {
        Ok(listeners) => listeners,
        Err(e) => {
            frame_ctx.borrow().container.remove();
            frame_slot.borrow_mut().take();
            return Err(e);
        }
    };

    if document.hidden() {
        // Measured and populated once the tab becomes visible.
        log::debug!("[mount] document hidden; deferring start");
    } else {
        frame_ctx.borrow_mut().restart();
    }
    log::info!(
        "[mount] {} mounted into #{} ({} listeners)",
        variant,
        container_id,
        listeners.len()
    );

    Ok(Some(Mounted {
        variant,
        frame_ctx,
        frame_slot,
        debounce,
        listeners,
    }))
}

fn attach_listeners(
    window: &web::Window,
    document: &web::Document,
    host: &web::Element,
    frame_ctx: &Rc<RefCell<FrameContext>>,
    debounce: &Rc<ResizeDebounce>,
    wants_pointer: bool,
    wants_click: bool,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = vec![
        events::on_resize(window, debounce)?,
        events::on_visibility_change(document, frame_ctx)?,
    ];
    if wants_pointer {
        listeners.push(events::on_pointer_move(host, frame_ctx)?);
    }
    if wants_click {
        listeners.push(events::on_click(host, frame_ctx)?);
    }
    Ok(listeners)
}
