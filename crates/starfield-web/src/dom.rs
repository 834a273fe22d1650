use crate::constants::{CANVAS_STYLE, CONTAINER_STYLE, THEME_ATTR};
use starfield_core::{Theme, Variant};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn read_theme(document: &web::Document) -> Theme {
    let mode = document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR));
    Theme::from_mode_attr(mode.as_deref())
}

/// Element id of the injected container; one instance per variant per page.
pub fn container_id(variant: Variant) -> &'static str {
    match variant {
        Variant::Main => "main-canvas-container",
        Variant::SidebarStars => "star-canvas-container",
        Variant::SidebarParticles => "sidebar-canvas-container",
    }
}

fn canvas_id(variant: Variant) -> &'static str {
    match variant {
        Variant::Main => "main-canvas",
        Variant::SidebarStars => "star-canvas",
        Variant::SidebarParticles => "sidebar-canvas",
    }
}

/// Insert a fresh container + canvas as the first child of `host`, replacing
/// any earlier instance of the same variant.
pub fn mount_container(
    document: &web::Document,
    host: &web::Element,
    variant: Variant,
) -> anyhow::Result<(web::HtmlElement, web::HtmlCanvasElement)> {
    if let Some(old) = document.get_element_by_id(container_id(variant)) {
        log::debug!("[mount] replacing previous #{}", container_id(variant));
        old.remove();
    }

    let container = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("container is not an HtmlElement: {:?}", e))?;
    container.set_id(container_id(variant));
    container
        .set_attribute("style", CONTAINER_STYLE)
        .map_err(js_err)?;

    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("canvas is not an HtmlCanvasElement: {:?}", e))?;
    canvas.set_id(canvas_id(variant));
    canvas.set_attribute("style", CANVAS_STYLE).map_err(js_err)?;

    container.append_child(&canvas).map_err(js_err)?;
    host.insert_before(&container, host.first_child().as_ref())
        .map_err(js_err)?;
    Ok((container, canvas))
}
