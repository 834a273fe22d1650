use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS px relative to the top-left of `element`.
#[inline]
pub fn pointer_local_px(ev: &web::MouseEvent, element: &web::Element) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
