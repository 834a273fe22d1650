use crate::dom::js_err;
use glam::Vec2;
use starfield_core::{Bounds, Circle, Line, Rgba, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a Canvas 2D context, drawing in CSS pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("unexpected 2d context type: {:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to `element`'s CSS size × devicePixelRatio and
    /// return the drawable bounds in CSS px.
    pub fn fit_to(&self, element: &web::Element) -> Bounds {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let rect = element.get_bounding_client_rect();
        self.canvas.set_width(((rect.width() * dpr) as u32).max(1));
        self.canvas.set_height(((rect.height() * dpr) as u32).max(1));
        // Resizing resets the context, so the scale is set rather than accumulated.
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("[canvas] set_transform failed: {:?}", e);
        }
        Bounds::new(rect.width() as f32, rect.height() as f32)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, circle: &Circle) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(circle.alpha as f64);
        if let Some(glow) = circle.glow {
            ctx.set_shadow_color(&glow.color.to_string());
            ctx.set_shadow_blur(glow.blur as f64);
        }
        ctx.begin_path();
        if let Err(e) = ctx.arc(
            circle.center.x as f64,
            circle.center.y as f64,
            circle.radius.max(0.0) as f64,
            0.0,
            TAU,
        ) {
            log::warn!("[canvas] arc failed: {:?}", e);
        }
        ctx.set_fill_style_str(&circle.color.to_string());
        ctx.fill();
        ctx.restore();
    }

    fn stroke_line(&mut self, line: &Line) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(line.alpha as f64);
        ctx.set_stroke_style_str(&line.color.to_string());
        ctx.set_line_width(line.width as f64);
        ctx.set_line_cap("round");
        ctx.begin_path();
        ctx.move_to(line.from.x as f64, line.from.y as f64);
        ctx.line_to(line.to.x as f64, line.to.y as f64);
        ctx.stroke();
        ctx.restore();
    }

    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: Rgba, width: f32) {
        if segments.is_empty() {
            return;
        }
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_stroke_style_str(&color.to_string());
        ctx.set_line_width(width as f64);
        ctx.begin_path();
        for (a, b) in segments {
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
        }
        ctx.stroke();
        ctx.restore();
    }
}
