//! Canvas 2D backend (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use crate::theme::Rgba;

/// Draws into a `<canvas>` through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        ctx.begin_path();
        if let Err(e) = ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            TAU,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        ctx.set_fill_style_str(&color.to_css());
        ctx.fill();
        ctx.restore();
    }
}
