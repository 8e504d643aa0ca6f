//! HTML canvas 2D implementation of [`DrawSurface`]

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawSurface, Style};
use crate::sim::Rect;

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the 2D context of a canvas element
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    /// Apply glow; caller wraps in save/restore
    fn apply_glow(&self, style: &Style) {
        if let Some(glow) = style.glow {
            self.ctx.set_shadow_color(&glow.color.to_css());
            self.ctx.set_shadow_blur(glow.blur as f64);
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, style: &Style) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.apply_glow(style);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        self.ctx.restore();
    }

    fn stroke_rect(&mut self, rect: Rect, style: &Style) {
        self.ctx.save();
        self.ctx.set_stroke_style_str(&style.color.to_css());
        self.apply_glow(style);
        self.ctx
            .stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, style: &Style) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.apply_glow(style);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
        }
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, style: &Style) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&style.color.to_css());
        self.ctx.set_font(font);
        self.apply_glow(style);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
        self.ctx.restore();
    }
}
