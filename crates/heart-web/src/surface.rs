use glam::Vec2;
use heart_core::Surface;
use web_sys as web;

/// [`heart_core::Surface`] implemented on the 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    color: String,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, color: String) -> Self {
        Self { ctx, color }
    }

    pub fn clear(&self, width: u32, height: u32) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }
}

impl Surface for CanvasSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.ctx.set_fill_style_str(&self.color);
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }
}
