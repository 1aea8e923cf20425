use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::SceneError;
use crate::rigid_body::BodyShape;
use crate::rigid_body_system::BodyView;
use crate::simulation::RenderFrame;

/// Canvas2D painter for the scene
pub struct Painter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SceneError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(SceneError::dom)?
            .ok_or_else(|| SceneError::Dom("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SceneError::Dom("not a 2d context".to_string()))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the viewport.
    pub fn fit(&self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    pub fn paint(&self, frame: &RenderFrame<'_>) {
        self.ctx.set_fill_style_str(frame.background);
        self.ctx
            .fill_rect(0.0, 0.0, frame.width as f64, frame.height as f64);

        for body in &frame.bodies {
            self.draw_body(body);
        }
    }

    fn draw_body(&self, body: &BodyView<'_>) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.translate(body.pos.x as f64, body.pos.y as f64).ok();
        ctx.rotate(body.angle as f64).ok();
        ctx.set_fill_style_str(body.fill);

        match body.shape {
            BodyShape::Circle { radius } => {
                ctx.begin_path();
                ctx.arc(0.0, 0.0, radius as f64, 0.0, TAU).ok();
                ctx.fill();
            }
            BodyShape::Rect { width, height } => {
                let (w, h) = (width as f64, height as f64);
                ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
            }
        }
        ctx.restore();
    }
}
