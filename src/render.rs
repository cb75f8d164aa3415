//! Canvas 2D drawing of the sky tiles and the plane.

use crate::constants::{PLANE_ASSET, PLANE_FILL_CSS, SKY_ASSET, SKY_FILL_CSS};
use skyplane_core::FrameSnapshot;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Renderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    sky: web::HtmlImageElement,
    plane: web::HtmlImageElement,
}

impl Renderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            sky: load_image(SKY_ASSET)?,
            plane: load_image(PLANE_ASSET)?,
        })
    }

    pub fn draw(&self, snap: &FrameSnapshot) -> Result<(), JsValue> {
        let vp = snap.viewport;
        if vp.width <= 0.0 || vp.height <= 0.0 {
            return Ok(());
        }
        // Draw in CSS pixels; the backing store is devicePixelRatio larger.
        let sx = self.canvas.width() as f64 / vp.width as f64;
        let sy = self.canvas.height() as f64 / vp.height as f64;
        self.ctx.set_transform(sx, 0.0, 0.0, sy, 0.0, 0.0)?;

        let (w, h) = (vp.width as f64, vp.height as f64);
        self.ctx.set_fill_style_str(SKY_FILL_CSS);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        if image_ready(&self.sky) {
            for ty in snap.sky_tiles {
                self.ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(&self.sky, 0.0, ty as f64, w, h)?;
            }
        }

        let (px, py) = (snap.plane.x as f64, snap.plane.y as f64);
        let size = snap.plane_size as f64;
        if image_ready(&self.plane) {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&self.plane, px, py, size, size)?;
        } else {
            self.draw_plane_shape(px, py, size);
        }
        Ok(())
    }

    // Stand-in while the sprite is loading or missing.
    fn draw_plane_shape(&self, x: f64, y: f64, size: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(PLANE_FILL_CSS);
        ctx.begin_path();
        ctx.move_to(x + size * 0.5, y);
        ctx.line_to(x + size, y + size * 0.6);
        ctx.line_to(x + size * 0.6, y + size * 0.55);
        ctx.line_to(x + size * 0.7, y + size);
        ctx.line_to(x + size * 0.3, y + size);
        ctx.line_to(x + size * 0.4, y + size * 0.55);
        ctx.line_to(x, y + size * 0.6);
        ctx.close_path();
        ctx.fill();
    }
}

fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_src(src);
    Ok(img)
}

#[inline]
fn image_ready(img: &web::HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}
