use crate::constants::{
    BASELINE_INSET_FACTOR, FONT_FAMILY, FONT_SIZE_PX, FONT_WEIGHT, ITEM_HEIGHT_FACTOR,
    ITEM_PADDING_PX, MAX_ATLAS_WIDTH_PX, TEXT_FILL,
};
use nav_core::{NavItem, TitleRasterizer};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn font_spec() -> String {
    format!("{} {}px {}", FONT_WEIGHT, FONT_SIZE_PX, FONT_FAMILY)
}

#[inline]
pub fn item_height_px() -> f64 {
    FONT_SIZE_PX * ITEM_HEIGHT_FACTOR
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

fn apply_text_style(ctx: &web::CanvasRenderingContext2d) {
    ctx.set_font(&font_spec());
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.set_fill_style_str(TEXT_FILL);
}

/// Measures titles with an offscreen 2D canvas in the nav font.
pub struct CanvasRasterizer {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRasterizer {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = context_2d(&canvas)?;
        apply_text_style(&ctx);
        Ok(Self { ctx })
    }
}

impl TitleRasterizer for CanvasRasterizer {
    fn rendered_width(&mut self, title: &str) -> f64 {
        match self.ctx.measure_text(title) {
            Ok(m) => m.width() + ITEM_PADDING_PX,
            Err(e) => {
                log::warn!("[raster] measure failed for {:?}: {:?}", title, e);
                ITEM_PADDING_PX
            }
        }
    }
}

/// RGBA pixels of every title laid out side by side, one row tall.
pub struct RowAtlas {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Draws each item's title centred in its slot, left to right in order.
pub fn build_row_atlas(document: &web::Document, items: &[NavItem]) -> anyhow::Result<RowAtlas> {
    let total: f64 = items.iter().map(NavItem::width).sum();
    let mut width = total.ceil().max(1.0) as u32;
    if width > MAX_ATLAS_WIDTH_PX {
        log::warn!(
            "[raster] row width {}px exceeds texture limit; clipping to {}",
            width,
            MAX_ATLAS_WIDTH_PX
        );
        width = MAX_ATLAS_WIDTH_PX;
    }
    let height = item_height_px().ceil() as u32;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = context_2d(&canvas)?;
    apply_text_style(&ctx);

    let baseline = height as f64 - FONT_SIZE_PX * BASELINE_INSET_FACTOR;
    let mut left = 0.0;
    for item in items {
        let w = item.width();
        ctx.fill_text(&item.title, left + w * 0.5, baseline)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        left += w;
    }

    let image = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    log::info!("[raster] row atlas {}x{}", width, height);
    Ok(RowAtlas {
        width,
        height,
        rgba: image.data().0,
    })
}
