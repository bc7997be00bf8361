/// One navigation link as seen by the core.
///
/// Built once from the external item source; only `rendered_width_px` is set
/// afterwards, when the rasterizer has produced the item's bitmap.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub title: String,
    pub target_link: String,
    pub rendered_width_px: Option<f64>,
    pub order: usize,
}

impl NavItem {
    pub fn new(order: usize, title: impl Into<String>, target_link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            target_link: target_link.into(),
            rendered_width_px: None,
            order,
        }
    }

    /// Records the rasterized width. Later calls are ignored; non-finite or
    /// negative widths are stored as zero.
    pub fn set_rendered_width(&mut self, width_px: f64) {
        if self.rendered_width_px.is_some() {
            log::warn!("[nav] width for item {} already set; ignoring", self.order);
            return;
        }
        let w = if width_px.is_finite() { width_px.max(0.0) } else { 0.0 };
        self.rendered_width_px = Some(w);
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.rendered_width_px.unwrap_or(0.0)
    }
}

/// Produces an item's visual representation and reports its width in pixels.
pub trait TitleRasterizer {
    fn rendered_width(&mut self, title: &str) -> f64;
}
