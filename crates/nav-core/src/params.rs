//! Per-frame parameter record consumed by the distortion and hover stages.

use crate::constants::{MAX_HOVER_ITEMS, TIME_STEP_PER_FRAME};
use crate::item::NavItem;
use crate::mapper::{aspect_ratio, Viewport};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct DistortionParameters {
    /// Pointer in normalized space.
    pub mouse: DVec2,
    /// Viewport scaled by the device pixel ratio.
    pub resolution: DVec2,
    pub aspect_ratio: f64,
    /// Advances by a fixed step per rendered frame; never wraps.
    pub time: f64,
    /// Horizontal translation of the item row in CSS pixels.
    pub pan_offset_px: f64,
    pub hover: [bool; MAX_HOVER_ITEMS],
}

impl DistortionParameters {
    pub fn new(viewport: &Viewport, pixel_ratio: f64) -> Self {
        let mut params = Self {
            mouse: DVec2::ZERO,
            resolution: DVec2::ONE,
            aspect_ratio: 1.0,
            time: 0.0,
            pan_offset_px: 0.0,
            hover: [false; MAX_HOVER_ITEMS],
        };
        params.resize(viewport, pixel_ratio);
        params
    }

    pub fn resize(&mut self, viewport: &Viewport, pixel_ratio: f64) {
        let scale = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        self.resolution = viewport.safe_size() * scale;
        self.aspect_ratio = aspect_ratio(viewport);
    }

    #[inline]
    pub fn advance_time(&mut self) {
        self.time += TIME_STEP_PER_FRAME;
    }
}

/// GPU-side mirror of [`DistortionParameters`] plus the item row layout,
/// narrowed to `f32`.
///
/// Layout matches the `Params` struct in `shaders/distort.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DistortionUniforms {
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
    pub ratio: f32,
    pub time: f32,
    pub pan_offset_px: f32,
    pub item_count: f32,
    /// (row width px, row height px, viewport width px, viewport height px)
    pub row: [f32; 4],
    /// Per item: (left edge within the row px, width px, hover 0/1, unused)
    pub items: [[f32; 4]; MAX_HOVER_ITEMS],
    /// (texture width px, texture height px, unused, unused). Equals the row
    /// size unless the backend had to clip the row texture.
    pub texture_extent: [f32; 4],
}

impl DistortionUniforms {
    pub fn pack(
        params: &DistortionParameters,
        items: &[NavItem],
        viewport: &Viewport,
        row_height_px: f64,
    ) -> Self {
        let size = viewport.safe_size().as_vec2();
        let mut packed = [[0.0_f32; 4]; MAX_HOVER_ITEMS];
        let mut left = 0.0_f64;
        for (i, item) in items.iter().enumerate() {
            let w = item.width();
            if let Some(slot) = packed.get_mut(i) {
                let hover = if params.hover[i] { 1.0 } else { 0.0 };
                *slot = [left as f32, w as f32, hover, 0.0];
            }
            left += w;
        }
        Self {
            resolution: params.resolution.as_vec2().to_array(),
            mouse: params.mouse.as_vec2().to_array(),
            ratio: params.aspect_ratio as f32,
            time: params.time as f32,
            pan_offset_px: params.pan_offset_px as f32,
            item_count: items.len().min(MAX_HOVER_ITEMS) as f32,
            row: [left as f32, row_height_px as f32, size.x, size.y],
            items: packed,
            texture_extent: [left as f32, row_height_px as f32, 0.0, 0.0],
        }
    }

    /// Records the size of the texture actually holding the row. Pixels past
    /// its right edge sample as transparent.
    pub fn with_texture_extent(mut self, width_px: u32, height_px: u32) -> Self {
        self.texture_extent[0] = width_px as f32;
        self.texture_extent[1] = height_px as f32;
        self
    }
}
