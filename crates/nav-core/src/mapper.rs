//! Pixel <-> normalized space conversion for the distortion field.
//!
//! Normalized space is centred on the viewport, grows upward, and is
//! aspect-corrected so that the shorter screen axis spans unit length. The
//! longer axis is stretched by `max(w,h) / min(w,h)`, which keeps the
//! distortion radially symmetric in both portrait and landscape.

use crate::constants::MIN_VIEWPORT_DIM_PX;
use glam::DVec2;

/// Viewport size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }

    /// Dimensions clamped so ratios never divide by zero.
    #[inline]
    pub fn safe_size(&self) -> DVec2 {
        let w = if self.width_px.is_finite() {
            self.width_px.max(MIN_VIEWPORT_DIM_PX)
        } else {
            MIN_VIEWPORT_DIM_PX
        };
        let h = if self.height_px.is_finite() {
            self.height_px.max(MIN_VIEWPORT_DIM_PX)
        } else {
            MIN_VIEWPORT_DIM_PX
        };
        DVec2::new(w, h)
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        let s = self.safe_size();
        s.y > s.x
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.safe_size() * 0.5
    }
}

#[inline]
pub fn aspect_ratio(viewport: &Viewport) -> f64 {
    let s = viewport.safe_size();
    s.max_element() / s.min_element()
}

pub fn to_normalized(pixel: DVec2, viewport: &Viewport) -> DVec2 {
    let size = viewport.safe_size();
    let ratio = aspect_ratio(viewport);
    let mut n = (pixel - size * 0.5) / size;
    n.y = -n.y;
    if viewport.is_portrait() {
        n.y *= ratio;
    } else {
        n.x *= ratio;
    }
    n
}

pub fn to_pixels(normalized: DVec2, viewport: &Viewport) -> DVec2 {
    let size = viewport.safe_size();
    let ratio = aspect_ratio(viewport);
    let mut n = normalized;
    if viewport.is_portrait() {
        n.y /= ratio;
    } else {
        n.x /= ratio;
    }
    n.y = -n.y;
    n * size + size * 0.5
}
