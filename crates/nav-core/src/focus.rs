use crate::constants::{FOCUS_EDGE_MARGIN, FOCUS_VERTICAL_ANCHOR};
use crate::error::NavError;
use crate::mapper::Viewport;
use glam::DVec2;

/// Fraction of the row width at the midpoint of item `target_index`.
pub fn resolve_fraction(widths: &[f64], target_index: usize) -> Result<f64, NavError> {
    if widths.is_empty() {
        return Err(NavError::NoItems);
    }
    if target_index >= widths.len() {
        return Err(NavError::IndexOutOfRange {
            index: target_index,
            len: widths.len(),
        });
    }
    let total: f64 = widths.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(NavError::ZeroRowWidth { total });
    }
    let before: f64 = widths[..target_index].iter().sum();
    Ok((before + widths[target_index] * 0.5) / total)
}

/// Pixel focus point for a row fraction: vertical centre, with a margin
/// reserved at both horizontal edges.
#[inline]
pub fn focus_target_px(fraction: f64, viewport: &Viewport) -> DVec2 {
    let size = viewport.safe_size();
    let span = 1.0 - 2.0 * FOCUS_EDGE_MARGIN;
    DVec2::new(
        size.x * FOCUS_EDGE_MARGIN + size.x * span * fraction,
        size.y * FOCUS_VERTICAL_ANCHOR,
    )
}

pub fn resolve_position(
    widths: &[f64],
    target_index: usize,
    viewport: &Viewport,
) -> Result<DVec2, NavError> {
    resolve_fraction(widths, target_index).map(|c| focus_target_px(c, viewport))
}
