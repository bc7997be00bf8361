use crate::constants::{
    DRAG_RELEASE_DELAY, DRAG_THRESHOLD, ITEM_HEIGHT_PX, OPEN_SWEEP_START_X_PX, POINTER_DAMPING,
};
use std::time::Duration;

/// Runtime tuning for a [`NavigationController`](crate::NavigationController).
#[derive(Clone, Debug, PartialEq)]
pub struct NavConfig {
    pub drag_threshold: Duration,
    pub release_delay: Duration,
    pub damping: f64,
    pub open_sweep_start_x_px: f64,
    pub item_height_px: f64,
    /// Device pixel ratio applied to the distortion resolution.
    pub pixel_ratio: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            release_delay: DRAG_RELEASE_DELAY,
            damping: POINTER_DAMPING,
            open_sweep_start_x_px: OPEN_SWEEP_START_X_PX,
            item_height_px: ITEM_HEIGHT_PX,
            pixel_ratio: 1.0,
        }
    }
}
