use nav_core::NavConfig;
use std::time::Duration;

/// Raw override strings read from the nav element's data attributes.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub drag_threshold_ms: Option<String>,
    pub release_delay_ms: Option<String>,
    pub damping: Option<String>,
}

#[inline]
fn parse_ms(raw: Option<&str>) -> Option<Duration> {
    let v: f64 = raw?.trim().parse().ok()?;
    (v.is_finite() && v >= 0.0).then(|| Duration::from_secs_f64(v / 1000.0))
}

#[inline]
fn parse_unit(raw: Option<&str>) -> Option<f64> {
    let v: f64 = raw?.trim().parse().ok()?;
    (v.is_finite() && v > 0.0 && v <= 1.0).then_some(v)
}

fn apply<T>(raw: Option<&str>, parsed: Option<T>, what: &str, slot: &mut T) {
    match (raw, parsed) {
        (_, Some(v)) => *slot = v,
        (Some(raw), None) => log::warn!("[config] ignoring {} {:?}", what, raw),
        (None, None) => {}
    }
}

/// Builds the runtime config; malformed overrides are logged and ignored.
pub fn build_config(overrides: &ConfigOverrides, pixel_ratio: f64) -> NavConfig {
    let mut config = NavConfig::default();
    if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        config.pixel_ratio = pixel_ratio;
    }
    let raw = overrides.drag_threshold_ms.as_deref();
    apply(raw, parse_ms(raw), "drag threshold", &mut config.drag_threshold);
    let raw = overrides.release_delay_ms.as_deref();
    apply(raw, parse_ms(raw), "release delay", &mut config.release_delay);
    let raw = overrides.damping.as_deref();
    apply(raw, parse_unit(raw), "damping", &mut config.damping);
    config
}
