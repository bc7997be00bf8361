use nav_core::{PointerInput, PointerKind};
use web_sys as web;

/// Keys that operate the nav toggle label for keyboard users.
#[inline]
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[inline]
pub fn has_class(class_name: &str, wanted: &str) -> bool {
    class_name.split_whitespace().any(|c| c == wanted)
}

#[inline]
pub fn pointer_input(ev: &web::PointerEvent) -> PointerInput {
    PointerInput::new(
        ev.client_x() as f64,
        ev.client_y() as f64,
        PointerKind::from_pointer_type(&ev.pointer_type()),
    )
}
