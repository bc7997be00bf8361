use super::NavWiring;
use crate::constants::{EVENT_CLOSE, EVENT_OPEN};
use crate::dom::EventBindings;
use web_sys as web;

/// The checkbox announces open/close through window-level custom events so
/// other toggles can drive the navigation the same way.
pub fn wire_toggle(w: &NavWiring, toggle: &web::HtmlInputElement, bindings: &mut EventBindings) {
    let window = w.window.clone();
    let toggle_c = toggle.clone();
    bindings.listen(toggle, "change", move |_ev: web::Event| {
        fire_toggle_state(&window, toggle_c.checked());
    });

    let controller = w.controller.clone();
    bindings.listen(&w.window, EVENT_OPEN, move |_ev: web::Event| {
        if let Err(e) = controller.borrow_mut().on_open() {
            log::error!("[toggle] open: {}", e);
        }
    });
    let controller = w.controller.clone();
    bindings.listen(&w.window, EVENT_CLOSE, move |_ev: web::Event| {
        controller.borrow_mut().on_close();
    });
}

pub fn fire_toggle_state(window: &web::Window, open: bool) {
    let name = if open { EVENT_OPEN } else { EVENT_CLOSE };
    match web::CustomEvent::new(name) {
        Ok(ev) => {
            _ = window.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[toggle] failed to create {}: {:?}", name, e),
    }
}
