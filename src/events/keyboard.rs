use super::NavWiring;
use crate::constants::TOGGLE_CLASS;
use crate::dom::EventBindings;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keyboard focus on a link animates the field onto that item.
pub fn wire_link_focus(w: &NavWiring, bindings: &mut EventBindings) {
    for (i, link) in w.links.iter().enumerate() {
        let controller = w.controller.clone();
        bindings.listen(link, "focus", move |_ev: web::Event| {
            if let Err(e) = controller.borrow_mut().focus_item(i) {
                log::error!("[keyboard] focus item {}: {}", i, e);
            }
        });
        let controller = w.controller.clone();
        bindings.listen(link, "blur", move |_ev: web::Event| {
            controller.borrow_mut().blur_item(i);
        });
    }
}

/// Enter/Space on a toggle label flips the checkbox, mirroring a click.
pub fn wire_toggle_keyup(
    w: &NavWiring,
    toggle: &web::HtmlInputElement,
    bindings: &mut EventBindings,
) {
    let toggle = toggle.clone();
    bindings.listen(&w.document, "keyup", move |ev: web::Event| {
        let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if !input::is_toggle_key(&kev.key()) {
            return;
        }
        let on_label = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|el| input::has_class(&el.class_name(), TOGGLE_CLASS));
        if !on_label {
            return;
        }
        toggle.set_checked(!toggle.checked());
        ev.prevent_default();
        if let Ok(change) = web::Event::new("change") {
            _ = toggle.dispatch_event(&change);
        }
    });
}
