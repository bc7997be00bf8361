use super::NavWiring;
use crate::dom::{self, EventBindings};
use crate::input;
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &NavWiring, bindings: &mut EventBindings) {
    wire_pointermove(w, bindings);
    wire_pointerdown(w, bindings);
    wire_pointerup(w, bindings);
    wire_resize(w, bindings);
}

fn wire_pointermove(w: &NavWiring, bindings: &mut EventBindings) {
    let w2 = w.clone();
    bindings.listen(&w.window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w2.controller
            .borrow_mut()
            .on_pointer_move(input::pointer_input(ev), Instant::now());
    });
}

fn wire_pointerdown(w: &NavWiring, bindings: &mut EventBindings) {
    let w2 = w.clone();
    bindings.listen(&w.window, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        w2.controller
            .borrow_mut()
            .on_pointer_down(input::pointer_input(ev), Instant::now());
    });
}

fn wire_pointerup(w: &NavWiring, bindings: &mut EventBindings) {
    let w2 = w.clone();
    bindings.listen(&w.window, "pointerup", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let activation = w2
            .controller
            .borrow_mut()
            .on_pointer_up(input::pointer_input(ev), Instant::now());
        // borrow released: the click may re-enter through the focus handlers
        if let Some(act) = activation {
            match w2.links.get(act.index) {
                Some(link) => link.click(),
                None => log::warn!("[pointer] no anchor for item {}", act.index),
            }
        }
    });
}

fn wire_resize(w: &NavWiring, bindings: &mut EventBindings) {
    let w2 = w.clone();
    bindings.listen(&w.window, "resize", move |_ev: web::Event| {
        let viewport = dom::window_viewport(&w2.window);
        dom::sync_canvas_backing_size(&w2.canvas, viewport, w2.pixel_ratio);
        w2.controller.borrow_mut().on_resize(viewport);
    });
}
