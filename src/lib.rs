#![cfg(target_arch = "wasm32")]
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod raster;
mod render;

use constants::{NAV_SELECTOR, TOGGLE_ID};
use nav_core::NavigationController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nav-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
    let nav = document
        .query_selector(NAV_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", NAV_SELECTOR))?;
    let toggle: Option<web::HtmlInputElement> = document
        .get_element_by_id(TOGGLE_ID)
        .and_then(|el| el.dyn_into().ok());
    if toggle.is_none() {
        log::warn!("[init] no #{}; navigation stays static", TOGGLE_ID);
    }

    let pixel_ratio = window.device_pixel_ratio();
    let config = config::build_config(&dom::read_overrides(&nav), pixel_ratio);
    let links = dom::collect_nav_links(&nav)?;
    let viewport = dom::window_viewport(&window);

    let mut rasterizer = raster::CanvasRasterizer::new(&document)?;
    let controller = NavigationController::new(
        links.iter().map(|l| (l.title.clone(), l.href.clone())),
        &mut rasterizer,
        viewport,
        config,
    )?;
    let atlas = raster::build_row_atlas(&document, controller.items())?;
    let controller = Rc::new(RefCell::new(controller));

    let canvas = dom::create_canvas(&document, &nav)?;
    dom::sync_canvas_backing_size(&canvas, viewport, pixel_ratio);

    // WebGPU needs a 'static surface target
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = match render::GpuState::new(leaked_canvas, &atlas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}; running without the field", e);
            None
        }
    };

    let wiring = events::NavWiring {
        window: window.clone(),
        document: document.clone(),
        controller: controller.clone(),
        links: Rc::new(links.into_iter().map(|l| l.element).collect()),
        canvas: canvas.clone(),
        pixel_ratio,
    };
    let bindings = Rc::new(RefCell::new(dom::EventBindings::default()));
    {
        let mut b = bindings.borrow_mut();
        events::wire_pointer_handlers(&wiring, &mut b);
        events::wire_link_focus(&wiring, &mut b);
        if let Some(t) = toggle.as_ref() {
            events::wire_toggle(&wiring, t, &mut b);
            events::wire_toggle_keyup(&wiring, t, &mut b);
        }
    }
    wire_dispose(&wiring, &bindings);

    if let Err(e) = controller.borrow_mut().jump_to_item(0) {
        log::warn!("[init] initial placement: {}", e);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller: controller.clone(),
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);

    // sync with the checkbox's initial state, which may already be checked
    if let Some(t) = toggle.as_ref() {
        events::fire_toggle_state(&window, t.checked());
    }
    log::info!("[init] navigation ready");
    Ok(())
}

/// Tears the navigation down when the page is hidden for good: the frame loop
/// stops on its next tick and every listener is removed.
fn wire_dispose(w: &events::NavWiring, bindings: &Rc<RefCell<dom::EventBindings>>) {
    let controller = w.controller.clone();
    let bindings_c = bindings.clone();
    bindings
        .borrow_mut()
        .listen(&w.window, "pagehide", move |ev: web::Event| {
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .is_some_and(|p| p.persisted());
            if persisted {
                // kept in the back/forward cache; may be shown again
                return;
            }
            controller.borrow_mut().dispose();
            bindings_c.borrow_mut().remove_all();
        });
}
