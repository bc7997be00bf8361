use crate::config::ConfigOverrides;
use crate::constants::{
    ATTR_DAMPING, ATTR_DRAG_THRESHOLD_MS, ATTR_RELEASE_DELAY_MS, CANVAS_CLASS, LINK_SELECTOR,
};
use nav_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// CSS-pixel viewport of the window.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(w, h)
}

/// A link discovered in the nav markup, in document order.
pub struct NavLink {
    pub title: String,
    pub href: String,
    pub element: web::HtmlElement,
}

pub fn collect_nav_links(nav: &web::Element) -> anyhow::Result<Vec<NavLink>> {
    let list = nav
        .query_selector_all(LINK_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut links = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(element) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let title = element.inner_text().trim().to_string();
        let href = element.get_attribute("href").unwrap_or_default();
        links.push(NavLink {
            title,
            href,
            element,
        });
    }
    Ok(links)
}

pub fn read_overrides(nav: &web::Element) -> ConfigOverrides {
    ConfigOverrides {
        drag_threshold_ms: nav.get_attribute(ATTR_DRAG_THRESHOLD_MS),
        release_delay_ms: nav.get_attribute(ATTR_RELEASE_DELAY_MS),
        damping: nav.get_attribute(ATTR_DAMPING),
    }
}

/// Creates the full-viewport canvas the field is drawn into and attaches it
/// to the nav element. Hidden from assistive tech; the links stay the
/// accessible surface.
pub fn create_canvas(
    document: &web::Document,
    nav: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_class_name(CANVAS_CLASS);
    _ = canvas.set_attribute("aria-hidden", "true");
    _ = canvas.set_attribute("tabindex", "-1");
    nav.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport, dpr: f64) {
    let size = viewport.safe_size() * dpr;
    canvas.set_width((size.x as u32).max(1));
    canvas.set_height((size.y as u32).max(1));
}

type Listener = Closure<dyn FnMut(web::Event)>;

/// Owns every DOM listener the navigation registers so they can be removed
/// again on dispose.
#[derive(Default)]
pub struct EventBindings {
    entries: Vec<(web::EventTarget, &'static str, Listener)>,
}

impl EventBindings {
    pub fn listen(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        let added = target.add_event_listener_with_callback(event, callback);
        if let Err(e) = added {
            log::warn!("[dom] failed to add {} listener: {:?}", event, e);
            return;
        }
        self.entries.push((target.clone(), event, closure));
    }

    pub fn remove_all(&mut self) {
        let count = self.entries.len();
        for (target, event, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            // the handler running dispose may be one of these; leak rather than drop
            closure.forget();
        }
        log::info!("[dom] removed {} listeners", count);
    }
}
