use crate::render;
use instant::Instant;
use nav_core::NavigationController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<NavigationController>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// Runs one frame; returns `false` once the navigation is disposed and
    /// the loop should stop.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let mut controller = self.controller.borrow_mut();
        if controller.is_disposed() {
            return false;
        }
        match self.gpu.as_mut() {
            Some(gpu) => {
                gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
                controller.render(now, gpu);
            }
            None => {
                controller.frame(now);
            }
        }
        true
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
