pub mod keyboard;
pub mod pointer;
pub mod toggle;

use nav_core::NavigationController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use keyboard::{wire_link_focus, wire_toggle_keyup};
pub use pointer::wire_pointer_handlers;
pub use toggle::{fire_toggle_state, wire_toggle};

/// Shared handles every listener closes over.
#[derive(Clone)]
pub struct NavWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub controller: Rc<RefCell<NavigationController>>,
    pub links: Rc<Vec<web::HtmlElement>>,
    pub canvas: web::HtmlCanvasElement,
    pub pixel_ratio: f64,
}
