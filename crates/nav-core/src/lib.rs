pub mod animator;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod focus;
pub mod item;
pub mod mapper;
pub mod params;
pub mod pointer;
pub mod sink;

pub static DISTORT_WGSL: &str = include_str!("../shaders/distort.wgsl");

pub use animator::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use item::*;
pub use mapper::{aspect_ratio, to_normalized, to_pixels, Viewport};
pub use params::*;
pub use pointer::*;
pub use sink::*;
