use std::time::Duration;

// Shared interaction/animation tuning constants used by the core and the web frontend.

// Pointer disambiguation
pub const DRAG_THRESHOLD: Duration = Duration::from_millis(300); // hold time before a press becomes a drag
pub const DRAG_RELEASE_DELAY: Duration = Duration::from_millis(300); // grace after drag end before taps count again

// Interpolation
pub const POINTER_DAMPING: f64 = 0.05; // fraction of the remaining distance covered per frame

// Focus layout
pub const FOCUS_EDGE_MARGIN: f64 = 0.1; // fraction of the viewport width reserved at each edge
pub const FOCUS_VERTICAL_ANCHOR: f64 = 0.5; // focus point sits on the vertical centre

// Open sweep: the field enters from far right and eases onto the first item
pub const OPEN_SWEEP_START_X_PX: f64 = 3000.0;

// Distortion stage
pub const TIME_STEP_PER_FRAME: f64 = 0.01;
pub const MIN_VIEWPORT_DIM_PX: f64 = 1.0;

// Hover stage; items beyond this count are laid out but never highlighted
pub const MAX_HOVER_ITEMS: usize = 8;

// Item sprites
pub const ITEM_HEIGHT_PX: f64 = 120.0; // font size 80 * 1.5
