// Browser-side constants. Interaction thresholds live in nav_core::constants.

// DOM hooks
pub const NAV_SELECTOR: &str = ".main-nav";
pub const LINK_SELECTOR: &str = "a";
pub const TOGGLE_ID: &str = "main-nav-toggle";
pub const TOGGLE_CLASS: &str = "nav-toggle";
pub const CANVAS_CLASS: &str = "main-nav__canvas";

// Custom events fired by the toggle and consumed by the navigation
pub const EVENT_OPEN: &str = "navOpen";
pub const EVENT_CLOSE: &str = "navClose";

// Optional data-attribute overrides on the nav element
pub const ATTR_DRAG_THRESHOLD_MS: &str = "data-drag-threshold-ms";
pub const ATTR_RELEASE_DELAY_MS: &str = "data-release-delay-ms";
pub const ATTR_DAMPING: &str = "data-damping";

// Title rasterization
pub const FONT_FAMILY: &str = "tenez";
pub const FONT_SIZE_PX: f64 = 80.0;
pub const FONT_WEIGHT: u32 = 400;
pub const ITEM_PADDING_PX: f64 = 50.0; // horizontal padding added to each measured title
pub const ITEM_HEIGHT_FACTOR: f64 = 1.5; // sprite height relative to font size
pub const BASELINE_INSET_FACTOR: f64 = 0.2; // baseline lifted from the sprite bottom
pub const TEXT_FILL: &str = "rgba(223,143,86,1)";

// GPU
pub const MAX_ATLAS_WIDTH_PX: u32 = 8192; // default wgpu 2D texture limit
pub const CLEAR_RGB: [f64; 3] = [0.0075, 0.0075, 0.0075]; // #151515 in linear space
