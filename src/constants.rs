/// Page hooks the background attaches to.
///
/// Every element is optional; a missing hook disables just that feature.
pub const BG_CANVAS_ID: &str = "bg";
pub const TOOLTIP_ID: &str = "tooltip";
pub const WEBGL_NOTICE_ID: &str = "webglNotice";
pub const YEAR_ID: &str = "year";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav__toggle";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Probe order when checking for a usable WebGL context
pub const WEBGL_CONTEXT_KINDS: [&str; 3] = ["webgl2", "webgl", "experimental-webgl"];

// Tooltip parked far off-screen while hidden
pub const TOOLTIP_HIDDEN_PX: f32 = -9999.0;

pub const ESCAPE_KEY: &str = "Escape";

// Antialiasing samples requested; falls back to 1 when the format can't
pub const MSAA_SAMPLES: u32 = 4;

// Per-draw uniform slots in the dynamic-offset buffer
pub const MAX_DRAWS: usize = 16;
