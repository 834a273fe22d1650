// Host-integration tuning for the web front-end.

// Window resizes are coalesced; the scene restarts once resizing settles.
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

// Theme indicator on the document root (`dark` selects the dark palette).
pub const THEME_ATTR: &str = "data-mode";

// Injected behind the host's own children, never intercepting input.
pub const CONTAINER_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
z-index:-1;pointer-events:none;overflow:hidden;";
pub const CANVAS_STYLE: &str = "width:100%;height:100%;display:block;";
