//! Shared numeric constants for the canvas crate.

// ── Logical canvas ──────────────────────────────────────────────

/// Side length of the logical canvas, identical on both axes.
pub const CANVAS_EXTENT: u32 = 16_384;

// ── Viewport chrome ─────────────────────────────────────────────

/// Horizontal chrome (toolbar + vertical scrollbar) subtracted from the window width.
pub const CHROME_MARGIN_X: u32 = 100;

/// Vertical chrome (horizontal scrollbar) subtracted from the window height.
pub const CHROME_MARGIN_Y: u32 = 24;

// ── Sprites ─────────────────────────────────────────────────────

/// Default atlas frame edge length in logical units.
pub const DEFAULT_FRAME_SIZE: u32 = 16;

/// Wheel adjustment per tick, applied to scale or rotation (radians).
pub const WHEEL_STEP: f64 = 0.1;

/// Opacity of the placement preview ghost.
pub const PREVIEW_ALPHA: f64 = 0.5;

/// Default texture location, relative to the served page.
pub const DEFAULT_TEXTURE_URL: &str = "assets/sprites.png";
