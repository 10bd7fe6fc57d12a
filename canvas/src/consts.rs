//! Shared constants for the canvas crate.

// ── Colors ──────────────────────────────────────────────────────

/// Background fill applied at the start of every frame.
pub const CLEAR_COLOR: &str = "#111111";

/// Stroke and label color for the grid, origin marker and tile label.
pub const GRID_COLOR: &str = "#ffffff22";

/// Stroke and label color for the world-space cursor marker.
pub const CURSOR_COLOR: &str = "#22aa66";

/// Stroke and label color for the fixed screen-center crosshair.
pub const CROSSHAIR_COLOR: &str = "#ffffff";

// ── Zoom ────────────────────────────────────────────────────────

/// Relative zoom change per wheel step (10% of the current zoom).
pub const ZOOM_STEP: f64 = 0.1;

/// Lower zoom bound.
pub const ZOOM_MIN: f64 = 0.1;

/// Upper zoom bound.
pub const ZOOM_MAX: f64 = 10.0;

// ── Grid ────────────────────────────────────────────────────────

/// Grid spacing in world units.
pub const TILE_SIZE: f64 = 100.0;

/// Radius of the circle the grid is clipped to, in world units.
pub const GRID_RADIUS: f64 = 200.0;

/// Upper bound on grid lines per family accepted from configuration.
pub const MAX_GRID_LINES: usize = 10_000;

// ── Markers (screen pixels unless noted) ────────────────────────

/// Radius of the origin marker, in world units.
pub const ORIGIN_MARKER_RADIUS: f64 = 5.0;

/// Radius of the cursor marker.
pub const CURSOR_MARKER_RADIUS_PX: f64 = 3.0;

/// Font size of the cursor coordinate label.
pub const CURSOR_FONT_PX: f64 = 16.0;

/// Half the arm length of the screen-center crosshair.
pub const CROSSHAIR_HALF_PX: f64 = 5.0;

/// Horizontal offset of every text label from its anchor.
pub const LABEL_OFFSET_X: f64 = 5.0;

/// Vertical offset of every text label from its anchor.
pub const LABEL_OFFSET_Y: f64 = -10.0;
