#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::ZoomSettings;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same point with its coordinates exchanged.
    #[must_use]
    pub fn swap(self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

/// Camera state for pan/zoom on the infinite grid.
///
/// `x` / `y` are the offset subtracted from the viewport center to place the
/// world origin, in raw screen pixels. `zoom` is a scale factor (1.0 = no zoom)
/// and always stays within the bounds of the camera's [`ZoomSettings`].
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    zoom: f64,
    settings: ZoomSettings,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl Camera {
    /// A camera at the origin with zoom 1.0 (clamped into `settings`).
    #[must_use]
    pub fn new(settings: ZoomSettings) -> Self {
        Self { x: 0.0, y: 0.0, zoom: clamp_zoom(1.0, settings), settings }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }

    /// The pan offset as a point.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Set the zoom directly, clamped into the configured bounds.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom, self.settings);
    }

    /// Move the camera by a drag of `(dx, dy)` screen pixels.
    ///
    /// The offset is stored in raw pixels, so the same drag moves the camera by
    /// the same amount at every zoom level.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x -= dx;
        self.y -= dy;
    }

    /// Apply one wheel step and keep `anchor` visually fixed.
    ///
    /// The step is relative to the current zoom, so every wheel tick changes the
    /// zoom by the same fraction. The offset moves by `anchor * (old - new)`.
    /// Returns the new zoom.
    pub fn zoom_by(&mut self, raw_delta: f64, anchor: Point) -> f64 {
        let old_zoom = self.zoom;
        self.set_zoom(old_zoom - raw_delta * self.settings.step * old_zoom);
        let zoom_difference = old_zoom - self.zoom;
        self.x -= anchor.x * zoom_difference;
        self.y -= anchor.y * zoom_difference;
        self.zoom
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport_center: Point) -> Point {
        Point {
            x: (screen.x - viewport_center.x + self.x) / self.zoom,
            y: (screen.y - viewport_center.y + self.y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport_center: Point) -> Point {
        Point {
            x: world.x * self.zoom - self.x + viewport_center.x,
            y: world.y * self.zoom - self.y + viewport_center.y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}

/// `max(min, min(max, zoom))`, tolerant of an inverted range.
fn clamp_zoom(zoom: f64, settings: ZoomSettings) -> f64 {
    settings.min.max(settings.max.min(zoom))
}
