//! Rendering: draws one frame of engine state onto a 2D surface.
//!
//! Drawing goes through the [`Surface`] trait so the frame can be recorded in
//! tests; the browser implementation forwards to
//! [`web_sys::CanvasRenderingContext2d`]. This module reads engine state and
//! produces pixels; it does not mutate any application state.
//!
//! Fallible surface calls propagate the surface's error type. The top-level
//! caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::consts::{
    CROSSHAIR_HALF_PX, CURSOR_FONT_PX, CURSOR_MARKER_RADIUS_PX, LABEL_OFFSET_X, LABEL_OFFSET_Y, ORIGIN_MARKER_RADIUS,
};
use crate::engine::EngineCore;

/// The subset of a 2D drawing context the renderer needs.
pub trait Surface {
    type Error;

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&self);
    fn close_path(&self);
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    /// Add a circular arc from `start` to `end` (radians) to the current path.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a negative radius.
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;
    /// # Errors
    ///
    /// Returns `Err` if the surface rejects the text.
    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
    fn stroke(&self);
    fn save(&self);
    fn restore(&self);
    /// # Errors
    ///
    /// Returns `Err` if the transform cannot be applied.
    fn translate(&self, x: f64, y: f64) -> Result<(), Self::Error>;
    /// # Errors
    ///
    /// Returns `Err` if the transform cannot be applied.
    fn scale(&self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn set_stroke_style(&self, style: &str);
    fn set_fill_style(&self, style: &str);
    fn set_line_width(&self, width: f64);
    fn set_font(&self, font: &str);
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)
    }

    fn fill_text(&self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::translate(self, x, y)
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::scale(self, x, y)
    }

    fn set_stroke_style(&self, style: &str) {
        self.set_stroke_style_str(style);
    }

    fn set_fill_style(&self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_line_width(&self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_font(&self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }
}

/// Draw the full frame: background, grid, cursor and screen-center crosshair.
///
/// # Errors
///
/// Returns `Err` if any fallible surface call fails.
pub fn draw<S: Surface>(surface: &S, core: &EngineCore) -> Result<(), S::Error> {
    let camera = core.camera();
    let center = core.viewport_center();

    // Layer 1: clear.
    surface.set_fill_style(&core.config.clear_color);
    surface.fill_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    // Layer 2: world space.
    surface.save();
    surface.translate(center.x - camera.x, center.y - camera.y)?;
    surface.scale(camera.zoom(), camera.zoom())?;
    draw_grid(surface, core)?;
    draw_cursor(surface, core)?;
    surface.restore();

    // Layer 3: screen space.
    draw_screen_center(surface, core)
}

/// Grid chords, origin marker and tile-size label, as one stroked path.
fn draw_grid<S: Surface>(surface: &S, core: &EngineCore) -> Result<(), S::Error> {
    let grid = &core.config.grid;

    surface.begin_path();
    surface.set_line_width(1.0 / core.camera.zoom());
    surface.set_stroke_style(&grid.color);
    surface.set_fill_style(&grid.color);

    surface.fill_text(&format!("{0}x{0}", grid.tile_size), LABEL_OFFSET_X, LABEL_OFFSET_Y)?;
    surface.arc(0.0, 0.0, ORIGIN_MARKER_RADIUS, 0.0, TAU)?;

    for segment in core.grid_segments() {
        surface.move_to(segment.a.x, segment.a.y);
        surface.line_to(segment.b.x, segment.b.y);
    }

    surface.close_path();
    surface.stroke();
    Ok(())
}

/// Cursor marker and its world coordinates, sized to stay constant on screen.
fn draw_cursor<S: Surface>(surface: &S, core: &EngineCore) -> Result<(), S::Error> {
    let scale = 1.0 / core.camera.zoom();
    let cursor = core.cursor();

    surface.begin_path();
    surface.set_font(&format!("{}px monospace", CURSOR_FONT_PX * scale));
    surface.set_line_width(scale);
    surface.set_fill_style(&core.config.cursor_color);
    surface.set_stroke_style(&core.config.cursor_color);
    surface.arc(cursor.x, cursor.y, CURSOR_MARKER_RADIUS_PX * scale, 0.0, TAU)?;
    surface.stroke();
    surface.close_path();
    surface.fill_text(
        &coordinate_label(cursor),
        cursor.x + LABEL_OFFSET_X * scale,
        cursor.y + LABEL_OFFSET_Y * scale,
    )
}

/// Fixed crosshair at the viewport center with the camera offset beside it.
fn draw_screen_center<S: Surface>(surface: &S, core: &EngineCore) -> Result<(), S::Error> {
    let center = core.viewport_center();
    let arm = CROSSHAIR_HALF_PX;

    surface.begin_path();
    surface.set_fill_style(&core.config.crosshair_color);
    surface.set_stroke_style(&core.config.crosshair_color);

    surface.move_to(center.x - arm, center.y - arm);
    surface.line_to(center.x + arm, center.y + arm);
    surface.move_to(center.x + arm, center.y - arm);
    surface.line_to(center.x - arm, center.y + arm);
    surface.fill_text(
        &coordinate_label(core.camera.offset()),
        center.x + LABEL_OFFSET_X,
        center.y + LABEL_OFFSET_Y,
    )?;

    surface.stroke();
    surface.close_path();
    Ok(())
}

/// `"x y"` with both coordinates rounded to integers (halves away from zero).
///
/// Negative values that round to zero print as `-0`; an exact `-0.0` prints as `0`.
#[must_use]
pub fn coordinate_label(p: Point) -> String {
    format!("{:.0} {:.0}", fixed(p.x), fixed(p.y))
}

fn fixed(v: f64) -> f64 {
    (v + 0.0).round()
}
