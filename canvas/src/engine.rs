use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::config::ViewerConfig;
use crate::grid::{GridSegment, grid_in_circle};
use crate::input::{DRAG_CURSOR, InputState, single_touch};
use crate::render;
use crate::wheel::WheelDelta;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the canvas CSS cursor; an empty string restores the default.
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: ViewerConfig,
    pub camera: Camera,
    pub input: InputState,
    /// Last raw mouse position in screen space.
    pub mouse_screen: Point,
    /// World-space point under `mouse_screen`.
    pub cursor: Point,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            camera: Camera::new(config.zoom),
            config,
            input: InputState::default(),
            mouse_screen: Point::default(),
            cursor: Point::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions. Camera and cursor are left as they are.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        log::debug!("viewport resized to {width}x{height}");
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Screen-space center of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    // --- Input events ---

    /// Start a pan gesture.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::SetCursor(DRAG_CURSOR.to_owned())]
    }

    /// Pan by the pointer movement since the previous event, if a pan is active.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Panning { last_screen } = self.input else {
            return Vec::new();
        };
        self.camera.pan(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
        self.input = InputState::Panning { last_screen: screen_pt };
        vec![Action::RenderNeeded]
    }

    /// End the pan gesture.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        vec![Action::SetCursor(String::new())]
    }

    /// Touch start; only a single finger starts a pan.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        match single_touch(touches) {
            Some(pt) => self.on_pointer_down(pt),
            None => Vec::new(),
        }
    }

    /// Touch move; ignored unless exactly one finger is down.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match single_touch(touches) {
            Some(pt) => self.on_pointer_move(pt),
            None => Vec::new(),
        }
    }

    pub fn on_touch_end(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    /// Track the raw mouse position anywhere in the window.
    pub fn on_mouse_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.mouse_screen = screen_pt;
        self.update_cursor();
        vec![Action::RenderNeeded]
    }

    /// Zoom one wheel step around the cursor.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.camera.zoom_by(delta.value(), self.cursor);
        self.update_cursor();
        vec![Action::RenderNeeded]
    }

    fn update_cursor(&mut self) {
        self.cursor = self.camera.screen_to_world(self.mouse_screen, self.viewport_center());
    }

    // --- Queries ---

    /// Grid chords for the configured radius and tile size, computed fresh.
    #[must_use]
    pub fn grid_segments(&self) -> Vec<GridSegment> {
        grid_in_circle(self.config.grid.radius, self.config.grid.tile_size)
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// World-space cursor position.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: ViewerConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    // --- Viewport ---

    /// Resize the canvas backing store and the viewport to `width` x `height` CSS pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.core.set_viewport(width, height);
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be applied.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_down(screen_pt);
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be applied.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_move(screen_pt);
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be applied.
    pub fn on_pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_up();
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be applied.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Result<(), JsValue> {
        let actions = self.core.on_touch_start(touches);
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be applied.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Result<(), JsValue> {
        let actions = self.core.on_touch_move(touches);
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor style cannot be applied.
    pub fn on_touch_end(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_touch_end();
        self.apply(&actions)
    }

    pub fn on_mouse_move(&mut self, screen_pt: Point) {
        self.core.on_mouse_move(screen_pt);
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) {
        self.core.on_wheel(delta);
    }

    fn apply(&self, actions: &[Action]) -> Result<(), JsValue> {
        for action in actions {
            if let Action::SetCursor(cursor) = action {
                self.canvas.style().set_property("cursor", cursor)?;
            }
        }
        Ok(())
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.core.cursor()
    }
}
