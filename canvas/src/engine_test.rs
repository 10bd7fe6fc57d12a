#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;
use crate::config::ZoomSettings;

// =============================================================
// Helpers
// =============================================================

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn core_800x600() -> EngineCore {
    let mut core = EngineCore::new(ViewerConfig::default());
    core.set_viewport(800.0, 600.0);
    core
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_default_camera_is_identity() {
    let core = EngineCore::default();
    let cam = core.camera();
    assert_eq!(cam.x, 0.0);
    assert_eq!(cam.y, 0.0);
    assert_eq!(cam.zoom(), 1.0);
}

#[test]
fn core_default_input_is_idle() {
    assert_eq!(EngineCore::default().input, InputState::Idle);
}

#[test]
fn core_default_viewport_is_zero() {
    let core = EngineCore::default();
    assert_eq!(core.viewport_width, 0.0);
    assert_eq!(core.viewport_height, 0.0);
}

#[test]
fn core_default_cursor_is_origin() {
    assert_eq!(EngineCore::default().cursor(), pt(0.0, 0.0));
}

#[test]
fn core_camera_uses_configured_zoom_bounds() {
    let mut config = ViewerConfig::default();
    config.zoom = ZoomSettings { step: 0.1, min: 0.5, max: 2.0 };
    let mut core = EngineCore::new(config);
    for _ in 0..50 {
        core.on_wheel(WheelDelta::Negative);
    }
    assert_eq!(core.camera().zoom(), 2.0);
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn set_viewport_updates_center() {
    let core = core_800x600();
    assert_eq!(core.viewport_center(), pt(400.0, 300.0));
}

#[test]
fn set_viewport_keeps_camera() {
    let mut core = core_800x600();
    core.camera.pan(10.0, 20.0);
    core.camera.set_zoom(3.0);
    core.set_viewport(1024.0, 768.0);
    assert_eq!(core.camera().offset(), pt(-10.0, -20.0));
    assert_eq!(core.camera().zoom(), 3.0);
    assert_eq!(core.viewport_center(), pt(512.0, 384.0));
}

// =============================================================
// Panning
// =============================================================

#[test]
fn pointer_down_starts_panning_with_move_cursor() {
    let mut core = core_800x600();
    let actions = core.on_pointer_down(pt(10.0, 10.0));
    assert!(core.input.is_panning());
    assert_eq!(actions, vec![Action::SetCursor("move".into())]);
}

#[test]
fn pointer_up_stops_panning_and_clears_cursor() {
    let mut core = core_800x600();
    core.on_pointer_down(pt(10.0, 10.0));
    let actions = core.on_pointer_up();
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(actions, vec![Action::SetCursor(String::new())]);
}

#[test]
fn pointer_move_without_drag_does_nothing() {
    let mut core = core_800x600();
    let actions = core.on_pointer_move(pt(50.0, 50.0));
    assert!(actions.is_empty());
    assert_eq!(core.camera().offset(), pt(0.0, 0.0));
}

#[test]
fn drag_pans_by_negative_movement() {
    let mut core = core_800x600();
    core.on_pointer_down(pt(100.0, 100.0));
    let actions = core.on_pointer_move(pt(130.0, 80.0));
    assert!(has_render_needed(&actions));
    assert_eq!(core.camera().offset(), pt(-30.0, 20.0));
}

#[test]
fn drag_is_independent_of_zoom() {
    let mut core = core_800x600();
    core.camera.set_zoom(5.0);
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(7.0, -3.0));
    assert_eq!(core.camera().offset(), pt(-7.0, 3.0));
}

#[test]
fn drag_accumulates_incrementally() {
    let mut core = core_800x600();
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(10.0, 0.0));
    core.on_pointer_move(pt(15.0, 5.0));
    core.on_pointer_move(pt(15.0, 5.0));
    assert_eq!(core.camera().offset(), pt(-15.0, -5.0));
}

#[test]
fn moves_after_release_do_not_pan() {
    let mut core = core_800x600();
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(10.0, 10.0));
    core.on_pointer_up();
    core.on_pointer_move(pt(100.0, 100.0));
    assert_eq!(core.camera().offset(), pt(-10.0, -10.0));
}

#[test]
fn new_drag_starts_from_new_press_point() {
    let mut core = core_800x600();
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(10.0, 0.0));
    core.on_pointer_up();
    core.on_pointer_down(pt(500.0, 500.0));
    core.on_pointer_move(pt(505.0, 500.0));
    assert_eq!(core.camera().offset(), pt(-15.0, 0.0));
}

// =============================================================
// Touch
// =============================================================

#[test]
fn single_touch_drag_pans() {
    let mut core = core_800x600();
    core.on_touch_start(&[pt(100.0, 100.0)]);
    core.on_touch_move(&[pt(90.0, 120.0)]);
    assert_eq!(core.camera().offset(), pt(10.0, -20.0));
}

#[test]
fn multi_touch_start_is_ignored() {
    let mut core = core_800x600();
    let actions = core.on_touch_start(&[pt(0.0, 0.0), pt(50.0, 50.0)]);
    assert!(actions.is_empty());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn multi_touch_move_is_ignored() {
    let mut core = core_800x600();
    core.on_touch_start(&[pt(0.0, 0.0)]);
    let actions = core.on_touch_move(&[pt(10.0, 10.0), pt(20.0, 20.0)]);
    assert!(actions.is_empty());
    assert_eq!(core.camera().offset(), pt(0.0, 0.0));
}

#[test]
fn touch_end_stops_panning() {
    let mut core = core_800x600();
    core.on_touch_start(&[pt(0.0, 0.0)]);
    let actions = core.on_touch_end();
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(actions, vec![Action::SetCursor(String::new())]);
}

// =============================================================
// Cursor tracking
// =============================================================

#[test]
fn mouse_move_updates_world_cursor() {
    let mut core = core_800x600();
    let actions = core.on_mouse_move(pt(450.0, 250.0));
    assert!(has_render_needed(&actions));
    assert_eq!(core.mouse_screen, pt(450.0, 250.0));
    assert_eq!(core.cursor(), pt(50.0, -50.0));
}

#[test]
fn mouse_move_accounts_for_pan_and_zoom() {
    let mut core = core_800x600();
    core.camera.pan(-40.0, 60.0);
    core.camera.set_zoom(2.0);
    core.on_mouse_move(pt(500.0, 300.0));
    // (500 - 400 + 40) / 2 = 70, (300 - 300 - 60) / 2 = -30
    assert_eq!(core.cursor(), pt(70.0, -30.0));
}

#[test]
fn drag_alone_does_not_move_cursor() {
    let mut core = core_800x600();
    core.on_mouse_move(pt(400.0, 300.0));
    core.on_pointer_down(pt(400.0, 300.0));
    core.on_pointer_move(pt(420.0, 300.0));
    assert_eq!(core.cursor(), pt(0.0, 0.0));
    core.on_mouse_move(pt(420.0, 300.0));
    assert_eq!(core.cursor(), pt(0.0, 0.0));
}

// =============================================================
// Wheel zoom
// =============================================================

#[test]
fn wheel_negative_zooms_in() {
    let mut core = core_800x600();
    let actions = core.on_wheel(WheelDelta::Negative);
    assert!(has_render_needed(&actions));
    assert!(approx_eq(core.camera().zoom(), 1.1));
}

#[test]
fn wheel_positive_zooms_out() {
    let mut core = core_800x600();
    core.on_wheel(WheelDelta::Positive);
    assert!(approx_eq(core.camera().zoom(), 0.9));
}

#[test]
fn wheel_keeps_point_under_mouse_fixed() {
    let mut core = core_800x600();
    core.camera.pan(25.0, -15.0);
    core.on_mouse_move(pt(620.0, 110.0));
    let before = core.cursor();
    core.on_wheel(WheelDelta::Negative);
    core.on_wheel(WheelDelta::Negative);
    assert!(approx_eq(core.cursor().x, before.x));
    assert!(approx_eq(core.cursor().y, before.y));
}

#[test]
fn wheel_recomputes_cursor() {
    let mut core = core_800x600();
    core.on_mouse_move(pt(500.0, 300.0));
    core.camera.pan(-100.0, 0.0);
    core.on_wheel(WheelDelta::Positive);
    let expected = core.camera().screen_to_world(pt(500.0, 300.0), pt(400.0, 300.0));
    assert!(approx_eq(core.cursor().x, expected.x));
    assert!(approx_eq(core.cursor().y, expected.y));
}

#[test]
fn wheel_zoom_stays_within_bounds() {
    let mut core = core_800x600();
    for _ in 0..100 {
        core.on_wheel(WheelDelta::Negative);
        assert!(core.camera().zoom() <= 10.0);
    }
    for _ in 0..100 {
        core.on_wheel(WheelDelta::Positive);
        assert!(core.camera().zoom() >= 0.1);
    }
}

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_segments_use_configured_dimensions() {
    let core = core_800x600();
    assert_eq!(core.grid_segments().len(), 10);

    let mut config = ViewerConfig::default();
    config.grid.tile_size = 50.0;
    let core = EngineCore::new(config);
    assert_eq!(core.grid_segments().len(), 18);
}
