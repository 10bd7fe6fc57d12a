use super::*;

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn idle_is_not_panning() {
    assert!(!InputState::Idle.is_panning());
}

#[test]
fn panning_is_panning() {
    let state = InputState::Panning { last_screen: Point::new(1.0, 2.0) };
    assert!(state.is_panning());
}

#[test]
fn panning_carries_last_screen() {
    let state = InputState::Panning { last_screen: Point::new(3.0, 4.0) };
    let InputState::Panning { last_screen } = state else {
        panic!("expected panning");
    };
    assert_eq!(last_screen, Point::new(3.0, 4.0));
}

#[test]
fn input_state_debug_format() {
    assert_eq!(format!("{:?}", InputState::Idle), "Idle");
}

// =============================================================
// single_touch
// =============================================================

#[test]
fn single_touch_accepts_one_point() {
    assert_eq!(single_touch(&[Point::new(5.0, 6.0)]), Some(Point::new(5.0, 6.0)));
}

#[test]
fn single_touch_rejects_none() {
    assert_eq!(single_touch(&[]), None);
}

#[test]
fn single_touch_rejects_multi_touch() {
    assert_eq!(single_touch(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), None);
}

#[test]
fn drag_cursor_is_move() {
    assert_eq!(DRAG_CURSOR, "move");
}
