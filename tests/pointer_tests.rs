// Host-side tests for pointer normalization, drag tracking and the cursor.

use showcase_core::{Cursor, DragTracker, PointerState};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn corners_and_centre_map_to_ndc() {
    let p = PointerState::from_pixels(0.0, 0.0, 800.0, 600.0);
    assert!(approx(p.ndc.x, -1.0) && approx(p.ndc.y, 1.0));

    let p = PointerState::from_pixels(800.0, 600.0, 800.0, 600.0);
    assert!(approx(p.ndc.x, 1.0) && approx(p.ndc.y, -1.0));

    let p = PointerState::from_pixels(400.0, 300.0, 800.0, 600.0);
    assert!(approx(p.ndc.x, 0.0) && approx(p.ndc.y, 0.0));
}

#[test]
fn y_axis_points_up() {
    let upper = PointerState::from_pixels(100.0, 50.0, 200.0, 200.0);
    let lower = PointerState::from_pixels(100.0, 150.0, 200.0, 200.0);
    assert!(upper.ndc.y > 0.0);
    assert!(lower.ndc.y < 0.0);
}

#[test]
fn degenerate_viewport_keeps_previous_position() {
    let mut p = PointerState::from_pixels(200.0, 0.0, 400.0, 400.0);
    let before = p.ndc;
    p.update(10.0, 10.0, 0.0, 400.0);
    assert_eq!(p.ndc, before);
    p.update(10.0, 10.0, 400.0, -1.0);
    assert_eq!(p.ndc, before);
}

#[test]
fn drag_tracker_accumulates_only_while_pressed() {
    let mut d = DragTracker::default();
    assert!(d.moved(10.0, 10.0).is_none());

    d.press(0.0, 0.0);
    let step = d.moved(3.0, 4.0).expect("pressed");
    assert!(approx(step.x, 3.0) && approx(step.y, 4.0));
    assert!(approx(d.travelled, 5.0));
    assert!(d.was_drag(4.0));
    assert!(!d.was_drag(5.0));

    d.release();
    assert!(d.moved(100.0, 100.0).is_none());
    assert!(approx(d.travelled, 5.0));

    d.press(1.0, 1.0);
    assert!(approx(d.travelled, 0.0));
    assert!(!d.was_drag(4.0));
}

#[test]
fn cursor_css_values() {
    assert_eq!(Cursor::default(), Cursor::Auto);
    assert_eq!(Cursor::Auto.css(), "auto");
    assert_eq!(Cursor::Pointer.css(), "pointer");
}
