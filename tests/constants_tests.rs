// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use showcase_core::constants as scene;

#[test]
#[allow(clippy::assertions_on_constants)]
fn transition_timings_are_sane() {
    assert!(scene::FADE_STEP > 0.0 && scene::FADE_STEP <= 1.0);
    assert!(scene::ZOOM_STEP > 0.0);
    assert!(scene::ZOOM_THRESHOLD > 1.0);
    assert!(scene::ZOOM_INTERVAL_MS < scene::FADE_INTERVAL_MS);
    assert!(MAX_FRAME_DT_MS > scene::FADE_INTERVAL_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fov_range_contains_default() {
    assert!(scene::FOV_MIN_DEG < scene::FOV_MAX_DEG);
    assert!((scene::FOV_MIN_DEG..=scene::FOV_MAX_DEG).contains(&scene::CAMERA_FOV_DEG));
    assert!(scene::FOV_ZOOM_SPEED > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn breathing_band_brackets_unit_scale() {
    assert!(scene::BREATHING_MIN < 1.0 && scene::BREATHING_MAX > 1.0);
    assert!(scene::BREATHING_PERIOD_SEC > 0.0);
}

#[test]
fn layouts_differ_between_environments() {
    assert_ne!(scene::RING_POSITION_A, scene::RING_POSITION_B);
    assert_ne!(scene::SPHERE_POSITION_A, scene::SPHERE_POSITION_B);
    // The ring sits below eye level in both
    assert!(scene::RING_POSITION_A.y < 0.0 && scene::RING_POSITION_B.y < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shading_parameters_are_normalized() {
    for v in [SPHERE_METALNESS, SPHERE_ROUGHNESS, MODEL_METALNESS, MODEL_ROUGHNESS, AMBIENT] {
        assert!((0.0..=1.0).contains(&v));
    }
    assert!(SHADE_LIT < SHADE_REFLECTIVE && SHADE_REFLECTIVE < SHADE_UNLIT);
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn modal_styles_toggle_display() {
    // Bare values for `style.display`, never a full css text
    assert_eq!(MODAL_OPEN_DISPLAY, "flex");
    assert_eq!(MODAL_CLOSED_DISPLAY, "none");
    assert!(!MODAL_OPEN_DISPLAY.contains(':') && !MODAL_CLOSED_DISPLAY.contains(':'));
    assert!(MODAL_CLOSE_SELECTOR.starts_with('.'));
    assert!(scene::DEFAULT_MODAL_SELECTOR.starts_with('.'));
    assert!(!CANVAS_ID.is_empty() && !LOADING_OVERLAY_ID.is_empty());
}
