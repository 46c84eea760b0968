// Host-side tests for the scene session: clicks, transitions and layout.

use glam::{Vec2, Vec3};
use showcase_core::constants::*;
use showcase_core::{
    hotspot_id, Action, Aabb, Cursor, EnvVariant, SceneConfig, SceneMode, SceneSession,
    SlotStatus, TransitionEvent, RING_ID, SPHERE_ID,
};
use std::time::Duration;

const W: f32 = 800.0;
const H: f32 = 600.0;
const FADE_TICK: Duration = Duration::from_millis(20);

fn tour() -> SceneSession {
    let mut s = SceneSession::new(SceneConfig::default());
    s.resize(W, H);
    s
}

fn showcase() -> SceneSession {
    let config = SceneConfig {
        mode: SceneMode::Showcase,
        ..SceneConfig::default()
    };
    let mut s = SceneSession::new(config);
    s.resize(W, H);
    s
}

/// Pixel position of a world point on the session's viewport.
fn screen_of(s: &SceneSession, world: Vec3) -> Vec2 {
    let ndc = s.camera.view_projection().project_point3(world);
    Vec2::new((ndc.x + 1.0) * 0.5 * W, (1.0 - ndc.y) * 0.5 * H)
}

fn ring_on_screen(s: &SceneSession) -> Vec2 {
    let ring = s.raycaster.get(RING_ID).expect("ring").position;
    screen_of(s, ring)
}

#[test]
fn tour_starts_on_map_one_with_layout_a() {
    let s = tour();
    assert_eq!(s.active_environment(), EnvVariant::A);
    assert!(!s.transition.is_busy());
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_A));
    assert_eq!(s.raycaster.get(SPHERE_ID).map(|p| p.position), Some(SPHERE_POSITION_A));
    assert!(s.raycaster.get(hotspot_id(0)).is_none());
}

#[test]
fn ring_click_runs_one_fade_cycle_and_moves_layout() {
    let mut s = tour();
    s.set_environment_status(EnvVariant::B, SlotStatus::Ready);
    let p = ring_on_screen(&s);

    let action = s.on_click(p.x, p.y, W, H);
    assert_eq!(action, Some(Action::StartTransition { to: EnvVariant::B }));
    assert!(s.transition.is_busy());

    let mut events = Vec::new();
    let mut swapped = Vec::new();
    for _ in 0..40 {
        let update = s.tick(FADE_TICK);
        events.extend(update.events);
        swapped.extend(update.swapped_to);
    }
    assert!(!s.transition.is_busy());
    assert_eq!(
        events,
        vec![
            TransitionEvent::Started,
            TransitionEvent::Swapped,
            TransitionEvent::Finished
        ]
    );
    assert_eq!(swapped, vec![EnvVariant::B]);
    assert_eq!(s.active_environment(), EnvVariant::B);
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_B));
    assert_eq!(s.raycaster.get(SPHERE_ID).map(|p| p.position), Some(SPHERE_POSITION_B));
    assert_eq!(s.post_effect().opacity, 1.0);
}

#[test]
fn clicks_while_busy_do_nothing() {
    let mut s = tour();
    let p = ring_on_screen(&s);
    assert!(s.on_click(p.x, p.y, W, H).is_some());
    s.tick(FADE_TICK);
    assert_eq!(s.on_click(p.x, p.y, W, H), None);

    let mut swaps = 0;
    for _ in 0..60 {
        if s.tick(FADE_TICK).swapped_to.is_some() {
            swaps += 1;
        }
    }
    assert_eq!(swaps, 1);
    assert_eq!(s.transition.completed_cycles(), 1);
    assert_eq!(s.active_environment(), EnvVariant::B);
}

#[test]
fn second_teleport_returns_to_map_one() {
    let mut s = tour();
    for expected in [EnvVariant::B, EnvVariant::A] {
        let p = ring_on_screen(&s);
        let action = s.on_click(p.x, p.y, W, H);
        assert_eq!(action, Some(Action::StartTransition { to: expected }));
        for _ in 0..40 {
            s.tick(FADE_TICK);
        }
        assert_eq!(s.active_environment(), expected);
        // Turn around to face the ring in its new spot
        s.controls.yaw += std::f32::consts::PI;
        s.controls.update(&mut s.camera);
    }
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_A));
}

#[test]
fn zoom_session_swaps_at_threshold() {
    let config = SceneConfig::from_query("?transition=zoom").0;
    let mut s = SceneSession::new(config);
    s.resize(W, H);
    let p = ring_on_screen(&s);
    assert!(s.on_click(p.x, p.y, W, H).is_some());

    // Markers jump to the map 2 layout as the zoom starts
    assert_eq!(s.active_environment(), EnvVariant::A);
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_B));
    assert_eq!(s.raycaster.get(SPHERE_ID).map(|p| p.position), Some(SPHERE_POSITION_B));
    let update = s.tick(Duration::from_millis(5));
    assert_eq!(update.events[0], TransitionEvent::Started);
    assert_eq!(s.active_environment(), EnvVariant::A);
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_B));

    let mut zoom_seen = s.post_effect().zoom_enabled;
    let mut ticks = 1;
    while s.transition.is_busy() {
        let update = s.tick(Duration::from_millis(5));
        ticks += 1;
        if s.transition.is_busy() {
            zoom_seen |= s.post_effect().zoom_enabled;
        } else {
            assert_eq!(update.swapped_to, Some(EnvVariant::B));
        }
        assert!(ticks <= 40);
    }
    assert!(zoom_seen);
    assert_eq!(ticks, 40);
    assert_eq!(s.post_effect().zoom, 1.0);
    assert_eq!(s.active_environment(), EnvVariant::B);
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_B));
}

#[test]
fn fade_keeps_layout_until_the_swap() {
    let mut s = tour();
    let p = ring_on_screen(&s);
    assert!(s.on_click(p.x, p.y, W, H).is_some());
    for _ in 0..19 {
        s.tick(FADE_TICK);
    }
    assert_eq!(s.active_environment(), EnvVariant::A);
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_A));
    assert_eq!(s.tick(FADE_TICK).swapped_to, Some(EnvVariant::B));
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.position), Some(RING_POSITION_B));
}

#[test]
fn swap_to_failed_map_still_completes() {
    let mut s = tour();
    s.set_environment_status(EnvVariant::B, SlotStatus::Failed("HTTP 404".to_string()));
    let p = ring_on_screen(&s);
    assert!(s.on_click(p.x, p.y, W, H).is_some());
    for _ in 0..40 {
        s.tick(FADE_TICK);
    }
    assert!(!s.transition.is_busy());
    assert_eq!(s.active_environment(), EnvVariant::B);
    assert_eq!(
        s.environments.get(EnvVariant::B).status,
        SlotStatus::Failed("HTTP 404".to_string())
    );
}

#[test]
fn decoy_sphere_click_does_nothing() {
    let mut s = tour();
    let p = screen_of(&s, SPHERE_POSITION_A);
    assert_eq!(s.on_click(p.x, p.y, W, H), None);
    assert!(!s.transition.is_busy());
}

#[test]
fn empty_space_click_does_nothing() {
    let mut s = tour();
    assert_eq!(s.on_click(W * 0.5, 5.0, W, H), None);
    assert!(!s.transition.is_busy());
}

#[test]
fn drag_suppresses_the_following_click() {
    let mut s = tour();
    let p = ring_on_screen(&s);
    s.on_pointer_down(p.x - 60.0, p.y);
    s.on_pointer_move(p.x, p.y, W, H);
    s.on_pointer_up();
    assert_eq!(s.on_click(p.x, p.y, W, H), None);
    assert!(!s.transition.is_busy());

    // The next plain click is honoured again
    let p = ring_on_screen(&s);
    assert!(s.on_click(p.x, p.y, W, H).is_some());
}

#[test]
fn hover_sets_pointer_cursor_over_ring_only() {
    let mut s = tour();
    let p = ring_on_screen(&s);
    assert_eq!(s.on_pointer_move(p.x, p.y, W, H), Cursor::Pointer);
    assert_eq!(s.cursor(), Cursor::Pointer);

    let sphere = screen_of(&s, SPHERE_POSITION_A);
    assert_eq!(s.on_pointer_move(sphere.x, sphere.y, W, H), Cursor::Auto);
    assert_eq!(s.on_pointer_move(W * 0.5, 5.0, W, H), Cursor::Auto);
}

#[test]
fn hotspot_click_opens_modal_in_showcase() {
    let mut s = showcase();
    assert!(s.raycaster.get(RING_ID).is_none());
    let anchor = s.raycaster.get(hotspot_id(0)).expect("hotspot").position;
    let p = screen_of(&s, anchor);
    let action = s.on_click(p.x, p.y, W, H);
    assert_eq!(
        action,
        Some(Action::OpenModal {
            selector: DEFAULT_MODAL_SELECTOR.to_string()
        })
    );
    assert!(!s.transition.is_busy());
}

#[test]
fn framing_a_model_pins_hotspots_to_its_bounds() {
    let mut s = showcase();
    let bounds = Aabb {
        min: Vec3::new(-2.0, -1.0, -1.0),
        max: Vec3::new(2.0, 3.0, 1.0),
    };
    s.frame_model(bounds);
    assert_eq!(s.controls.target, bounds.center());
    let expected = bounds.center() + s.config.hotspots[0].anchor * bounds.radius();
    let got = s.raycaster.get(hotspot_id(0)).expect("hotspot").position;
    assert!((got - expected).length() < 1e-5);

    let p = screen_of(&s, got);
    assert!(matches!(
        s.on_click(p.x, p.y, W, H),
        Some(Action::OpenModal { .. })
    ));
}

#[test]
fn markers_breathe_while_idle() {
    let mut s = tour();
    let update = s.tick(Duration::from_millis(500));
    assert!(update.marker_scale > 1.0);
    assert_eq!(s.raycaster.get(RING_ID).map(|p| p.scale), Some(update.marker_scale));
    assert_eq!(s.raycaster.get(SPHERE_ID).map(|p| p.scale), Some(1.0));
}

#[test]
fn wheel_zoom_is_clamped() {
    let mut s = tour();
    for _ in 0..50 {
        s.on_wheel(-100.0);
    }
    assert!((s.camera.fovy_radians.to_degrees() - FOV_MIN_DEG).abs() < 1e-3);
    for _ in 0..50 {
        s.on_wheel(100.0);
    }
    assert!((s.camera.fovy_radians.to_degrees() - FOV_MAX_DEG).abs() < 1e-3);
}
