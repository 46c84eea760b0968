//! The scene session: every piece of mutable scene state in one object,
//! created once at bootstrap and handed by reference to event handlers and
//! the frame loop.

use crate::breathing::Breathing;
use crate::camera::{Camera, FovZoom, OrbitControls};
use crate::config::{SceneConfig, SceneMode};
use crate::constants::*;
use crate::environment::{
    EnvVariant, EnvironmentPair, EnvironmentSet, SlotStatus, TeleportLayout,
};
use crate::geometry::Aabb;
use crate::pick::{Hits, PickId, PickShape, Pickable, PickableKind, Raycaster};
use crate::pointer::{Cursor, DragTracker};
use crate::transition::{PostEffect, TransitionController, TransitionEvent, TransitionStrategy};
use glam::Vec3;
use std::time::Duration;

pub const RING_ID: PickId = PickId(1);
pub const SPHERE_ID: PickId = PickId(2);
const HOTSPOT_ID_BASE: u32 = 100;

pub fn hotspot_id(index: usize) -> PickId {
    PickId(HOTSPOT_ID_BASE + index as u32)
}

/// UI effect requested by a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenModal { selector: String },
    StartTransition { to: EnvVariant },
}

/// What changed during one frame tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    pub events: Vec<TransitionEvent>,
    pub swapped_to: Option<EnvVariant>,
    pub marker_scale: f32,
}

pub struct SceneSession {
    pub config: SceneConfig,
    pub camera: Camera,
    pub controls: OrbitControls,
    pub fov_zoom: FovZoom,
    pub raycaster: Raycaster,
    pub transition: TransitionController,
    pub environments: EnvironmentPair<EnvironmentSet>,
    pub layout: TeleportLayout,
    pub breathing: Breathing,
    drag: DragTracker,
    cursor: Cursor,
    pending: Vec<TransitionEvent>,
}

impl SceneSession {
    pub fn new(config: SceneConfig) -> Self {
        let mut camera = Camera::default();
        if config.mode == SceneMode::Showcase {
            camera.eye = Vec3::new(0.0, 0.0, SHOWCASE_CAMERA_DISTANCE);
            camera.target = Vec3::ZERO;
        }
        let controls = OrbitControls::from_eye_target(camera.eye, camera.target);
        let layout = TeleportLayout::default();
        let mut raycaster = Raycaster::default();
        match config.mode {
            SceneMode::Tour => {
                let place = layout.placement(EnvVariant::A);
                raycaster.insert(Pickable {
                    id: RING_ID,
                    kind: PickableKind::TeleportRing,
                    position: place.ring,
                    shape: PickShape::Disc {
                        radius: RING_RADIUS,
                        normal: Vec3::Y,
                    },
                    scale: 1.0,
                });
                raycaster.insert(Pickable {
                    id: SPHERE_ID,
                    kind: PickableKind::DecoySphere,
                    position: place.sphere,
                    shape: PickShape::Sphere {
                        radius: SPHERE_RADIUS,
                    },
                    scale: 1.0,
                });
            }
            SceneMode::Showcase => {
                for (i, h) in config.hotspots.iter().enumerate() {
                    raycaster.insert(Pickable {
                        id: hotspot_id(i),
                        kind: PickableKind::Hotspot {
                            modal_selector: h.modal_selector.clone(),
                        },
                        position: h.anchor,
                        shape: PickShape::Billboard { size: h.size },
                        scale: 1.0,
                    });
                }
            }
        }
        let environments = EnvironmentPair::new(
            EnvironmentSet::new(config.map_a_dir.clone()),
            EnvironmentSet::new(config.map_b_dir.clone()),
        );
        let breathing = Breathing::new(
            BREATHING_MIN,
            BREATHING_MAX,
            BREATHING_PERIOD_SEC,
            config.breathing,
        );
        Self {
            transition: TransitionController::new(config.transition),
            config,
            camera,
            controls,
            fov_zoom: FovZoom::default(),
            raycaster,
            environments,
            layout,
            breathing,
            drag: DragTracker::default(),
            cursor: Cursor::Auto,
            pending: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_viewport(width, height);
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn active_environment(&self) -> EnvVariant {
        self.environments.active_variant()
    }

    pub fn post_effect(&self) -> PostEffect {
        self.transition.effect()
    }

    pub fn set_environment_status(&mut self, variant: EnvVariant, status: SlotStatus) {
        self.environments.get_mut(variant).status = status;
    }

    /// Point the orbit at a loaded model and pin hotspots to its bounds.
    pub fn frame_model(&mut self, bounds: Aabb) {
        let center = bounds.center();
        let radius = bounds.radius().max(1e-3);
        self.controls.target = center;
        self.controls.distance = radius * MODEL_FRAMING_FACTOR;
        self.controls.update(&mut self.camera);
        for (i, h) in self.config.hotspots.iter().enumerate() {
            if let Some(p) = self.raycaster.get_mut(hotspot_id(i)) {
                p.position = center + h.anchor * radius;
            }
        }
    }

    /// Current picks at raw pixel coordinates inside a `width` x `height` viewport.
    pub fn pick_at(&mut self, x: f32, y: f32, width: f32, height: f32) -> Hits {
        self.raycaster.update_pointer(x, y, width, height);
        self.raycaster.pick(&self.camera)
    }

    /// Hover update; returns the cursor the page should show.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) -> Cursor {
        if let Some(d) = self.drag.moved(x, y) {
            self.controls.drag(d.x, d.y, height);
        }
        let hits = self.pick_at(x, y, width, height);
        self.cursor = if hits.is_empty() {
            Cursor::Auto
        } else {
            Cursor::Pointer
        };
        self.cursor
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.drag.press(x, y);
    }

    pub fn on_pointer_up(&mut self) {
        self.drag.release();
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.fov_zoom.apply_to(&mut self.camera, delta_y);
    }

    /// Pick under the click and perform at most one action for the nearest
    /// hit. Clicks during a transition, or ending a drag, do nothing.
    pub fn on_click(&mut self, x: f32, y: f32, width: f32, height: f32) -> Option<Action> {
        let was_drag = self.drag.was_drag(CLICK_DRAG_TOLERANCE_PX);
        self.drag = DragTracker::default();
        if was_drag {
            return None;
        }
        let hits = self.pick_at(x, y, width, height);
        let nearest = hits.first()?;
        if self.transition.is_busy() {
            log::debug!("[click] transition busy; click dropped");
            return None;
        }
        let kind = self.raycaster.get(nearest.id)?.kind.clone();
        match kind {
            PickableKind::Hotspot { modal_selector } => {
                log::info!("[click] hotspot {:?} → {}", nearest.id, modal_selector);
                Some(Action::OpenModal {
                    selector: modal_selector,
                })
            }
            PickableKind::TeleportRing => {
                if !self.transition.request() {
                    return None;
                }
                self.pending.push(TransitionEvent::Started);
                let to = self.active_environment().toggled();
                // The zoom plays with the markers already in their new spots
                if matches!(self.transition.strategy(), TransitionStrategy::Zoom(_)) {
                    self.apply_layout(to);
                }
                log::info!("[transition] start → map{}", to.map_number());
                Some(Action::StartTransition { to })
            }
            PickableKind::DecoySphere => None,
        }
    }

    /// Advance controls, the idle animation and any running transition.
    pub fn tick(&mut self, dt: Duration) -> FrameUpdate {
        self.controls.update(&mut self.camera);

        let mut update = FrameUpdate {
            events: std::mem::take(&mut self.pending),
            ..FrameUpdate::default()
        };
        let start = update.events.len();
        self.transition.advance(dt, &mut update.events);
        if update.events[start..].contains(&TransitionEvent::Swapped) {
            let to = self.environments.swap();
            self.apply_layout(to);
            match &self.environments.get(to).status {
                SlotStatus::Ready => {}
                SlotStatus::Pending => log::warn!(
                    "[transition] map{} is not loaded yet; showing placeholder",
                    to.map_number()
                ),
                SlotStatus::Failed(reason) => log::warn!(
                    "[transition] map{} failed to load ({}); showing placeholder",
                    to.map_number(),
                    reason
                ),
            }
            update.swapped_to = Some(to);
        }

        let idle = !self.transition.is_busy();
        update.marker_scale = self.breathing.advance(dt.as_secs_f32(), idle);
        for p in self.raycaster.objects_mut() {
            if matches!(
                p.kind,
                PickableKind::TeleportRing | PickableKind::Hotspot { .. }
            ) {
                p.scale = update.marker_scale;
            }
        }
        update
    }

    fn apply_layout(&mut self, variant: EnvVariant) {
        let place = self.layout.placement(variant);
        if let Some(ring) = self.raycaster.get_mut(RING_ID) {
            ring.position = place.ring;
        }
        if let Some(sphere) = self.raycaster.get_mut(SPHERE_ID) {
            sphere.position = place.sphere;
        }
    }
}
