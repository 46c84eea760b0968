//! Perspective camera plus the two controllers that drive it: orbit
//! rotation with damping and mouse-wheel field-of-view zoom.
//!
//! Everything here is plain math over `glam` and runs on the host as well as
//! in the browser.

use crate::constants::*;
use crate::pick::Ray;
use glam::{Mat4, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            target: CAMERA_TARGET,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Inverse of projection * rotation-only view, for skybox direction lookup.
    pub fn inverse_sky_view_projection(&self) -> Mat4 {
        let forward = (self.target - self.eye).normalize_or_zero();
        let view = Mat4::look_to_rh(Vec3::ZERO, forward, self.up);
        (self.projection_matrix() * view).inverse()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Camera right and up vectors in world space (used for billboards).
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates (`x`, `y` in \[-1, 1\], +y up).
    pub fn ray_through_ndc(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            direction: (p1 - self.eye).normalize_or_zero(),
        }
    }
}

/// Orbit controller around a target point, with optional damping.
///
/// Pointer drags queue rotation deltas; [`OrbitControls::update`] applies a
/// fraction of the pending delta each frame when damping is enabled, which
/// gives the camera a short inertial glide after release.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub enable_damping: bool,
    pub damping: f32,
    pub rotate_speed: f32,
    pending_yaw: f32,
    pending_pitch: f32,
}

impl OrbitControls {
    /// Build controls that reproduce the given eye/target placement.
    pub fn from_eye_target(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-6);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            target,
            distance,
            yaw,
            pitch,
            enable_damping: true,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
        }
    }

    /// Queue a rotation from a pointer drag of `dx`,`dy` pixels on a viewport
    /// `viewport_height` pixels tall.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let k = std::f32::consts::TAU * self.rotate_speed / viewport_height;
        self.pending_yaw -= dx * k;
        self.pending_pitch += dy * k;
    }

    pub fn is_settled(&self) -> bool {
        self.pending_yaw.abs() < 1e-6 && self.pending_pitch.abs() < 1e-6
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + Vec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    /// Advance one frame and write the resulting placement into `camera`.
    pub fn update(&mut self, camera: &mut Camera) {
        if self.enable_damping {
            self.yaw += self.pending_yaw * self.damping;
            self.pitch += self.pending_pitch * self.damping;
            self.pending_yaw *= 1.0 - self.damping;
            self.pending_pitch *= 1.0 - self.damping;
        } else {
            self.yaw += self.pending_yaw;
            self.pitch += self.pending_pitch;
            self.pending_yaw = 0.0;
            self.pending_pitch = 0.0;
        }
        self.pitch = self.pitch.clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
        camera.eye = self.eye();
        camera.target = self.target;
    }
}

/// Mouse-wheel zoom implemented by narrowing or widening the field of view.
#[derive(Clone, Copy, Debug)]
pub struct FovZoom {
    pub min_deg: f32,
    pub max_deg: f32,
    pub speed: f32,
}

impl Default for FovZoom {
    fn default() -> Self {
        Self {
            min_deg: FOV_MIN_DEG,
            max_deg: FOV_MAX_DEG,
            speed: FOV_ZOOM_SPEED,
        }
    }
}

impl FovZoom {
    /// Returns the new vertical FOV in degrees for a wheel event.
    /// Negative `delta_y` (wheel up) zooms in.
    pub fn apply(&self, fov_deg: f32, delta_y: f64) -> f32 {
        if delta_y < 0.0 {
            (fov_deg / self.speed).max(self.min_deg)
        } else {
            (fov_deg * self.speed).min(self.max_deg)
        }
    }

    pub fn apply_to(&self, camera: &mut Camera, delta_y: f64) {
        let fov = self.apply(camera.fovy_radians.to_degrees(), delta_y);
        camera.fovy_radians = fov.to_radians();
    }
}
