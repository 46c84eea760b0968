//! Ray picking against the small set of interactive scene objects.

use crate::camera::Camera;
use crate::pointer::PointerState;
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere: take the far root
    let t = -b + sq;
    (t >= 0.0).then_some(t)
}

/// Double-sided disc intersection (plane hit within `radius` of `center`).
#[inline]
pub fn ray_disc(ray: &Ray, center: Vec3, normal: Vec3, radius: f32) -> Option<f32> {
    let denom = normal.dot(ray.direction);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    ((ray.at(t) - center).length_squared() <= radius * radius).then_some(t)
}

/// Camera-facing square of side `size` centred on `center`.
#[inline]
pub fn ray_billboard(ray: &Ray, center: Vec3, right: Vec3, up: Vec3, size: f32) -> Option<f32> {
    let normal = right.cross(up).normalize_or_zero();
    let denom = normal.dot(ray.direction);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let local = ray.at(t) - center;
    let half = size * 0.5;
    (local.dot(right).abs() <= half && local.dot(up).abs() <= half).then_some(t)
}

/// Geometric bounds used for ray tests, before the object's scale is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    Sphere { radius: f32 },
    Disc { radius: f32, normal: Vec3 },
    Billboard { size: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum PickableKind {
    /// Marker sprite that opens the modal matched by `modal_selector`.
    Hotspot { modal_selector: String },
    /// Clicking the ring teleports to the other environment.
    TeleportRing,
    /// Reflective sphere placed for looks; never returned by picks.
    DecoySphere,
}

impl PickableKind {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, PickableKind::DecoySphere)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickId(pub u32);

#[derive(Clone, Debug)]
pub struct Pickable {
    pub id: PickId,
    pub kind: PickableKind,
    pub position: Vec3,
    pub shape: PickShape,
    pub scale: f32,
}

impl Pickable {
    pub fn intersect(&self, ray: &Ray, camera: &Camera) -> Option<f32> {
        let s = self.scale.max(0.0);
        match self.shape {
            PickShape::Sphere { radius } => {
                ray_sphere(ray.origin, ray.direction, self.position, radius * s)
            }
            PickShape::Disc { radius, normal } => ray_disc(ray, self.position, normal, radius * s),
            PickShape::Billboard { size } => {
                let (right, up) = camera.basis();
                ray_billboard(ray, self.position, right, up, size * s)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: PickId,
    pub distance: f32,
    pub point: Vec3,
}

pub type Hits = SmallVec<[Hit; 4]>;

/// The interaction layer's object list plus the last pointer position.
#[derive(Clone, Debug, Default)]
pub struct Raycaster {
    pub pointer: PointerState,
    objects: Vec<Pickable>,
    by_id: FnvHashMap<PickId, usize>,
}

impl Raycaster {
    pub fn new(objects: Vec<Pickable>) -> Self {
        let mut r = Self::default();
        for o in objects {
            r.insert(o);
        }
        r
    }

    pub fn insert(&mut self, object: Pickable) {
        if let Some(&i) = self.by_id.get(&object.id) {
            self.objects[i] = object;
        } else {
            self.by_id.insert(object.id, self.objects.len());
            self.objects.push(object);
        }
    }

    pub fn objects(&self) -> &[Pickable] {
        &self.objects
    }

    pub fn get(&self, id: PickId) -> Option<&Pickable> {
        self.by_id.get(&id).map(|&i| &self.objects[i])
    }

    pub fn get_mut(&mut self, id: PickId) -> Option<&mut Pickable> {
        self.by_id.get(&id).map(|&i| &mut self.objects[i])
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut Pickable> {
        self.objects.iter_mut()
    }

    pub fn update_pointer(&mut self, raw_x: f32, raw_y: f32, width: f32, height: f32) {
        self.pointer.update(raw_x, raw_y, width, height);
    }

    /// Interactive objects under the pointer, nearest first. Equal distances
    /// keep insertion order.
    pub fn pick(&self, camera: &Camera) -> Hits {
        let ray = camera.ray_through_ndc(self.pointer.ndc.x, self.pointer.ndc.y);
        let mut hits: Hits = self
            .objects
            .iter()
            .filter(|o| o.kind.is_interactive())
            .filter_map(|o| {
                o.intersect(&ray, camera).map(|t| Hit {
                    id: o.id,
                    distance: t,
                    point: ray.at(t),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
