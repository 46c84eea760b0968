//! CPU-side triangle meshes: procedural primitives for the ring, decoy
//! sphere and hotspot sprite, and the container the glTF loader fills.

use glam::{Mat3, Mat4, Vec3};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn radius(&self) -> f32 {
        (self.max - self.min).length() * 0.5
    }
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Option<Aabb> {
        let first = Vec3::from(*self.positions.first()?);
        let (min, max) = self.positions.iter().fold((first, first), |(lo, hi), p| {
            let p = Vec3::from(*p);
            (lo.min(p), hi.max(p))
        });
        Some(Aabb { min, max })
    }

    /// Bake `m` into positions and normals.
    pub fn transform(&mut self, m: Mat4) {
        let nm = Mat3::from_mat4(m).inverse().transpose();
        for p in &mut self.positions {
            *p = m.transform_point3(Vec3::from(*p)).to_array();
        }
        for n in &mut self.normals {
            *n = (nm * Vec3::from(*n)).normalize_or_zero().to_array();
        }
    }

    /// Area-weighted vertex normals from the triangle list.
    pub fn compute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if a >= acc.len() || b >= acc.len() || c >= acc.len() {
                continue;
            }
            let pa = Vec3::from(self.positions[a]);
            let n = (Vec3::from(self.positions[b]) - pa).cross(Vec3::from(self.positions[c]) - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        self.normals = acc
            .into_iter()
            .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
            .collect();
    }
}

pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData {
        base_color: [1.0; 4],
        ..Default::default()
    };
    for y in 0..=hs {
        let v = y as f32 / hs as f32;
        let theta = v * std::f32::consts::PI;
        for x in 0..=ws {
            let u = x as f32 / ws as f32;
            let phi = u * std::f32::consts::TAU;
            let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            mesh.positions.push((n * radius).to_array());
            mesh.normals.push(n.to_array());
        }
    }
    let row = ws + 1;
    for y in 0..hs {
        for x in 0..ws {
            let a = y * row + x;
            let b = a + row;
            if y != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if y != hs - 1 {
                mesh.indices.extend_from_slice(&[b, b + 1, a + 1]);
            }
        }
    }
    mesh
}

/// Flat disc in the XZ plane facing +Y.
pub fn disc(radius: f32, segments: u32) -> MeshData {
    let segs = segments.max(3);
    let mut mesh = MeshData {
        base_color: [1.0; 4],
        ..Default::default()
    };
    mesh.positions.push([0.0, 0.0, 0.0]);
    mesh.normals.push([0.0, 1.0, 0.0]);
    for i in 0..=segs {
        let a = i as f32 / segs as f32 * std::f32::consts::TAU;
        mesh.positions.push([radius * a.cos(), 0.0, -radius * a.sin()]);
        mesh.normals.push([0.0, 1.0, 0.0]);
    }
    for i in 1..=segs {
        mesh.indices.extend_from_slice(&[0, i, i + 1]);
    }
    mesh
}

/// Unit quad in the XY plane facing +Z, used for camera-facing sprites.
pub fn quad(size: f32) -> MeshData {
    let h = size * 0.5;
    MeshData {
        positions: vec![[-h, -h, 0.0], [h, -h, 0.0], [h, h, 0.0], [-h, h, 0.0]],
        normals: vec![[0.0, 0.0, 1.0]; 4],
        indices: vec![0, 1, 2, 0, 2, 3],
        base_color: [1.0; 4],
    }
}
