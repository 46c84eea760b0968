use crate::error::AssetError;
use crate::geometry::{Aabb, MeshData};
use glam::{Mat4, Quat};

/// Triangle meshes of a GLB model with node transforms and the fixed
/// orientation already baked in.
#[derive(Clone, Debug, Default)]
pub struct ModelData {
    pub meshes: Vec<MeshData>,
}

impl ModelData {
    pub fn bounds(&self) -> Option<Aabb> {
        self.meshes
            .iter()
            .filter_map(MeshData::bounds)
            .reduce(|a, b| Aabb {
                min: a.min.min(b.min),
                max: a.max.max(b.max),
            })
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshData::triangle_count).sum()
    }
}

/// Parse a binary glTF, rotating the whole model by `yaw` radians about +Y.
pub fn parse_glb(bytes: &[u8], yaw: f32) -> Result<ModelData, AssetError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    for buffer in gltf.buffers() {
        if let gltf::buffer::Source::Uri(_) = buffer.source() {
            return Err(AssetError::ExternalBuffer(buffer.index()));
        }
    }
    let blob = gltf.blob.as_deref();
    let root = Mat4::from_quat(Quat::from_rotation_y(yaw));

    let mut model = ModelData::default();
    let scene = gltf.default_scene().or_else(|| gltf.scenes().next());
    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                visit_node(&node, root, blob, &mut model)?;
            }
        }
        None => {
            for mesh in gltf.meshes() {
                read_mesh(&mesh, root, blob, &mut model)?;
            }
        }
    }
    if model.meshes.is_empty() {
        return Err(AssetError::EmptyModel);
    }
    log::info!(
        "[assets] model parsed: meshes={} triangles={}",
        model.meshes.len(),
        model.triangle_count()
    );
    Ok(model)
}

fn visit_node(
    node: &gltf::Node,
    parent: Mat4,
    blob: Option<&[u8]>,
    out: &mut ModelData,
) -> Result<(), AssetError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        read_mesh(&mesh, world, blob, out)?;
    }
    for child in node.children() {
        visit_node(&child, world, blob, out)?;
    }
    Ok(())
}

fn read_mesh(
    mesh: &gltf::Mesh,
    world: Mat4,
    blob: Option<&[u8]>,
    out: &mut ModelData,
) -> Result<(), AssetError> {
    for prim in mesh.primitives() {
        if prim.mode() != gltf::mesh::Mode::Triangles {
            log::warn!("[assets] skipping non-triangle primitive in mesh {}", mesh.index());
            continue;
        }
        let reader = prim.reader(|_| blob);
        let positions: Vec<[f32; 3]> = reader
            .read_positions()
            .ok_or(AssetError::MissingPositions)?
            .collect();
        let indices: Vec<u32> = match reader.read_indices() {
            Some(ix) => ix.into_u32().collect(),
            None => (0..positions.len() as u32).collect(),
        };
        let mut data = MeshData {
            positions,
            normals: Vec::new(),
            indices,
            base_color: prim.material().pbr_metallic_roughness().base_color_factor(),
        };
        match reader.read_normals() {
            Some(n) => data.normals = n.collect(),
            None => data.compute_normals(),
        }
        if data.normals.len() != data.positions.len() {
            data.compute_normals();
        }
        data.transform(world);
        out.meshes.push(data);
    }
    Ok(())
}
