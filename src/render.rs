use crate::constants::*;
use glam::{Mat4, Quat, Vec3};
use showcase_core::constants::{HOTSPOT_COLOR, RING_COLOR, SPHERE_COLOR};
use showcase_core::{
    geometry, CubemapImage, EnvVariant, ModelData, PickId, PickShape, Pickable, PickableKind,
    Raycaster, SceneSession,
};
use web_sys as web;

mod helpers;
mod meshes;
mod post;
mod skybox;
mod targets;
use meshes::{DrawItem, MeshResources, ObjectUniforms};
use skybox::EnvCube;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    inv_sky: [[f32; 4]; 4],
    eye: [f32; 4],
    light: [f32; 4],
}

enum ItemSource {
    Pickable(PickId),
    Model,
}

struct SceneItem {
    draw: DrawItem,
    source: ItemSource,
    color: [f32; 4],
    params: [f32; 4],
    visible: bool,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    env_bgl: wgpu::BindGroupLayout,
    env: [EnvCube; 2],
    sky_pipeline: wgpu::RenderPipeline,
    meshes: MeshResources,
    items: Vec<SceneItem>,

    post: post::PostResources,
    bg_scene: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });
        let globals_buffer = helpers::uniform_buffer::<Globals>(&device, "globals");
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let env_bgl = skybox::create_env_layout(&device);
        let placeholder = CubemapImage::placeholder();
        let env = [EnvVariant::A, EnvVariant::B].map(|v| {
            skybox::upload_cubemap(
                &device,
                &queue,
                &env_bgl,
                &linear_sampler,
                &placeholder,
                &format!("env_placeholder_map{}", v.map_number()),
            )
        });
        let sky_pipeline = skybox::create_skybox_pipeline(&device, &globals_bgl, &env_bgl);
        let meshes = meshes::create_mesh_resources(&device, &globals_bgl, &env_bgl);

        let post = post::create_post_resources(&device, format);
        let bg_scene =
            post::create_scene_bind_group(&device, &post, &linear_sampler, &targets.scene_view);

        log::info!("[render] WebGPU ready: {}x{} {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            linear_sampler,
            globals_buffer,
            globals_bg,
            env_bgl,
            env,
            sky_pipeline,
            meshes,
            items: Vec::new(),
            post,
            bg_scene,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_RGB[0],
                g: CLEAR_RGB[1],
                b: CLEAR_RGB[2],
                a: 1.0,
            },
        })
    }

    /// Create GPU meshes for every pickable the session knows about.
    pub fn add_pickables(&mut self, raycaster: &Raycaster) {
        for p in raycaster.objects() {
            let (mesh, color, params) = match (&p.kind, p.shape) {
                (PickableKind::DecoySphere, PickShape::Sphere { radius }) => (
                    geometry::uv_sphere(radius, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
                    SPHERE_COLOR,
                    [
                        SPHERE_METALNESS,
                        SPHERE_ROUGHNESS,
                        SPHERE_ENV_INTENSITY,
                        SHADE_REFLECTIVE,
                    ],
                ),
                (_, PickShape::Sphere { radius }) => (
                    geometry::uv_sphere(radius, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS),
                    HOTSPOT_COLOR,
                    [0.0, 1.0, 0.0, SHADE_UNLIT],
                ),
                (PickableKind::TeleportRing, PickShape::Disc { radius, .. }) => (
                    geometry::disc(radius, RING_SEGMENTS),
                    RING_COLOR,
                    [0.0, 1.0, 0.0, SHADE_UNLIT],
                ),
                (_, PickShape::Disc { radius, .. }) => (
                    geometry::disc(radius, RING_SEGMENTS),
                    HOTSPOT_COLOR,
                    [0.0, 1.0, 0.0, SHADE_UNLIT],
                ),
                (_, PickShape::Billboard { size }) => (
                    geometry::quad(size),
                    HOTSPOT_COLOR,
                    [0.0, 1.0, 0.0, SHADE_UNLIT],
                ),
            };
            let label = format!("pickable_{}", p.id.0);
            self.items.push(SceneItem {
                draw: DrawItem::new(&self.device, &self.meshes.object_bgl, &label, &mesh),
                source: ItemSource::Pickable(p.id),
                color: [color[0], color[1], color[2], 1.0],
                params,
                visible: true,
            });
        }
    }

    pub fn set_model(&mut self, model: &ModelData) {
        self.items
            .retain(|item| !matches!(item.source, ItemSource::Model));
        for (i, mesh) in model.meshes.iter().enumerate() {
            let label = format!("model_mesh_{i}");
            self.items.push(SceneItem {
                draw: DrawItem::new(&self.device, &self.meshes.object_bgl, &label, mesh),
                source: ItemSource::Model,
                color: mesh.base_color,
                params: [MODEL_METALNESS, MODEL_ROUGHNESS, 0.0, SHADE_LIT],
                visible: true,
            });
        }
    }

    pub fn upload_environment(&mut self, variant: EnvVariant, image: &CubemapImage) {
        let cube = skybox::upload_cubemap(
            &self.device,
            &self.queue,
            &self.env_bgl,
            &self.linear_sampler,
            image,
            &format!("env_map{}", variant.map_number()),
        );
        log::info!(
            "[render] uploaded map{} ({}px faces)",
            variant.map_number(),
            cube.face_size
        );
        self.env[variant.index()] = cube;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            self.bg_scene = post::create_scene_bind_group(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.scene_view,
            );
        }
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, session: &SceneSession) -> Result<(), wgpu::SurfaceError> {
        let cam = &session.camera;
        let light = Vec3::from(LIGHT_DIR).normalize_or_zero();
        let globals = Globals {
            view_proj: cam.view_projection().to_cols_array_2d(),
            inv_sky: cam.inverse_sky_view_projection().to_cols_array_2d(),
            eye: cam.eye.extend(1.0).to_array(),
            light: [light.x, light.y, light.z, AMBIENT],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let (right, up) = cam.basis();
        for item in &mut self.items {
            let model = match item.source {
                ItemSource::Model => Some(Mat4::IDENTITY),
                ItemSource::Pickable(id) => session
                    .raycaster
                    .get(id)
                    .map(|p| pickable_transform(p, right, up)),
            };
            item.visible = model.is_some();
            if let Some(m) = model {
                item.draw
                    .write(&self.queue, &ObjectUniforms::new(m, item.color, item.params));
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let env = &self.env[session.active_environment().index()];
            rpass.set_pipeline(&self.sky_pipeline);
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            rpass.set_bind_group(1, &env.bind_group, &[]);
            rpass.draw(0..3, 0..1);

            rpass.set_pipeline(&self.meshes.pipeline);
            for item in self.items.iter().filter(|i| i.visible) {
                item.draw.draw(&mut rpass);
            }
        }

        post::write_post_uniforms(&self.queue, &self.post.uniform_buffer, session.post_effect());
        post::blit(
            &mut encoder,
            "composite",
            &view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.bg_scene,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn pickable_transform(p: &Pickable, right: Vec3, up: Vec3) -> Mat4 {
    let s = p.scale.max(1e-3);
    match p.shape {
        // Quad in the XY plane turned to face the camera
        PickShape::Billboard { .. } => Mat4::from_cols(
            (right * s).extend(0.0),
            (up * s).extend(0.0),
            (right.cross(up) * s).extend(0.0),
            p.position.extend(1.0),
        ),
        PickShape::Disc { normal, .. } => Mat4::from_scale_rotation_translation(
            Vec3::splat(s),
            Quat::from_rotation_arc(Vec3::Y, normal.try_normalize().unwrap_or(Vec3::Y)),
            p.position,
        ),
        PickShape::Sphere { .. } => {
            Mat4::from_scale_rotation_translation(Vec3::splat(s), Quat::IDENTITY, p.position)
        }
    }
}
