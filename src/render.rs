use crate::constants::{MAX_DRAWS, MSAA_SAMPLES};
use crate::ui;
use knot_core::color::srgb_to_linear;
use knot_core::geometry;
use knot_core::{
    DirectionalLight, Drawable, MeshKind, RenderError, RenderableScene, SceneRenderer, SkillScene,
    SurfaceSize, KNOT_P, KNOT_Q, KNOT_RADIAL_SEGMENTS, KNOT_RADIUS, KNOT_TUBE,
    KNOT_TUBULAR_SEGMENTS, NODE_HEIGHT_SEGMENTS, NODE_RADIUS, NODE_WIDTH_SEGMENTS,
};
use std::num::NonZeroU64;
use web_sys as web;

mod helpers;
mod mesh;
mod targets;
use helpers::PipelineDesc;
use mesh::GpuMesh;
use targets::RenderTargets;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// Layouts must match `Globals` and `Draw` in scene.wgsl
const _: () = assert!(std::mem::size_of::<GlobalsUniform>() == 240);
const _: () = assert!(std::mem::size_of::<DrawUniform>() == 112);

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalsUniform {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    rim_dir: [f32; 4],
    rim_color: [f32; 4],
    fog_color: [f32; 4],
    ambient: [f32; 4],
}

fn light_uniforms(light: &DirectionalLight) -> ([f32; 4], [f32; 4]) {
    let dir = light.position.normalize_or_zero();
    (
        dir.extend(light.intensity).to_array(),
        srgb_to_linear(light.color).extend(1.0).to_array(),
    )
}

impl GlobalsUniform {
    fn from_scene(scene: &dyn RenderableScene) -> Self {
        let camera = scene.camera();
        let lighting = scene.lighting();
        let (key_dir, key_color) = light_uniforms(&lighting.key);
        let (rim_dir, rim_color) = light_uniforms(&lighting.rim);
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            view: camera.view().to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            key_dir,
            key_color,
            rim_dir,
            rim_color,
            fog_color: srgb_to_linear(lighting.fog_color)
                .extend(lighting.fog_density)
                .to_array(),
            ambient: [lighting.ambient, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DrawUniform {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    surface: [f32; 4],
}

impl DrawUniform {
    fn from_drawable(d: &Drawable<'_>) -> Self {
        let m = d.material;
        Self {
            model: d.model.to_cols_array_2d(),
            color: srgb_to_linear(m.color).extend(m.opacity).to_array(),
            emissive: (srgb_to_linear(m.emissive) * m.emissive_intensity)
                .extend(0.0)
                .to_array(),
            surface: [m.roughness, m.metalness, 0.0, 0.0],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,

    mesh_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    draw_buffer: wgpu::Buffer,
    draw_bind_group: wgpu::BindGroup,
    draw_stride: u64,
    draw_staging: Vec<u8>,

    knot: GpuMesh,
    node: GpuMesh,
    stars: GpuMesh,

    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        scene: &SkillScene,
        size: SurfaceSize,
    ) -> anyhow::Result<Self> {
        let width = size.physical_width.max(1);
        let height = size.physical_height.max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().backend);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // WebGL2 fallback cannot satisfy the full WebGPU defaults
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
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
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
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

        let color_flags = adapter.get_texture_format_features(format).flags;
        let depth_flags = adapter.get_texture_format_features(DEPTH_FORMAT).flags;
        let sample_count = ui::sample_count(MSAA_SAMPLES, |n| {
            color_flags.sample_count_supported(n) && depth_flags.sample_count_supported(n)
        });
        log::info!("[gpu] {:?}, {}x msaa", format, sample_count);
        let targets =
            RenderTargets::new(&device, format, DEPTH_FORMAT, sample_count, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(knot_core::SCENE_WGSL.into()),
        });

        let globals_size = std::mem::size_of::<GlobalsUniform>() as u64;
        let draw_size = std::mem::size_of::<DrawUniform>() as u64;
        let draw_stride = helpers::align_to(
            draw_size,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(globals_size),
                },
                count: None,
            }],
        });
        let draw_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(draw_size),
                },
                count: None,
            }],
        });

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: globals_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let draw_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draws"),
            size: draw_stride * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let draw_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw_bg"),
            layout: &draw_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &draw_buffer,
                    offset: 0,
                    size: NonZeroU64::new(draw_size),
                }),
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_layout"),
            bind_group_layouts: &[&globals_bgl, &draw_bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            format,
            DEPTH_FORMAT,
            PipelineDesc {
                label: "mesh_pipeline",
                frag_entry: "fs_mesh",
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                depth_write: true,
                sample_count,
            },
        );
        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            format,
            DEPTH_FORMAT,
            PipelineDesc {
                label: "points_pipeline",
                frag_entry: "fs_points",
                topology: wgpu::PrimitiveTopology::PointList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                depth_write: false,
                sample_count,
            },
        );

        let knot = GpuMesh::indexed(
            &device,
            "knot",
            &geometry::torus_knot(
                KNOT_RADIUS,
                KNOT_TUBE,
                KNOT_TUBULAR_SEGMENTS,
                KNOT_RADIAL_SEGMENTS,
                KNOT_P,
                KNOT_Q,
            ),
        );
        let node = GpuMesh::indexed(
            &device,
            "node",
            &geometry::uv_sphere(NODE_RADIUS, NODE_WIDTH_SEGMENTS, NODE_HEIGHT_SEGMENTS),
        );
        let stars = GpuMesh::points(&device, "stars", &scene.stars.points);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            mesh_pipeline,
            points_pipeline,
            globals_buffer,
            globals_bind_group,
            draw_buffer,
            draw_bind_group,
            draw_stride,
            draw_staging: Vec::new(),
            knot,
            node,
            stars,
            width,
            height,
        })
    }

    pub fn resize(&mut self, size: SurfaceSize) {
        let (width, height) = (size.physical_width, size.physical_height);
        if width == 0 || height == 0 || (width == self.width && height == self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        log::debug!("[gpu] resized to {}x{}", width, height);
    }

    fn mesh_for(&self, kind: MeshKind) -> (&GpuMesh, &wgpu::RenderPipeline) {
        match kind {
            MeshKind::Knot => (&self.knot, &self.mesh_pipeline),
            MeshKind::Node => (&self.node, &self.mesh_pipeline),
            MeshKind::Stars => (&self.stars, &self.points_pipeline),
        }
    }

    fn acquire(&self) -> Result<wgpu::SurfaceTexture, RenderError> {
        match self.surface.get_current_texture() {
            Ok(frame) => Ok(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::Timeout) => Err(RenderError::Timeout),
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            #[allow(unreachable_patterns)]
            Err(other) => Err(RenderError::Backend(format!("{:?}", other))),
        }
    }
}

impl SceneRenderer for GpuState {
    fn render(&mut self, scene: &dyn RenderableScene) -> Result<(), RenderError> {
        let drawables = scene.drawables();
        if drawables.len() > MAX_DRAWS {
            log::warn!(
                "[gpu] {} drawables, only the first {} are drawn",
                drawables.len(),
                MAX_DRAWS
            );
        }
        let count = drawables.len().min(MAX_DRAWS);

        let globals = GlobalsUniform::from_scene(scene);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let stride = self.draw_stride as usize;
        self.draw_staging.clear();
        self.draw_staging.resize(stride * count, 0);
        for (i, d) in drawables.iter().take(count).enumerate() {
            let u = DrawUniform::from_drawable(d);
            let bytes = bytemuck::bytes_of(&u);
            self.draw_staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }
        if !self.draw_staging.is_empty() {
            self.queue
                .write_buffer(&self.draw_buffer, 0, &self.draw_staging);
        }

        let frame = self.acquire()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        let (target, resolve_target) = self.targets.color_views(&view);
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target,
                    ops: wgpu::Operations {
                        // page background shows through
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.targets.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            for (i, d) in drawables.iter().take(count).enumerate() {
                let (mesh, pipeline) = self.mesh_for(d.mesh);
                rpass.set_pipeline(pipeline);
                rpass.set_bind_group(1, &self.draw_bind_group, &[(i * stride) as u32]);
                mesh.draw(&mut rpass);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
