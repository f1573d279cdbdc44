use fnv::FnvHashMap;
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::helpers;
use crate::constants::{MAX_DRAWS, STAR_COLOR, STAR_OPACITY};
use crate::core::mesh::{MeshKind, Vertex};
use crate::core::palette::{hex_to_rgb, srgb_to_linear};
use crate::core::scene::{DrawItem, Material, Shading, Side};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct CameraUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) light0_pos: [f32; 4],
    pub(crate) light0_color: [f32; 4],
    pub(crate) light1_pos: [f32; 4],
    pub(crate) light1_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DrawUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) emissive: [f32; 4],
    pub(crate) material: [f32; 4],
}

impl DrawUniforms {
    fn new(model: Mat4, material: &Material) -> Self {
        let color = srgb_to_linear(material.color).extend(material.opacity).to_array();
        let (emissive, params) = match material.shading {
            Shading::Lit {
                metalness,
                roughness,
                emissive,
                emissive_intensity,
            } => (
                srgb_to_linear(emissive) * emissive_intensity,
                [metalness, roughness, 1.0, 0.0],
            ),
            Shading::Unlit => (Vec3::ZERO, [0.0, 0.0, 0.0, 0.0]),
        };
        Self {
            model: model.to_cols_array_2d(),
            color,
            emissive: emissive.extend(0.0).to_array(),
            material: params,
        }
    }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const STAR_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PipelineKey {
    side: Side,
    blend: bool,
    depth_write: bool,
}

impl PipelineKey {
    fn for_material(m: &Material) -> Self {
        Self {
            side: m.side,
            blend: m.is_transparent(),
            depth_write: m.depth_write,
        }
    }
}

/// Draws the starfield and the scene graph's flattened drawables into the
/// HDR target. Opaque drawables go first, then transparent ones in scene
/// order.
pub(crate) struct ScenePass {
    shader: wgpu::ShaderModule,
    layout: wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    pipelines: FnvHashMap<PipelineKey, wgpu::RenderPipeline>,
    stars_pipeline: wgpu::RenderPipeline,
    meshes: FnvHashMap<MeshKind, GpuMesh>,
    star_buffer: wgpu::Buffer,
    star_count: u32,
    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,
    draw_buffer: wgpu::Buffer,
    draw_bg: wgpu::BindGroup,
    draw_stride: u64,
    staging: Vec<u8>,
    order: Vec<(usize, PipelineKey)>,
}

impl ScenePass {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        stars: &[Vec3],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let draw_size = std::mem::size_of::<DrawUniforms>() as u64;
        let draw_stride = helpers::align_up(
            draw_size,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("camera_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
                None,
            )],
        });
        let draw_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("draw_bgl"),
            entries: &[helpers::uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
                Some(draw_size),
            )],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&camera_bgl, &draw_bgl],
            push_constant_ranges: &[],
        });

        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("camera_uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let camera_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("camera_bg"),
            layout: &camera_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });
        let draw_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw_uniforms"),
            size: draw_stride * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let draw_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw_bg"),
            layout: &draw_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &draw_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(draw_size),
                }),
            }],
        });

        let meshes = MeshKind::ALL
            .iter()
            .map(|&kind| {
                let data = kind.build();
                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_vb"),
                    contents: bytemuck::cast_slice(&data.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_ib"),
                    contents: bytemuck::cast_slice(&data.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });
                let mesh = GpuMesh {
                    vertex_buffer,
                    index_buffer,
                    index_count: data.indices.len() as u32,
                };
                (kind, mesh)
            })
            .collect::<FnvHashMap<_, _>>();

        let star_points: Vec<[f32; 3]> = stars.iter().map(|s| s.to_array()).collect();
        let star_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("stars_vb"),
            contents: bytemuck::cast_slice(&star_points),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let stars_pipeline = create_stars_pipeline(device, &layout, &shader, color_format);

        Self {
            shader,
            layout,
            color_format,
            pipelines: FnvHashMap::default(),
            stars_pipeline,
            meshes,
            star_buffer,
            star_count: star_points.len() as u32,
            camera_buffer,
            camera_bg,
            draw_buffer,
            draw_bg,
            draw_stride,
            staging: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Upload camera and per-draw uniforms and make sure every pipeline the
    /// draw list needs exists. Slot 0 belongs to the starfield.
    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        camera: &CameraUniforms,
        draws: &[DrawItem],
        star_model: Mat4,
    ) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(camera));

        self.order.clear();
        let keyed = draws
            .iter()
            .enumerate()
            .map(|(i, d)| (i, PipelineKey::for_material(&d.material)));
        self.order.extend(keyed.clone().filter(|(_, k)| !k.blend));
        self.order.extend(keyed.filter(|(_, k)| k.blend));
        self.order.truncate(MAX_DRAWS - 1);

        let stride = self.draw_stride as usize;
        self.staging.clear();
        self.staging.resize(stride * (self.order.len() + 1), 0);
        let stars = DrawUniforms::new(
            star_model,
            &Material::unlit(hex_to_rgb(STAR_COLOR), STAR_OPACITY),
        );
        let size = std::mem::size_of::<DrawUniforms>();
        self.staging[..size].copy_from_slice(bytemuck::bytes_of(&stars));
        for (slot, &(i, key)) in self.order.iter().enumerate() {
            let d = &draws[i];
            let u = DrawUniforms::new(d.model, &d.material);
            let at = (slot + 1) * stride;
            self.staging[at..at + size].copy_from_slice(bytemuck::bytes_of(&u));
            if !self.pipelines.contains_key(&key) {
                let p = create_mesh_pipeline(device, &self.layout, &self.shader, self.color_format, key);
                self.pipelines.insert(key, p);
            }
        }
        queue.write_buffer(&self.draw_buffer, 0, &self.staging);
    }

    pub(crate) fn encode(&self, rpass: &mut wgpu::RenderPass<'_>, draws: &[DrawItem]) {
        rpass.set_bind_group(0, &self.camera_bg, &[]);

        rpass.set_pipeline(&self.stars_pipeline);
        rpass.set_bind_group(1, &self.draw_bg, &[0]);
        rpass.set_vertex_buffer(0, self.star_buffer.slice(..));
        rpass.draw(0..self.star_count, 0..1);

        for (slot, &(i, key)) in self.order.iter().enumerate() {
            let (Some(pipeline), Some(mesh)) =
                (self.pipelines.get(&key), self.meshes.get(&draws[i].mesh))
            else {
                continue;
            };
            let offset = ((slot + 1) as u64 * self.draw_stride) as u32;
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(1, &self.draw_bg, &[offset]);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }
}

fn depth_state(depth_write: bool) -> Option<wgpu::DepthStencilState> {
    Some(wgpu::DepthStencilState {
        format: helpers::DEPTH_FORMAT,
        depth_write_enabled: depth_write,
        depth_compare: wgpu::CompareFunction::LessEqual,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    })
}

fn create_mesh_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    key: PipelineKey,
) -> wgpu::RenderPipeline {
    let cull_mode = match key.side {
        Side::Front => Some(wgpu::Face::Back),
        Side::Back => Some(wgpu::Face::Front),
    };
    let blend = if key.blend {
        wgpu::BlendState::ALPHA_BLENDING
    } else {
        wgpu::BlendState::REPLACE
    };
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mesh_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_mesh"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            ..Default::default()
        },
        depth_stencil: depth_state(key.depth_write),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_mesh"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

fn create_stars_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("stars_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_stars"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &STAR_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::PointList,
            ..Default::default()
        },
        depth_stencil: depth_state(false),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_stars"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
