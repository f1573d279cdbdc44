use glam::Vec3;

use super::helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackdropUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) mid_stop: f32,
    pub(crate) _pad: f32,
    pub(crate) inner: [f32; 4],
    pub(crate) mid: [f32; 4],
    pub(crate) outer: [f32; 4],
}

impl BackdropUniforms {
    /// Colours are expected in linear space.
    pub(crate) fn new(resolution: [f32; 2], inner: Vec3, mid: Vec3, outer: Vec3, mid_stop: f32) -> Self {
        Self {
            resolution,
            mid_stop,
            _pad: 0.0,
            inner: inner.extend(1.0).to_array(),
            mid: mid.extend(1.0).to_array(),
            outer: outer.extend(1.0).to_array(),
        }
    }
}

pub(crate) struct BackdropResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_backdrop_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
) -> BackdropResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("backdrop_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::BACKDROP_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("backdrop_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::FRAGMENT,
            None,
        )],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_fullscreen_pipeline(
        device,
        "backdrop_pipeline",
        &pl,
        &shader,
        "fs_backdrop",
        hdr_format,
        None,
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("backdrop_uniforms"),
        size: std::mem::size_of::<BackdropUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("backdrop_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    BackdropResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
