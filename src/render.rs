use crate::constants::*;
use crate::core::palette::{hex_to_rgb, srgb_to_linear};
use crate::core::scene::DrawItem;
use glam::{Mat4, Vec3};
use web_sys as web;

mod backdrop;
mod helpers;
mod post;
mod scene;
mod targets;

use backdrop::{create_backdrop_resources, BackdropResources, BackdropUniforms};
use post::PostUniforms;
use scene::{CameraUniforms, ScenePass};
use targets::{RenderTargets, HDR_FORMAT};

/// Everything the renderer needs from the frame loop for one frame.
pub struct FrameInput<'f> {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub draws: &'f [DrawItem],
    pub star_model: Mat4,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    backdrop: BackdropResources,
    scene: ScenePass,
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    post_group: wgpu::BindGroup,
    width: u32,
    height: u32,
    time_accum: f32,
}

fn linear(hex: u32) -> Vec3 {
    srgb_to_linear(hex_to_rgb(hex))
}

fn light(position: [f32; 3], color: u32, intensity: f32) -> ([f32; 4], [f32; 4]) {
    (
        Vec3::from(position).extend(1.0).to_array(),
        linear(color).extend(intensity).to_array(),
    )
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement, stars: &[Vec3]) -> anyhow::Result<Self> {
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
        let backdrop = create_backdrop_resources(&device, HDR_FORMAT);
        let scene = ScenePass::new(&device, HDR_FORMAT, stars);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
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
        let post = post::create_post_resources(&device, &post_shader, format);
        let post_group = post::create_bind_group(&device, &post, &linear_sampler, &targets.hdr_view);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            backdrop,
            scene,
            targets,
            linear_sampler,
            post,
            post_group,
            width,
            height,
            time_accum: 0.0,
        })
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
            self.post_group = post::create_bind_group(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
            );
        }
    }

    fn camera_uniforms(&self, input: &FrameInput<'_>) -> CameraUniforms {
        let (light0_pos, light0_color) =
            light(KEY_LIGHT_POSITION, KEY_LIGHT_COLOR, KEY_LIGHT_INTENSITY);
        let (light1_pos, light1_color) =
            light(FILL_LIGHT_POSITION, FILL_LIGHT_COLOR, FILL_LIGHT_INTENSITY);
        CameraUniforms {
            view_proj: input.view_proj.to_cols_array_2d(),
            eye: input.eye.extend(1.0).to_array(),
            ambient: [AMBIENT_INTENSITY; 4],
            light0_pos,
            light0_color,
            light1_pos,
            light1_color,
        }
    }

    fn post_uniforms(&self, resolution: [f32; 2]) -> PostUniforms {
        PostUniforms {
            resolution,
            time: self.time_accum,
            scanline_opacity: SCANLINE_OPACITY,
            vignette: [VIGNETTE_START, VIGNETTE_DARKEN, SCANLINE_PERIOD_PX, 0.0],
        }
    }

    pub fn render(&mut self, dt_sec: f32, input: &FrameInput<'_>) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let full = [self.width as f32, self.height as f32];
        let backdrop = BackdropUniforms::new(
            full,
            linear(BACKDROP_INNER),
            linear(BACKDROP_MID),
            linear(BACKDROP_OUTER),
            BACKDROP_MID_STOP,
        );
        self.queue
            .write_buffer(&self.backdrop.uniform_buffer, 0, bytemuck::bytes_of(&backdrop));
        post::blit(
            &mut encoder,
            "backdrop_pass",
            &self.targets.hdr_view,
            wgpu::Color::BLACK,
            &self.backdrop.pipeline,
            &self.backdrop.bind_group,
        );

        let camera = self.camera_uniforms(input);
        self.scene.prepare(
            &self.device,
            &self.queue,
            &camera,
            input.draws,
            input.star_model,
        );
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
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
            self.scene.encode(&mut rpass, input.draws);
        }

        self.queue.write_buffer(
            &self.post.uniforms,
            0,
            bytemuck::bytes_of(&self.post_uniforms(full)),
        );
        post::blit(
            &mut encoder,
            "composite",
            &view,
            wgpu::Color::BLACK,
            &self.post.composite_pipeline,
            &self.post_group,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
