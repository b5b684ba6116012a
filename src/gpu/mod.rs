//! wgpu rendering of a [`FramePlan`].
//!
//! The simulation hands over a plain draw list each frame; this module owns
//! the surface, device, and three small pipelines (background gradient,
//! lines, instanced circles) that consume it. Buffers are sized once at
//! mount for the worst case a config can produce and rewritten per frame.

mod background;
mod circles;
mod lines;

use std::sync::Arc;

use winit::window::Window;

use crate::config::FieldConfig;
use crate::error::GpuError;
use crate::frame::{FramePlan, RING_SEGMENTS};
use crate::visuals::Rgba;

use background::BackgroundPipeline;
use circles::CirclePipeline;
use lines::LinePipeline;

/// Viewport uniform shared by every pipeline.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    size: [f32; 2],
    _pad: [f32; 2],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    background: BackgroundPipeline,
    circles: CirclePipeline,
    lines: LinePipeline,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(window: Arc<Window>, field_config: &FieldConfig) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GpuError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let globals = Globals {
            size: [config.width as f32, config.height as f32],
            _pad: [0.0; 2],
        };
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        queue.write_buffer(&globals_buffer, 0, bytemuck::bytes_of(&globals));

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Globals Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        // Worst-case command counts for this config: every particle drawn,
        // every pair linked, both rings traced, plus orbit ornaments and
        // drifting blobs.
        let n = field_config.particle_count as u64;
        let max_circles = n + 16;
        let max_segments = n * n.saturating_sub(1) / 2 + 2 * RING_SEGMENTS as u64 + 8;

        let background = BackgroundPipeline::new(&device, surface_format, &globals_layout);
        let circles = CirclePipeline::new(&device, surface_format, &globals_layout, max_circles);
        let lines = LinePipeline::new(&device, surface_format, &globals_layout, max_segments);

        let clear_color = to_wgpu_color(field_config.clear_color);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            globals_buffer,
            globals_bind_group,
            background,
            circles,
            lines,
            clear_color,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);

            let globals = Globals {
                size: [self.config.width as f32, self.config.height as f32],
                _pad: [0.0; 2],
            };
            self.queue
                .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        }
    }

    /// Draw one frame plan: clear, background, particles, links, overlay.
    pub fn render(&mut self, plan: &FramePlan) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(gradient) = &plan.background {
            self.background.upload(&self.queue, gradient);
        }
        let base_circles = self.circles.upload(&self.queue, &plan.circles, &plan.overlay);
        let line_vertices = self.lines.upload(&self.queue, &plan.lines);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);

            if plan.background.is_some() {
                self.background.draw(&mut render_pass);
            }
            self.circles.draw(&mut render_pass, 0..base_circles);
            self.lines.draw(&mut render_pass, line_vertices);
            let overlay_end = base_circles + plan.overlay.len() as u32;
            self.circles.draw(&mut render_pass, base_circles..overlay_end);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn to_wgpu_color(color: Rgba) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

/// Alpha-blended color target shared by all three pipelines.
fn blend_target(format: wgpu::TextureFormat) -> Option<wgpu::ColorTargetState> {
    Some(wgpu::ColorTargetState {
        format,
        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
        write_mask: wgpu::ColorWrites::ALL,
    })
}
