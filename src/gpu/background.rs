//! Full-surface gradient pipeline.
//!
//! Draws one triangle covering the viewport and evaluates the configured
//! linear gradient in the fragment shader, along the top-left to
//! bottom-right diagonal as the host canvas API defines it.

use crate::visuals::LinearGradient;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct GradientUniform {
    start: [f32; 4],
    mid: [f32; 4],
    end: [f32; 4],
    /// x = mid stop position, y = 1.0 when a mid stop exists.
    params: [f32; 4],
}

const SHADER: &str = r#"
struct Globals {
    size: vec2<f32>,
    _pad: vec2<f32>,
};

struct Gradient {
    start: vec4<f32>,
    mid: vec4<f32>,
    end: vec4<f32>,
    params: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(1) @binding(0)
var<uniform> gradient: Gradient;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    var positions = array<vec2<f32>, 3>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 3.0, -1.0),
        vec2<f32>(-1.0,  3.0),
    );

    let p = positions[vertex_index];
    var out: VertexOutput;
    out.clip_position = vec4<f32>(p, 0.0, 1.0);
    out.uv = vec2<f32>((p.x + 1.0) * 0.5, (1.0 - p.y) * 0.5);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    // Projection of the fragment onto the (0,0)-(w,h) diagonal, normalized.
    let w = globals.size.x;
    let h = globals.size.y;
    let t = (in.uv.x * w * w + in.uv.y * h * h) / (w * w + h * h);

    if gradient.params.y > 0.5 {
        let pos = max(gradient.params.x, 1e-6);
        if t < pos {
            return mix(gradient.start, gradient.mid, t / pos);
        }
        return mix(gradient.mid, gradient.end, (t - pos) / max(1.0 - pos, 1e-6));
    }
    return mix(gradient.start, gradient.end, t);
}
"#;

pub struct BackgroundPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl BackgroundPipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        globals_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Background Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Gradient Uniform Buffer"),
            size: std::mem::size_of::<GradientUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Gradient Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Gradient Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Background Pipeline Layout"),
            bind_group_layouts: &[globals_layout, &bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Background Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[super::blend_target(format)],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            bind_group,
        }
    }

    pub fn upload(&self, queue: &wgpu::Queue, gradient: &LinearGradient) {
        let (mid_pos, has_mid, mid) = match gradient.mid {
            Some((pos, color)) => (pos, 1.0, color.to_array()),
            None => (0.5, 0.0, [0.0; 4]),
        };
        let uniform = GradientUniform {
            start: gradient.start.to_array(),
            mid,
            end: gradient.end.to_array(),
            params: [mid_pos, has_mid, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniform));
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}
