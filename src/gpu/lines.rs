//! Link line pipeline.
//!
//! `LineList` primitives cannot carry a stroke width, so segments are
//! expanded CPU-side into two triangles each. At the fixed populations this
//! crate runs the expansion is a few kilobytes per frame.

use crate::frame::LineCmd;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 2],
    color: [f32; 4],
}

const VERTICES_PER_SEGMENT: u64 = 6;

const SHADER: &str = r#"
struct Globals {
    size: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
) -> VertexOutput {
    let ndc = vec2<f32>(
        position.x / globals.size.x * 2.0 - 1.0,
        1.0 - position.y / globals.size.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

pub struct LinePipeline {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    capacity_segments: u64,
    scratch: Vec<LineVertex>,
}

impl LinePipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        globals_layout: &wgpu::BindGroupLayout,
        max_segments: u64,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Line Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[globals_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x4,
                        },
                    ],
                }],
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

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Line Vertex Buffer"),
            size: max_segments * VERTICES_PER_SEGMENT * std::mem::size_of::<LineVertex>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            capacity_segments: max_segments,
            scratch: Vec::new(),
        }
    }

    /// Expand segments into quads and write them. Returns the vertex count
    /// to draw.
    pub fn upload(&mut self, queue: &wgpu::Queue, lines: &[LineCmd]) -> u32 {
        self.scratch.clear();

        let mut segments = lines;
        if segments.len() as u64 > self.capacity_segments {
            log::warn!(
                "line plan exceeds buffer capacity ({} > {}), truncating",
                segments.len(),
                self.capacity_segments
            );
            segments = &segments[..self.capacity_segments as usize];
        }

        for line in segments {
            let dir = line.to - line.from;
            let len = dir.length();
            if len <= f32::EPSILON {
                continue;
            }
            let normal = glam::Vec2::new(-dir.y, dir.x) / len * (line.width * 0.5);
            let color = line.color.to_array();

            let a0 = line.from + normal;
            let a1 = line.from - normal;
            let b0 = line.to + normal;
            let b1 = line.to - normal;

            for p in [a0, a1, b0, b0, a1, b1] {
                self.scratch.push(LineVertex {
                    position: [p.x, p.y],
                    color,
                });
            }
        }

        if !self.scratch.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
        }
        self.scratch.len() as u32
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, vertex_count: u32) {
        if vertex_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..vertex_count, 0..1);
    }
}
