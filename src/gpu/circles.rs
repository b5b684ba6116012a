//! Instanced circle pipeline.
//!
//! Particles, orbit dots, and glows are all circles; a per-instance softness
//! selects between a crisp disc edge and a linear radial falloff, so one
//! pipeline covers both.

use std::ops::Range;

use crate::frame::CircleCmd;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius: f32,
    softness: f32,
    color: [f32; 4],
}

impl From<&CircleCmd> for CircleInstance {
    fn from(cmd: &CircleCmd) -> Self {
        Self {
            center: [cmd.center.x, cmd.center.y],
            radius: cmd.radius,
            softness: cmd.softness,
            color: cmd.color.to_array(),
        }
    }
}

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
    @location(1) uv: vec2<f32>,
    @location(2) softness: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) shape: vec2<f32>,
    @location(2) color: vec4<f32>,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = quad_vertices[vertex_index];
    let world = center + corner * shape.x;
    let ndc = vec2<f32>(
        world.x / globals.size.x * 2.0 - 1.0,
        1.0 - world.y / globals.size.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = color;
    out.uv = corner;
    out.softness = shape.y;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv);
    if dist > 1.0 {
        discard;
    }
    let crisp = 1.0 - smoothstep(0.9, 1.0, dist);
    let glow = 1.0 - dist;
    let fade = mix(crisp, glow, in.softness);
    return vec4<f32>(in.color.rgb, in.color.a * fade);
}
"#;

pub struct CirclePipeline {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    capacity: u64,
}

impl CirclePipeline {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        globals_layout: &wgpu::BindGroupLayout,
        max_instances: u64,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Circle Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Circle Pipeline Layout"),
            bind_group_layouts: &[globals_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Circle Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 8,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32x2,
                        },
                        wgpu::VertexAttribute {
                            offset: 16,
                            shader_location: 2,
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

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Circle Instance Buffer"),
            size: max_instances * std::mem::size_of::<CircleInstance>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            instance_buffer,
            capacity: max_instances,
        }
    }

    /// Write base circles followed by overlay circles into the instance
    /// buffer. Returns the number of base instances, which is also the offset
    /// where the overlay begins.
    pub fn upload(
        &self,
        queue: &wgpu::Queue,
        base: &[CircleCmd],
        overlay: &[CircleCmd],
    ) -> u32 {
        let mut instances: Vec<CircleInstance> =
            Vec::with_capacity(base.len() + overlay.len());
        instances.extend(base.iter().map(CircleInstance::from));
        instances.extend(overlay.iter().map(CircleInstance::from));

        if instances.len() as u64 > self.capacity {
            log::warn!(
                "circle plan exceeds buffer capacity ({} > {}), truncating",
                instances.len(),
                self.capacity
            );
            instances.truncate(self.capacity as usize);
        }

        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
        base.len().min(instances.len()) as u32
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, instances: Range<u32>) {
        if instances.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        pass.draw(0..6, instances);
    }
}
