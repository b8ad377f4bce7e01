//! The two scene pipelines: unlit vertex-color geometry and instanced
//! shaded spheres.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::buffer::{VertexPosition, VertexPositionColor};

/// Camera uniform shared by both pipelines.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Camera position (w unused, kept for 16-byte alignment).
    pub camera_pos: [f32; 4],
}

/// Per-instance data for the sphere pipeline.
///
/// `emissive` selects between sun-at-origin shading (0) and full-bright
/// self-illumination (1); the sun itself is just an emissive instance.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SphereInstance {
    /// Sphere center in scene units.
    pub center: [f32; 3],
    /// Sphere radius in scene units.
    pub scale: f32,
    /// Surface color, linear RGB.
    pub color: [f32; 3],
    /// 0 = lit by the origin light, 1 = self-illuminated.
    pub emissive: f32,
}

impl SphereInstance {
    /// Instance buffer layout, shader locations 1..=4.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SphereInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 1,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 12,
                shader_location: 2,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 16,
                shader_location: 3,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32,
                offset: 28,
                shader_location: 4,
            },
        ],
    };
}

/// WGSL source for the unlit vertex-color shader.
pub const UNLIT_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// WGSL source for the instanced sphere shader.
///
/// Vertices are a unit sphere, so the model-space position is the surface
/// normal. Lighting is a single point light at the origin (the sun) plus a
/// small ambient term; emissive instances bypass shading entirely.
pub const SPHERE_SHADER_SOURCE: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
};

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) center: vec3<f32>,
    @location(2) scale: f32,
    @location(3) color: vec3<f32>,
    @location(4) emissive: f32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
    @location(1) world_pos: vec3<f32>,
    @location(2) color: vec3<f32>,
    @location(3) emissive: f32,
};

@group(0) @binding(0)
var<uniform> camera: CameraUniform;

@vertex
fn vs_sphere(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = in.position * in.scale + in.center;
    out.clip_position = camera.view_proj * vec4<f32>(world, 1.0);
    out.normal = in.position;
    out.world_pos = world;
    out.color = in.color;
    out.emissive = in.emissive;
    return out;
}

@fragment
fn fs_sphere(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.normal);
    let to_light = normalize(-in.world_pos);
    let diffuse = max(dot(normal, to_light), 0.0);
    let lit = in.color * (0.08 + diffuse * 0.92);
    let final_color = mix(lit, in.color, in.emissive);
    return vec4<f32>(final_color, 1.0);
}
"#;

fn camera_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64),
            },
            count: None,
        }],
    })
}

/// Unlit pipeline for vertex-colored geometry at a chosen topology
/// (line strips for orbits, points for the starfield, triangles for the
/// ring). No culling: the ring is visible from both sides.
pub struct UnlitPipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
}

impl UnlitPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        topology: wgpu::PrimitiveTopology,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("unlit-shader"),
            source: wgpu::ShaderSource::Wgsl(UNLIT_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout = camera_bind_group_layout(device, "unlit-camera-bgl");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("unlit-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            immediate_size: 0,
        });

        let depth_stencil = depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::GreaterEqual, // reverse-Z
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("unlit-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[VertexPositionColor::layout()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology,
                ..Default::default()
            },
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_bind_group_layout,
        }
    }
}

/// Instanced sphere pipeline shared by the sun, planets, moon, and belt.
pub struct SpherePipeline {
    pub pipeline: wgpu::RenderPipeline,
    pub camera_bind_group_layout: wgpu::BindGroupLayout,
}

impl SpherePipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sphere-shader"),
            source: wgpu::ShaderSource::Wgsl(SPHERE_SHADER_SOURCE.into()),
        });

        let camera_bind_group_layout = camera_bind_group_layout(device, "sphere-camera-bgl");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sphere-pipeline-layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            immediate_size: 0,
        });

        let depth_stencil = depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::GreaterEqual, // reverse-Z
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sphere"),
                buffers: &[VertexPosition::layout(), SphereInstance::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sphere"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            multiview_mask: None,
            cache: None,
        });

        Self {
            pipeline,
            camera_bind_group_layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_uniform_is_gpu_aligned() {
        let size = std::mem::size_of::<CameraUniform>();
        assert_eq!(size, 80);
        assert_eq!(size % 16, 0, "size={size}");
    }

    #[test]
    fn test_sphere_instance_is_gpu_aligned() {
        let size = std::mem::size_of::<SphereInstance>();
        assert_eq!(size, 32);
        assert_eq!(size % 16, 0, "size={size}");
    }

    #[test]
    fn test_instance_attribute_offsets_match_fields() {
        let attrs = SphereInstance::LAYOUT.attributes;
        assert_eq!(attrs.len(), 4);
        assert_eq!(attrs[0].offset, 0); // center
        assert_eq!(attrs[1].offset, 12); // scale
        assert_eq!(attrs[2].offset, 16); // color
        assert_eq!(attrs[3].offset, 28); // emissive
    }

    #[test]
    fn test_shader_entry_points_present() {
        assert!(UNLIT_SHADER_SOURCE.contains("fn vs_main"));
        assert!(UNLIT_SHADER_SOURCE.contains("fn fs_main"));
        assert!(SPHERE_SHADER_SOURCE.contains("fn vs_sphere"));
        assert!(SPHERE_SHADER_SOURCE.contains("fn fs_sphere"));
    }
}
