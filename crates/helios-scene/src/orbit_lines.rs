//! Static orbit ellipse lines, sampled once at startup.

use wgpu::util::DeviceExt;

use helios_orbits::{ORBIT_PATH_SEGMENTS, OrbitalElementSet, sample_orbit_path};
use helios_render::{
    BufferAllocator, CameraUniform, UnlitPipeline, VertexBuffer, VertexPositionColor,
};
use helios_system::SolarSystem;

/// Orbit line color, linear RGBA.
pub const ORBIT_LINE_COLOR: [f32; 4] = [0.53, 0.53, 0.53, 1.0];

/// Sample one body's full ellipse into line-strip vertices.
pub fn orbit_line_vertices(elements: &OrbitalElementSet) -> Vec<VertexPositionColor> {
    sample_orbit_path(elements, ORBIT_PATH_SEGMENTS)
        .into_iter()
        .map(|point| VertexPositionColor {
            position: point.as_vec3().into(),
            color: ORBIT_LINE_COLOR,
        })
        .collect()
}

/// Draws one closed line strip per body. The strips are sampled once at
/// startup; orbits are fixed ellipses, so they never change.
pub struct OrbitLineRenderer {
    pipeline: UnlitPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    lines: Vec<VertexBuffer>,
}

impl OrbitLineRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        system: &SolarSystem,
    ) -> Self {
        let pipeline = UnlitPipeline::new(
            device,
            surface_format,
            depth_format,
            wgpu::PrimitiveTopology::LineStrip,
        );

        let allocator = BufferAllocator::new(device);
        let lines: Vec<VertexBuffer> = system
            .bodies()
            .iter()
            .map(|body| {
                let vertices = orbit_line_vertices(body.propagator.elements());
                allocator.create_vertices(
                    &format!("orbit-{}", body.name()),
                    bytemuck::cast_slice(&vertices),
                    vertices.len() as u32,
                )
            })
            .collect();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orbit-camera"),
            contents: bytemuck::cast_slice(&[CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orbit-camera-bg"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        log::info!("Orbit lines initialized for {} bodies", lines.len());

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            lines,
        }
    }

    /// Upload the camera for this frame.
    pub fn update(&self, queue: &wgpu::Queue, camera: &CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[*camera]));
    }

    /// Draw every orbit line strip.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        for line in &self.lines {
            line.draw(pass);
        }
    }
}
