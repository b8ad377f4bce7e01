//! Flat ring annuli that follow their planet.
//!
//! The annulus is generated once around the origin; each frame the vertex
//! buffer is rewritten translated to the planet's current position.

use glam::Vec3;
use wgpu::util::DeviceExt;

use helios_render::{
    BufferAllocator, CameraUniform, IndexData, MeshBuffer, UnlitPipeline, VertexPositionColor,
    generate_annulus,
};
use helios_system::SolarSystem;

/// Inner ring radius as a multiple of the planet's rendering size.
pub const RING_INNER_SCALE: f32 = 1.2;

/// Outer ring radius as a multiple of the planet's rendering size.
pub const RING_OUTER_SCALE: f32 = 1.75;

/// Segments around the annulus.
pub const RING_SEGMENTS: u32 = 96;

/// Ring color, linear RGBA.
pub const RING_COLOR: [f32; 4] = [0.72, 0.66, 0.52, 1.0];

/// Translate ring vertices to follow a planet.
pub fn translated_ring_vertices(
    base: &[VertexPositionColor],
    offset: Vec3,
) -> Vec<VertexPositionColor> {
    base.iter()
        .map(|v| VertexPositionColor {
            position: [
                v.position[0] + offset.x,
                v.position[1] + offset.y,
                v.position[2] + offset.z,
            ],
            color: v.color,
        })
        .collect()
}

struct PlanetRing {
    base_vertices: Vec<VertexPositionColor>,
    mesh: MeshBuffer,
    /// Index of the ringed body in the system's body list.
    body_index: usize,
}

/// Draws a flat annulus for every ringed body, re-centered each frame.
pub struct RingRenderer {
    pipeline: UnlitPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    rings: Vec<PlanetRing>,
}

impl RingRenderer {
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
            wgpu::PrimitiveTopology::TriangleList,
        );

        let allocator = BufferAllocator::new(device);
        let rings: Vec<PlanetRing> = system
            .bodies()
            .iter()
            .enumerate()
            .filter(|(_, body)| body.has_ring)
            .map(|(body_index, body)| {
                let size = body.size() as f32;
                let (base_vertices, indices) = generate_annulus(
                    size * RING_INNER_SCALE,
                    size * RING_OUTER_SCALE,
                    RING_SEGMENTS,
                    RING_COLOR,
                );
                let mesh = allocator.create_mesh(
                    &format!("ring-{}", body.name()),
                    bytemuck::cast_slice(&base_vertices),
                    IndexData::U32(&indices),
                );
                PlanetRing {
                    base_vertices,
                    mesh,
                    body_index,
                }
            })
            .collect();

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ring-camera"),
            contents: bytemuck::cast_slice(&[CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("ring-camera-bg"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        log::info!("Ring renderer initialized for {} bodies", rings.len());

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            rings,
        }
    }

    /// Upload the camera and re-center each ring on its planet.
    pub fn update(&self, queue: &wgpu::Queue, camera: &CameraUniform, system: &SolarSystem) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[*camera]));

        for ring in &self.rings {
            let Some(body) = system.body(ring.body_index) else {
                continue;
            };
            let translated =
                translated_ring_vertices(&ring.base_vertices, body.position.as_vec3());
            queue.write_buffer(
                &ring.mesh.vertex_buffer,
                0,
                bytemuck::cast_slice(&translated),
            );
        }
    }

    /// Draw every ring.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        for ring in &self.rings {
            ring.mesh.bind(pass);
            ring.mesh.draw(pass);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_preserves_shape() {
        let (base, _) = generate_annulus(24.0, 35.0, 16, RING_COLOR);
        let offset = Vec3::new(100.0, -50.0, 3.0);
        let moved = translated_ring_vertices(&base, offset);

        for (b, m) in base.iter().zip(&moved) {
            let dx = m.position[0] - b.position[0];
            let dy = m.position[1] - b.position[1];
            let dz = m.position[2] - b.position[2];
            assert_eq!([dx, dy, dz], [100.0, -50.0, 3.0]);
            assert_eq!(m.color, b.color);
        }
    }

    #[test]
    fn test_ring_scales_bracket_the_planet() {
        assert!(RING_INNER_SCALE > 1.0);
        assert!(RING_OUTER_SCALE > RING_INNER_SCALE);
    }
}
