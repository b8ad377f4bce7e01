//! Seeded starfield backdrop: point stars on a far sphere.

use std::f32::consts::TAU;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wgpu::util::DeviceExt;

use helios_render::{
    BufferAllocator, CameraUniform, UnlitPipeline, VertexBuffer, VertexPositionColor,
};

/// Radius of the star sphere, scene units. Inside the far clip plane but
/// beyond every orbit.
pub const STARFIELD_RADIUS: f32 = 4000.0;

/// Deterministic star placement on the sky sphere.
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
}

impl StarfieldGenerator {
    pub fn new(seed: u64, star_count: u32) -> Self {
        Self { seed, star_count }
    }

    /// Generate star vertices. Deterministic for a given seed. Directions
    /// are uniform on the sphere; brightness follows a power law so most
    /// stars are dim.
    pub fn generate(&self) -> Vec<VertexPositionColor> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stars = Vec::with_capacity(self.star_count as usize);

        for _ in 0..self.star_count {
            let theta = rng.random::<f32>() * TAU;
            let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
            let direction = glam::Vec3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            );

            let brightness = rng.random::<f32>().powf(3.0) * 0.8 + 0.15;

            stars.push(VertexPositionColor {
                position: (direction * STARFIELD_RADIUS).into(),
                color: [brightness, brightness, brightness, 1.0],
            });
        }

        stars
    }
}

/// Draws the star points in a single non-indexed call.
pub struct StarfieldRenderer {
    pipeline: UnlitPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    stars: VertexBuffer,
}

impl StarfieldRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        seed: u64,
        star_count: u32,
    ) -> Self {
        let pipeline = UnlitPipeline::new(
            device,
            surface_format,
            depth_format,
            wgpu::PrimitiveTopology::PointList,
        );

        let vertices = StarfieldGenerator::new(seed, star_count).generate();
        let allocator = BufferAllocator::new(device);
        let stars = allocator.create_vertices(
            "starfield",
            bytemuck::cast_slice(&vertices),
            vertices.len() as u32,
        );

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("starfield-camera"),
            contents: bytemuck::cast_slice(&[CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("starfield-camera-bg"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        log::info!("Starfield initialized with {star_count} stars");

        Self {
            pipeline,
            camera_buffer,
            camera_bind_group,
            stars,
        }
    }

    /// Upload the camera for this frame.
    pub fn update(&self, queue: &wgpu::Queue, camera: &CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[*camera]));
    }

    /// Draw the star points.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_pipeline(&self.pipeline.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        self.stars.draw(pass);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_sit_on_the_far_sphere() {
        let stars = StarfieldGenerator::new(42, 200).generate();
        assert_eq!(stars.len(), 200);
        for star in &stars {
            let [x, y, z] = star.position;
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - STARFIELD_RADIUS).abs() < 0.5, "radius {r}");
        }
    }

    #[test]
    fn test_star_generation_is_deterministic() {
        let a = StarfieldGenerator::new(42, 100).generate();
        let b = StarfieldGenerator::new(42, 100).generate();
        for (sa, sb) in a.iter().zip(&b) {
            assert_eq!(sa.position, sb.position);
            assert_eq!(sa.color, sb.color);
        }
    }

    #[test]
    fn test_brightness_stays_visible() {
        let stars = StarfieldGenerator::new(42, 500).generate();
        for star in &stars {
            let b = star.color[0];
            assert!((0.15..=0.95).contains(&b), "brightness {b}");
        }
    }
}
