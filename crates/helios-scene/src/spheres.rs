//! Instanced sphere renderer for every round thing in the scene.
//!
//! One unit-sphere mesh, one instance buffer: the sun (emissive), the
//! planets, the moon, and the asteroid belt rocks all draw in a single
//! instanced call.

use wgpu::util::DeviceExt;

use helios_render::{
    BufferAllocator, CameraUniform, IndexData, MeshBuffer, SphereInstance, SpherePipeline,
    generate_uv_sphere,
};
use helios_system::{MOON_SIZE, SolarSystem};

use crate::sun::sun_instance;

/// Instance buffer capacity: sun + planets + moon + belt.
pub const MAX_SPHERE_INSTANCES: usize = 4096;

const SPHERE_STACKS: u32 = 24;
const SPHERE_SLICES: u32 = 48;

/// Moon display color, linear RGB.
const MOON_COLOR: [f32; 3] = [0.62, 0.62, 0.60];

/// Build the per-frame instance list for the sun, planets, and moon.
///
/// Belt rock instances are static and appended separately by the caller.
pub fn body_instances(system: &SolarSystem) -> Vec<SphereInstance> {
    let mut instances = Vec::with_capacity(system.len() + 2);
    instances.push(sun_instance());

    for body in system.bodies() {
        instances.push(SphereInstance {
            center: body.position.as_vec3().into(),
            scale: body.size() as f32,
            color: body.color,
            emissive: 0.0,
        });
    }

    instances.push(SphereInstance {
        center: system.moon.position.as_vec3().into(),
        scale: MOON_SIZE as f32,
        color: MOON_COLOR,
        emissive: 0.0,
    });

    instances
}

/// GPU renderer drawing all sphere instances in one call.
pub struct SphereSceneRenderer {
    pipeline: SpherePipeline,
    mesh: MeshBuffer,
    instance_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    instance_count: u32,
}

impl SphereSceneRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
    ) -> Self {
        let pipeline = SpherePipeline::new(device, surface_format, depth_format);

        let (vertices, indices) = generate_uv_sphere(SPHERE_STACKS, SPHERE_SLICES);
        let allocator = BufferAllocator::new(device);
        let mesh = allocator.create_mesh(
            "unit-sphere",
            bytemuck::cast_slice(&vertices),
            IndexData::U32(&indices),
        );

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sphere-instances"),
            size: (MAX_SPHERE_INSTANCES * std::mem::size_of::<SphereInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere-camera"),
            contents: bytemuck::cast_slice(&[CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
                camera_pos: [0.0; 4],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sphere-camera-bg"),
            layout: &pipeline.camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        log::info!(
            "Sphere renderer initialized: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );

        Self {
            pipeline,
            mesh,
            instance_buffer,
            camera_buffer,
            camera_bind_group,
            instance_count: 0,
        }
    }

    /// Upload the camera and this frame's instances.
    pub fn update(
        &mut self,
        queue: &wgpu::Queue,
        camera: &CameraUniform,
        instances: &[SphereInstance],
    ) {
        let count = instances.len().min(MAX_SPHERE_INSTANCES);
        self.instance_count = count as u32;

        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[*camera]));
        if count > 0 {
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&instances[..count]),
            );
        }
    }

    /// Draw all active instances.
    pub fn render<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline.pipeline);
        pass.set_bind_group(0, &self.camera_bind_group, &[]);
        self.mesh.bind(pass);
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        self.mesh.draw_instanced(pass, self.instance_count);
    }

    pub fn active_count(&self) -> u32 {
        self.instance_count
    }
}
