//! GPU rendering plumbing for Helios.
//!
//! Device and surface management, camera, depth buffer, mesh buffers, mesh
//! generation, and the two scene pipelines: unlit vertex-color geometry
//! (orbit lines, starfield points, ring) and instanced shaded spheres
//! (sun, planets, moon, belt rocks).

mod buffer;
mod camera;
mod depth;
mod gpu;
mod mesh;
mod pipeline;
mod surface;

pub use buffer::{
    BufferAllocator, IndexData, MeshBuffer, VertexBuffer, VertexPosition, VertexPositionColor,
};
pub use camera::Camera;
pub use depth::DepthBuffer;
pub use gpu::{RenderContext, RenderContextError, SurfaceError, init_render_context_blocking};
pub use mesh::{generate_annulus, generate_uv_sphere};
pub use pipeline::{
    CameraUniform, SPHERE_SHADER_SOURCE, SphereInstance, SpherePipeline, UNLIT_SHADER_SOURCE,
    UnlitPipeline,
};
pub use surface::{PhysicalSize, SurfaceResizeEvent, SurfaceWrapper};
