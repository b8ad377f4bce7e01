//! CPU-side mesh generation for spheres and ring annuli.

use std::f32::consts::{PI, TAU};

use crate::buffer::{VertexPosition, VertexPositionColor};

/// Generate a unit UV sphere with +z at the pole.
///
/// Returns position-only vertices (the position doubles as the normal) and
/// a u32 triangle index list. `stacks` and `slices` must each be at least 3.
pub fn generate_uv_sphere(stacks: u32, slices: u32) -> (Vec<VertexPosition>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * slices) as usize);
    for stack in 0..=stacks {
        let phi = PI * stack as f32 / stacks as f32;
        for slice in 0..slices {
            let theta = TAU * slice as f32 / slices as f32;
            vertices.push(VertexPosition {
                position: [
                    phi.sin() * theta.cos(),
                    phi.sin() * theta.sin(),
                    phi.cos(),
                ],
            });
        }
    }

    let mut indices = Vec::with_capacity((stacks * slices * 6) as usize);
    for stack in 0..stacks {
        for slice in 0..slices {
            let next_slice = (slice + 1) % slices;
            let v00 = stack * slices + slice;
            let v01 = stack * slices + next_slice;
            let v10 = (stack + 1) * slices + slice;
            let v11 = (stack + 1) * slices + next_slice;

            indices.extend_from_slice(&[v00, v10, v11]);
            indices.extend_from_slice(&[v00, v11, v01]);
        }
    }

    (vertices, indices)
}

/// Generate a flat annulus in the xy-plane at z = 0.
///
/// Used for planetary rings; the unlit pipeline draws it without culling so
/// it stays visible from both sides.
pub fn generate_annulus(
    inner_radius: f32,
    outer_radius: f32,
    segments: u32,
    color: [f32; 4],
) -> (Vec<VertexPositionColor>, Vec<u32>) {
    let mut vertices = Vec::with_capacity((segments * 2) as usize);
    for segment in 0..segments {
        let theta = TAU * segment as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        vertices.push(VertexPositionColor {
            position: [inner_radius * cos, inner_radius * sin, 0.0],
            color,
        });
        vertices.push(VertexPositionColor {
            position: [outer_radius * cos, outer_radius * sin, 0.0],
            color,
        });
    }

    let mut indices = Vec::with_capacity((segments * 6) as usize);
    for segment in 0..segments {
        let next = (segment + 1) % segments;
        let i0 = segment * 2;
        let o0 = segment * 2 + 1;
        let i1 = next * 2;
        let o1 = next * 2 + 1;

        indices.extend_from_slice(&[i0, o0, o1]);
        indices.extend_from_slice(&[i0, o1, i1]);
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_vertices_lie_on_unit_sphere() {
        let (vertices, _) = generate_uv_sphere(12, 24);
        for v in &vertices {
            let [x, y, z] = v.position;
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 1.0).abs() < 1e-5, "radius {r}");
        }
    }

    #[test]
    fn test_sphere_counts() {
        let (stacks, slices) = (12, 24);
        let (vertices, indices) = generate_uv_sphere(stacks, slices);
        assert_eq!(vertices.len(), ((stacks + 1) * slices) as usize);
        assert_eq!(indices.len(), (stacks * slices * 6) as usize);
    }

    #[test]
    fn test_sphere_indices_in_bounds() {
        let (vertices, indices) = generate_uv_sphere(8, 16);
        let max = vertices.len() as u32;
        assert!(indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_annulus_radii() {
        let (vertices, _) = generate_annulus(24.0, 35.0, 64, [1.0; 4]);
        for v in &vertices {
            let [x, y, z] = v.position;
            assert_eq!(z, 0.0);
            let r = (x * x + y * y).sqrt();
            assert!(
                (r - 24.0).abs() < 1e-3 || (r - 35.0).abs() < 1e-3,
                "radius {r}"
            );
        }
    }

    #[test]
    fn test_annulus_counts_and_bounds() {
        let segments = 64;
        let (vertices, indices) = generate_annulus(24.0, 35.0, segments, [1.0; 4]);
        assert_eq!(vertices.len(), (segments * 2) as usize);
        assert_eq!(indices.len(), (segments * 6) as usize);
        let max = vertices.len() as u32;
        assert!(indices.iter().all(|&i| i < max));
    }
}
