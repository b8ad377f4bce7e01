//! Camera producing view and projection matrices for rendering.

use glam::{Mat3, Mat4, Quat, Vec3};

use crate::pipeline::CameraUniform;

/// A perspective camera in scene space.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in scene units.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (positive).
    pub near: f32,
    /// Far clip plane distance (positive, > near).
    pub far: f32,
}

impl Camera {
    /// Compute the view matrix (inverse of the camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        let rotation = Mat4::from_quat(self.rotation);
        let translation = Mat4::from_translation(self.position);
        (translation * rotation).inverse()
    }

    /// Compute the projection matrix with reverse-Z (near maps to z=1,
    /// far to z=0) for better depth precision at planetary distances.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y,
            self.aspect_ratio,
            self.far,  // swapped: far as "near" parameter
            self.near, // swapped: near as "far" parameter
        )
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// The up direction vector (+Y in camera space).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// The right direction vector (+X in camera space).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Rotate the camera in place to face `target`, keeping `up` as the
    /// world up reference. `target` must not coincide with the camera
    /// position or be directly along `up`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize();
        let right = forward.cross(up).normalize();
        let camera_up = right.cross(forward).normalize();
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, camera_up, -forward));
    }

    /// Update the aspect ratio after a surface resize.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.aspect_ratio = width / height;
    }

    /// Convert to a uniform suitable for GPU upload.
    pub fn to_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection_matrix().to_cols_array_2d(),
            camera_pos: [self.position.x, self.position.y, self.position.z, 0.0],
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            fov_y: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect_ratio: 16.0 / 9.0,
            near: 0.5,
            far: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_camera_looks_down_neg_z() {
        let camera = Camera::default();
        let forward = camera.forward();
        assert!(forward.x.abs() < 1e-6);
        assert!(forward.y.abs() < 1e-6);
        assert!((forward.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_basis_vectors_are_orthonormal() {
        let camera = Camera::default();
        let (f, u, r) = (camera.forward(), camera.up(), camera.right());
        assert!((f.length() - 1.0).abs() < 1e-6);
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert!((r.length() - 1.0).abs() < 1e-6);
        assert!(f.dot(u).abs() < 1e-6);
        assert!(f.dot(r).abs() < 1e-6);
        assert!(u.dot(r).abs() < 1e-6);
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut camera = Camera {
            position: Vec3::new(100.0, 50.0, 30.0),
            ..Camera::default()
        };
        let target = Vec3::new(-20.0, 10.0, 5.0);
        camera.look_at(target, Vec3::Z);

        let expected = (target - camera.position).normalize();
        assert!(
            (camera.forward() - expected).length() < 1e-5,
            "forward {:?} != {:?}",
            camera.forward(),
            expected
        );
    }

    #[test]
    fn test_view_matrix_inverse_reconstructs_position() {
        let mut camera = Camera {
            position: Vec3::new(10.0, 20.0, 30.0),
            ..Camera::default()
        };
        camera.look_at(Vec3::ZERO, Vec3::Z);
        let reconstructed = camera.view_matrix().inverse().col(3).truncate();
        assert!((reconstructed - camera.position).length() < 1e-4);
    }

    #[test]
    fn test_set_aspect_ratio() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(1920.0, 1080.0);
        assert!((camera.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_carries_position() {
        let camera = Camera {
            position: Vec3::new(1.0, 2.0, 3.0),
            ..Camera::default()
        };
        let uniform = camera.to_uniform();
        assert_eq!(uniform.camera_pos, [1.0, 2.0, 3.0, 0.0]);
    }
}
