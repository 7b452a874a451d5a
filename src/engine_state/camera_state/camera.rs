//! # Camera Implementation
//!
//! This module contains the core camera implementation including:
//! - Camera representation (position, pitch and yaw in degrees)
//! - View-projection matrix calculation
//! - Camera-relative movement axes
//! - GPU uniform packing
//!
//! A camera is a snapshot: the game state builds a fresh one every frame from its
//! current position and orientation and never mutates it afterwards.

use crate::math::{AngleDeg, Mat4, Vec3};

use super::{DEFAULT_ASPECT_RATIO, DEFAULT_FAR_PLANE, DEFAULT_FIELD_OF_VIEW, DEFAULT_NEAR_PLANE};

/// Represents a first-person camera in 3D space.
///
/// # Fields
/// - `position`: The camera's position in world space
/// - `pitch`: Rotation about the camera's local X axis, in degrees (positive looks up)
/// - `yaw`: Rotation about the world Y axis, in degrees
/// - `aspect_ratio`: Viewport width / height, if known
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// The camera's position in world space
    pub position: Vec3,
    /// Up/down look angle in degrees
    pub pitch: AngleDeg,
    /// Left/right look angle in degrees
    pub yaw: AngleDeg,
    /// Viewport width / height, if known
    pub aspect_ratio: Option<f32>,
    /// Vertical field of view in degrees
    pub field_of_view: AngleDeg,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Camera {
    /// Creates a new camera with the default projection.
    ///
    /// # Arguments
    /// * `position` - Position of the camera in world space
    /// * `pitch` - Up/down look angle in degrees
    /// * `yaw` - Left/right look angle in degrees
    ///
    /// # Example
    /// ```rust
    /// use voxel_scene::{Camera, Vec3};
    /// let camera = Camera::new(Vec3::new(0.0, 0.0, 48.0), 0.0, 0.0);
    /// let view_proj = camera.view_projection(16.0 / 9.0);
    /// ```
    pub fn new(position: Vec3, pitch: AngleDeg, yaw: AngleDeg) -> Self {
        Self {
            position,
            pitch,
            yaw,
            aspect_ratio: None,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
        }
    }

    /// Returns the camera with a known viewport aspect ratio.
    pub fn with_aspect_ratio(self, aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio: Some(aspect_ratio),
            ..self
        }
    }

    /// Returns the camera with a different projection.
    pub fn with_projection(self, field_of_view: AngleDeg, near: f32, far: f32) -> Self {
        Self {
            field_of_view,
            near,
            far,
            ..self
        }
    }

    /// The camera's placement in the world: `translation · rotY(yaw) · rotX(pitch)`.
    ///
    /// Yaw turns about the world Y axis, then pitch tilts about the already turned
    /// local X axis.
    pub fn transform(&self) -> Mat4 {
        let translate = Mat4::translation(self.position.x, self.position.y, self.position.z);
        let rotate = Mat4::rot_y(self.yaw).mul(&Mat4::rot_x(self.pitch));
        translate.mul(&rotate)
    }

    /// World to camera space.
    pub fn view(&self) -> Mat4 {
        self.transform().inv_rigid()
    }

    /// Camera to clip space for the given aspect ratio.
    pub fn projection(&self, ar: f32) -> Mat4 {
        Mat4::perspective(ar, self.field_of_view, self.near, self.far)
    }

    /// Calculates the view-projection matrix.
    ///
    /// This moves things into position relative to the camera and then projects them.
    ///
    /// # Arguments
    /// * `ar` - The aspect ratio of the screen
    pub fn view_projection(&self, ar: f32) -> Mat4 {
        self.projection(ar).mul(&self.view())
    }

    /// The view-projection matrix using the stored aspect ratio (or the default one).
    pub fn matrix(&self) -> Mat4 {
        self.view_projection(self.aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO))
    }

    /// Returns the right, up and backward axes relative to the camera.
    ///
    /// Only yaw is applied, so moving along these axes stays horizontal however far
    /// the camera looks up or down.
    pub fn relative_xyz(&self) -> [Vec3; 3] {
        Mat4::rot_y(self.yaw).basis()
    }
}

/// GPU-friendly representation of camera data for shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Column-major view-projection matrix
    pub view_proj: [f32; 16],
}

impl CameraUniform {
    /// Creates a new camera uniform holding the identity matrix.
    pub fn new() -> Self {
        Self {
            view_proj: *Mat4::identity().columns(),
        }
    }

    /// Packs the camera's view-projection matrix for the given aspect ratio.
    pub fn from_camera(camera: &Camera, ar: f32) -> Self {
        Self {
            view_proj: *camera.view_projection(ar).columns(),
        }
    }

    /// The uniform as raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).magnitude() < EPSILON, "{a:?} vs {b:?}");
    }

    fn to_ndc(m: &Mat4, p: Vec3) -> Vec3 {
        let [x, y, z, w] = m.transform_point(p);
        Vec3::new(x / w, y / w, z / w)
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 48.0), 0.0, 0.0);
        let m = camera.view_projection(1.0);
        let ahead = to_ndc(&m, Vec3::new(0.0, 0.0, 40.0));
        assert!(ahead.x.abs() < EPSILON && ahead.y.abs() < EPSILON);
        assert!(ahead.z > -1.0 && ahead.z < 1.0);

        let [_, _, _, w_behind] = m.transform_point(Vec3::new(0.0, 0.0, 56.0));
        assert!(w_behind < 0.0);
    }

    #[test]
    fn view_moves_camera_to_origin() {
        let camera = Camera::new(Vec3::new(3.0, -2.0, 7.0), 25.0, -140.0);
        let [x, y, z, w] = camera.view().transform_point(camera.position);
        assert_vec_close(Vec3::new(x, y, z), Vec3::ZERO);
        assert_eq!(w, 1.0);
    }

    #[test]
    fn yaw_turns_left_about_world_y() {
        // a quarter turn makes the camera look down -X
        let camera = Camera::new(Vec3::ZERO, 0.0, 90.0);
        let ndc = to_ndc(&camera.view_projection(1.0), Vec3::new(-10.0, 0.0, 0.0));
        assert!(ndc.x.abs() < EPSILON && ndc.y.abs() < EPSILON);
    }

    #[test]
    fn pitch_tilts_after_yaw() {
        // yawed a quarter turn, then pitched up 45 degrees: looking along (-1, 1, 0)
        let camera = Camera::new(Vec3::ZERO, 45.0, 90.0);
        let ndc = to_ndc(&camera.view_projection(1.0), Vec3::new(-5.0, 5.0, 0.0));
        assert!(ndc.x.abs() < EPSILON && ndc.y.abs() < EPSILON, "{ndc:?}");

        // applying pitch before yaw would look along (0, 1, -1) rotated instead
        let wrong = Vec3::new(0.0, 5.0, -5.0);
        let ndc = to_ndc(&camera.view_projection(1.0), wrong);
        assert!(ndc.x.abs() > 0.5 || ndc.y.abs() > 0.5);
    }

    #[test]
    fn view_projection_is_projection_times_view() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), -10.0, 30.0);
        let expected = Mat4::perspective(1.5, 60.0, 0.1, 40.0).mul(
            &Mat4::translation(1.0, 2.0, 3.0)
                .mul(&Mat4::rot_y(30.0).mul(&Mat4::rot_x(-10.0)))
                .inv_rigid(),
        );
        assert_eq!(camera.view_projection(1.5), expected);
    }

    #[test]
    fn relative_axes_ignore_pitch() {
        let level = Camera::new(Vec3::ZERO, 0.0, 30.0);
        let tilted = Camera::new(Vec3::ZERO, 80.0, 30.0);
        assert_eq!(level.relative_xyz(), tilted.relative_xyz());
        for axis in tilted.relative_xyz() {
            assert!((axis.magnitude() - 1.0).abs() < EPSILON);
        }
        let [x, y, z] = tilted.relative_xyz();
        assert_eq!(y, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(x.y, 0.0);
        assert_eq!(z.y, 0.0);
    }

    #[test]
    fn relative_axes_at_zero_yaw_are_world_axes() {
        let [x, y, z] = Camera::new(Vec3::ZERO, 12.0, 0.0).relative_xyz();
        assert_eq!(x, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(y, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn matrix_uses_stored_aspect_ratio() {
        let camera = Camera::new(Vec3::ZERO, 0.0, 0.0);
        assert_eq!(camera.matrix(), camera.view_projection(DEFAULT_ASPECT_RATIO));
        let wide = camera.with_aspect_ratio(2.0);
        assert_eq!(wide.matrix(), camera.view_projection(2.0));
    }

    #[test]
    fn uniform_packs_column_major_matrix() {
        let camera = Camera::new(Vec3::new(0.0, 1.0, 2.0), 5.0, 5.0);
        let uniform = CameraUniform::from_camera(&camera, 1.25);
        assert_eq!(&uniform.view_proj, camera.view_projection(1.25).columns());
        assert_eq!(uniform.as_bytes().len(), 64);
        assert_eq!(CameraUniform::default().view_proj, *Mat4::identity().columns());
    }
}
