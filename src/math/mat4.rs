use super::{deg_to_rad, AngleDeg, Vec3};

/// Tolerance used by the debug-only rigidity check in [`Mat4::inv_rigid`].
const RIGID_TOLERANCE: f32 = 1e-3;

/// A 4x4 matrix stored in column-major order.
///
/// Element `(row, col)` lives at `data[row + 4 * col]`, which is the layout the
/// rasterizer expects for its view-projection uniform. Vectors are columns, so
/// `a.mul(&b)` applied to a point transforms it by `b` first and then by `a`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Mat4::identity()
    }
}

impl Mat4 {
    /// Wraps 16 column-major floats.
    pub const fn from_columns(data: [f32; 16]) -> Self {
        Mat4 { data }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Mat4::scale(1.0, 1.0, 1.0)
    }

    /// Non-uniform scale along each axis.
    #[rustfmt::skip]
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Mat4::from_columns([
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Translation by `(x, y, z)`.
    #[rustfmt::skip]
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::from_columns([
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            x,   y,   z,   1.0,
        ])
    }

    /// Counter-clockwise rotation about the X axis.
    #[rustfmt::skip]
    pub fn rot_x(angle: AngleDeg) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        Mat4::from_columns([
            1.0, 0.0, 0.0, 0.0,
            0.0, c,   s,   0.0,
            0.0, -s,  c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Counter-clockwise rotation about the Y axis.
    #[rustfmt::skip]
    pub fn rot_y(angle: AngleDeg) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        Mat4::from_columns([
            c,   0.0, -s,  0.0,
            0.0, 1.0, 0.0, 0.0,
            s,   0.0, c,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Counter-clockwise rotation about the Z axis.
    #[rustfmt::skip]
    pub fn rot_z(angle: AngleDeg) -> Self {
        let (s, c) = deg_to_rad(angle).sin_cos();
        Mat4::from_columns([
            c,   s,   0.0, 0.0,
            -s,  c,   0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Symmetric perspective projection.
    ///
    /// Maps a right-handed view space (camera looking down -Z) to clip space with
    /// depth in `[-1, 1]`.
    ///
    /// # Arguments
    /// * `ar` - Aspect ratio (width / height)
    /// * `fov_y` - Vertical field of view in degrees
    /// * `near` - Distance to the near clipping plane
    /// * `far` - Distance to the far clipping plane
    #[rustfmt::skip]
    pub fn perspective(ar: f32, fov_y: AngleDeg, near: f32, far: f32) -> Self {
        let f = 1.0 / (deg_to_rad(fov_y) / 2.0).tan();
        let range_inv = 1.0 / (near - far);
        Mat4::from_columns([
            f / ar, 0.0, 0.0,                          0.0,
            0.0,    f,   0.0,                          0.0,
            0.0,    0.0, (far + near) * range_inv,     -1.0,
            0.0,    0.0, 2.0 * far * near * range_inv, 0.0,
        ])
    }

    /// Orthographic projection of a box centred on the origin.
    ///
    /// The box is `ar * height` wide, `height` tall and `depth` deep, and is mapped onto
    /// the `[-1, 1]` cube. Depth is flipped so that -Z points into the screen, matching
    /// [`Mat4::perspective`].
    pub fn ortho(ar: f32, height: f32, depth: f32) -> Self {
        Mat4::scale(2.0 / (ar * height), 2.0 / height, -2.0 / depth)
    }

    /// Returns `self · that`: the transform applying `that` first, then `self`.
    pub fn mul(&self, that: &Mat4) -> Mat4 {
        let mut out = [0.0f32; 16];
        for k in 0..4 {
            for i in 0..4 {
                let mut acc = 0.0f32;
                for j in 0..4 {
                    acc += self.data[i + (j << 2)] * that.data[j + (k << 2)];
                }
                out[i + (k << 2)] = acc;
            }
        }
        Mat4::from_columns(out)
    }

    /// Inverts a rigid transform (rotation followed by translation).
    ///
    /// The upper-left 3x3 is treated as an orthonormal basis and transposed, and the
    /// translation becomes `-Rᵀ·t`. The result is only meaningful when `self` has no
    /// scale, shear or projective part; debug builds assert this.
    #[rustfmt::skip]
    pub fn inv_rigid(&self) -> Mat4 {
        debug_assert!(self.is_rigid(), "inv_rigid called on a non-rigid matrix: {self:?}");
        let [x, y, z] = self.basis();
        let t = self.translation_part();
        Mat4::from_columns([
            x.x,       y.x,       z.x,       0.0,
            x.y,       y.y,       z.y,       0.0,
            x.z,       y.z,       z.z,       0.0,
            -x.dot(t), -y.dot(t), -z.dot(t), 1.0,
        ])
    }

    /// The first three columns, i.e. the images of the X, Y and Z axes.
    pub fn basis(&self) -> [Vec3; 3] {
        [self.column(0), self.column(1), self.column(2)]
    }

    /// The translation column.
    pub fn translation_part(&self) -> Vec3 {
        self.column(3)
    }

    /// The 16 floats in column-major order.
    pub fn columns(&self) -> &[f32; 16] {
        &self.data
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row + (col << 2)]
    }

    /// Matrix with rows and columns swapped.
    pub fn transpose(&self) -> Mat4 {
        let mut out = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col + (row << 2)] = self.data[row + (col << 2)];
            }
        }
        Mat4::from_columns(out)
    }

    /// Applies the matrix to `p` as a point (`w = 1`), returning homogeneous coordinates.
    pub fn transform_point(&self, p: Vec3) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (row, value) in out.iter_mut().enumerate() {
            *value = self.get(row, 0) * p.x
                + self.get(row, 1) * p.y
                + self.get(row, 2) * p.z
                + self.get(row, 3);
        }
        out
    }

    fn column(&self, col: usize) -> Vec3 {
        let base = col << 2;
        Vec3::new(self.data[base], self.data[base + 1], self.data[base + 2])
    }

    fn is_rigid(&self) -> bool {
        let [x, y, z] = self.basis();
        let near = |a: f32, b: f32| (a - b).abs() < RIGID_TOLERANCE;
        near(x.dot(x), 1.0)
            && near(y.dot(y), 1.0)
            && near(z.dot(z), 1.0)
            && near(x.dot(y), 0.0)
            && near(y.dot(z), 0.0)
            && near(z.dot(x), 0.0)
            && self.get(3, 0) == 0.0
            && self.get(3, 1) == 0.0
            && self.get(3, 2) == 0.0
            && self.get(3, 3) == 1.0
    }
}

impl From<Mat4> for cgmath::Matrix4<f32> {
    fn from(m: Mat4) -> Self {
        let d = m.data;
        #[rustfmt::skip]
        let out = cgmath::Matrix4::new(
            d[0],  d[1],  d[2],  d[3],
            d[4],  d[5],  d[6],  d[7],
            d[8],  d[9],  d[10], d[11],
            d[12], d[13], d[14], d[15],
        );
        out
    }
}

impl From<cgmath::Matrix4<f32>> for Mat4 {
    fn from(m: cgmath::Matrix4<f32>) -> Self {
        let columns: [[f32; 4]; 4] = m.into();
        let mut data = [0.0f32; 16];
        for (col, values) in columns.iter().enumerate() {
            data[col * 4..col * 4 + 4].copy_from_slice(values);
        }
        Mat4::from_columns(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Deg, SquareMatrix};

    const EPSILON: f32 = 1e-6;

    fn assert_close(a: &Mat4, b: &Mat4, epsilon: f32) {
        for (i, (x, y)) in a.columns().iter().zip(b.columns()).enumerate() {
            assert!(
                (x - y).abs() <= epsilon,
                "element {i} differs: {x} vs {y}\n{a:?}\n{b:?}"
            );
        }
    }

    fn rigid_samples() -> Vec<Mat4> {
        let mut samples = Vec::new();
        let angles = [0.0, 15.0, 45.0, 90.0, 133.0, -60.0, 270.0];
        let offsets = [
            Vec3::ZERO,
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-0.5, 0.25, 0.125),
        ];
        for (n, &a) in angles.iter().enumerate() {
            let b = angles[(n + 2) % angles.len()];
            let c = angles[(n + 5) % angles.len()];
            let rotation = Mat4::rot_y(a).mul(&Mat4::rot_x(b)).mul(&Mat4::rot_z(c));
            for t in offsets {
                samples.push(Mat4::translation(t.x, t.y, t.z).mul(&rotation));
            }
        }
        samples
    }

    #[test]
    fn inv_rigid_inverts_rotation_translation() {
        for m in rigid_samples() {
            let inv = m.inv_rigid();
            assert_close(&inv.mul(&m), &Mat4::identity(), EPSILON * 4.0);
            assert_close(&m.mul(&inv), &Mat4::identity(), EPSILON * 4.0);
        }
    }

    #[test]
    fn inv_rigid_matches_general_inverse() {
        for m in rigid_samples() {
            let general: cgmath::Matrix4<f32> = m.into();
            let expected = Mat4::from(general.invert().unwrap());
            assert_close(&m.inv_rigid(), &expected, 1e-5);
        }
    }

    #[test]
    fn identity_is_neutral() {
        let samples = [
            Mat4::scale(2.0, 3.0, -1.5),
            Mat4::rot_x(33.0),
            Mat4::rot_y(-71.0),
            Mat4::rot_z(180.0),
            Mat4::translation(4.0, -5.0, 6.5),
            Mat4::perspective(1.5, 60.0, 0.1, 40.0),
        ];
        for m in samples {
            assert_eq!(Mat4::identity().mul(&m), m);
            assert_eq!(m.mul(&Mat4::identity()), m);
        }
    }

    #[test]
    fn mul_applies_right_operand_first() {
        let t = Mat4::translation(1.0, 2.0, 3.0);
        let s = Mat4::scale(2.0, 2.0, 2.0);
        let p = Vec3::new(1.0, 1.0, 1.0);
        // scale then translate
        assert_eq!(t.mul(&s).transform_point(p), [3.0, 4.0, 5.0, 1.0]);
        // translate then scale
        assert_eq!(s.mul(&t).transform_point(p), [4.0, 6.0, 8.0, 1.0]);
    }

    #[test]
    fn mul_agrees_with_cgmath() {
        let a = Mat4::rot_y(30.0).mul(&Mat4::translation(1.0, 2.0, 3.0));
        let b = Mat4::perspective(1.25, 60.0, 0.1, 40.0);
        let (ca, cb): (cgmath::Matrix4<f32>, cgmath::Matrix4<f32>) = (a.into(), b.into());
        assert_close(&a.mul(&b), &Mat4::from(ca * cb), 1e-5);
    }

    #[test]
    fn rotations_agree_with_cgmath() {
        for angle in [0.0f32, 30.0, 90.0, -45.0, 200.0] {
            assert_close(
                &Mat4::rot_x(angle),
                &Mat4::from(cgmath::Matrix4::from_angle_x(Deg(angle))),
                EPSILON,
            );
            assert_close(
                &Mat4::rot_y(angle),
                &Mat4::from(cgmath::Matrix4::from_angle_y(Deg(angle))),
                EPSILON,
            );
            assert_close(
                &Mat4::rot_z(angle),
                &Mat4::from(cgmath::Matrix4::from_angle_z(Deg(angle))),
                EPSILON,
            );
        }
    }

    #[test]
    fn perspective_agrees_with_cgmath() {
        let ours = Mat4::perspective(16.0 / 9.0, 60.0, 0.1, 40.0);
        let theirs = cgmath::perspective(Deg(60.0f32), 16.0 / 9.0, 0.1, 40.0);
        assert_close(&ours, &Mat4::from(theirs), 1e-5);
        assert_eq!(ours.get(3, 2), -1.0);
        assert_eq!(ours.get(3, 3), 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = Mat4::perspective(1.0, 90.0, 1.0, 10.0);
        let near = m.transform_point(Vec3::new(0.0, 0.0, -1.0));
        let far = m.transform_point(Vec3::new(0.0, 0.0, -10.0));
        assert!((near[2] / near[3] + 1.0).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn ortho_maps_box_corners_to_unit_cube() {
        let m = Mat4::ortho(2.0, 4.0, 10.0);
        assert_eq!(m.transform_point(Vec3::new(4.0, 2.0, -5.0)), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(
            m.transform_point(Vec3::new(-4.0, -2.0, 5.0)),
            [-1.0, -1.0, -1.0, 1.0]
        );
    }

    #[test]
    fn translation_is_stored_in_last_column() {
        let m = Mat4::translation(7.0, 8.0, 9.0);
        assert_eq!(&m.columns()[12..15], &[7.0, 8.0, 9.0]);
        assert_eq!(m.translation_part(), Vec3::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let t = m.transpose();
        assert_eq!(t.get(3, 0), 1.0);
        assert_eq!(t.get(3, 1), 2.0);
        assert_eq!(t.get(3, 2), 3.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn basis_of_rot_y_quarter_turn() {
        let [x, y, z] = Mat4::rot_y(90.0).basis();
        assert!((x - Vec3::new(0.0, 0.0, -1.0)).magnitude() < EPSILON);
        assert!((y - Vec3::new(0.0, 1.0, 0.0)).magnitude() < EPSILON);
        assert!((z - Vec3::new(1.0, 0.0, 0.0)).magnitude() < EPSILON);
    }
}
