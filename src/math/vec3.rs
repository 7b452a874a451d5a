use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Magnitudes below this are treated as zero by [`Vec3::norm`].
pub const NORM_EPSILON: f32 = 1e-6;

/// A three dimensional vector, also used as a point with an implicit `w` of 1.0.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    /// Creates a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Component-wise sum.
    pub fn add(self, that: Vec3) -> Vec3 {
        Vec3::new(self.x + that.x, self.y + that.y, self.z + that.z)
    }

    /// Component-wise difference.
    pub fn sub(self, that: Vec3) -> Vec3 {
        Vec3::new(self.x - that.x, self.y - that.y, self.z - that.z)
    }

    /// Multiplies every component by `factor`.
    pub fn scale(self, factor: f32) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Component-wise product.
    pub fn mul(self, that: Vec3) -> Vec3 {
        Vec3::new(self.x * that.x, self.y * that.y, self.z * that.z)
    }

    /// Dot product, accumulated left to right in `f32`.
    pub fn dot(self, that: Vec3) -> f32 {
        self.x * that.x + self.y * that.y + self.z * that.z
    }

    /// Right-handed cross product.
    pub fn cross(self, that: Vec3) -> Vec3 {
        Vec3::new(
            self.y * that.z - self.z * that.y,
            self.z * that.x - self.x * that.z,
            self.x * that.y - self.y * that.x,
        )
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A vector shorter than [`NORM_EPSILON`] is returned unchanged, so normalising the
    /// zero vector yields the zero vector instead of NaNs.
    pub fn norm(self) -> Vec3 {
        let magnitude = self.magnitude();
        if magnitude < NORM_EPSILON {
            return self;
        }
        self.scale(1.0 / magnitude)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::sub(self, rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<cgmath::Vector3<f32>> for Vec3 {
    fn from(v: cgmath::Vector3<f32>) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for cgmath::Vector3<f32> {
    fn from(v: Vec3) -> Self {
        cgmath::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn norm_of_zero_is_zero() {
        let n = Vec3::ZERO.norm();
        assert_eq!(n, Vec3::ZERO);
        assert!(!n.x.is_nan());
    }

    #[test]
    fn norm_of_tiny_vector_is_unchanged() {
        let tiny = Vec3::new(1e-8, 0.0, -1e-8);
        assert_eq!(tiny.norm(), tiny);
    }

    #[test]
    fn norm_produces_unit_length() {
        let n = Vec3::new(3.0, -4.0, 12.0).norm();
        assert!((n.magnitude() - 1.0).abs() < 1e-6);
        let reference = cgmath::Vector3::new(3.0f32, -4.0, 12.0).normalize();
        assert!((n.x - reference.x).abs() < 1e-6);
        assert!((n.y - reference.y).abs() < 1e-6);
        assert!((n.z - reference.z).abs() < 1e-6);
    }

    #[test]
    fn arithmetic_returns_new_values() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.mul(b), Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn dot_and_cross_agree_with_cgmath() {
        let a = Vec3::new(0.3, -1.7, 2.25);
        let b = Vec3::new(-4.5, 0.125, 9.0);
        let (ca, cb): (cgmath::Vector3<f32>, cgmath::Vector3<f32>) = (a.into(), b.into());
        assert_eq!(a.dot(b), ca.dot(cb));
        assert_eq!(a.cross(b), Vec3::from(ca.cross(cb)));
    }
}
