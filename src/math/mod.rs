//! # Math Module
//!
//! Small, pure value types used by every transform in the engine.
//!
//! ## Key Components
//! - `Vec3`: a three component `f32` vector with point semantics (implicit `w = 1`)
//! - `Mat4`: a column-major 4x4 matrix for affine and projective transforms
//! - `Color`: an RGBA colour
//!
//! All operations return new values. Nothing here mutates in place, so aliasing the
//! left and right operands of `Mat4::mul` is always safe.

mod color;
mod mat4;
mod vec3;

pub use color::Color;
pub use mat4::Mat4;
pub use vec3::Vec3;

/// An angle in degrees.
pub type AngleDeg = f32;

/// An angle in radians.
pub type AngleRad = f32;

/// A duration in seconds.
pub type Seconds = f32;

/// Converts an angle from degrees to radians.
pub fn deg_to_rad(angle: AngleDeg) -> AngleRad {
    (angle / 180.0) * std::f32::consts::PI
}

/// Clamps `x` into the closed range `[lo, hi]`.
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Picks a uniformly random element of `items`.
///
/// # Panics
/// Panics if `items` is empty.
pub fn choose<'a, T>(rng: &mut fastrand::Rng, items: &'a [T]) -> &'a T {
    &items[rng.usize(..items.len())]
}
