//! # Camera State Management
//!
//! This module handles all camera-related functionality including:
//! - Camera position and orientation
//! - View and projection matrix calculations
//! - Movement axes for player input
//!
//! ## Core Components
//! - `Camera`: Represents the camera's position and orientation in 3D space
//! - `CameraUniform`: GPU representation of camera data for shaders

pub mod camera;

pub use camera::{Camera, CameraUniform};

use crate::math::AngleDeg;

/// Vertical field of view used unless configured otherwise.
pub const DEFAULT_FIELD_OF_VIEW: AngleDeg = 60.0;
/// Near clipping plane used unless configured otherwise.
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
/// Far clipping plane used unless configured otherwise.
pub const DEFAULT_FAR_PLANE: f32 = 40.0;
/// Aspect ratio assumed when the viewport size is unknown.
pub const DEFAULT_ASPECT_RATIO: f32 = 1.0;
