//! # Block Side Module
//!
//! This module defines the different faces/sides of a voxel block, the neighbour each
//! face looks at, and the fixed shading value applied to it.

use cgmath::Vector3;

/// Shading for the top and bottom faces.
pub const TB_FACE_SHADING: f32 = 1.0;
/// Shading for the left and right faces.
pub const LR_FACE_SHADING: f32 = 0.8;
/// Shading for the front and back faces.
pub const FB_FACE_SHADING: f32 = 0.9;

/// Represents the six possible faces of a voxel block.
///
/// The discriminant doubles as the face's bit position in a visibility mask, so the
/// order is part of the chunk mesh format:
/// [TOP, BOTTOM, LEFT, RIGHT, FRONT, BACK]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The left face (facing negative X)
    LEFT = 2,

    /// The right face (facing positive X)
    RIGHT = 3,

    /// The front face (facing positive Z)
    FRONT = 4,

    /// The back face (facing negative Z)
    BACK = 5,
}

impl BlockSide {
    /// Every side, in discriminant order.
    pub const ALL: [BlockSide; 6] = [
        BlockSide::TOP,
        BlockSide::BOTTOM,
        BlockSide::LEFT,
        BlockSide::RIGHT,
        BlockSide::FRONT,
        BlockSide::BACK,
    ];

    /// Returns an array containing all six block faces in a consistent order.
    pub fn all() -> [BlockSide; 6] {
        Self::ALL
    }

    /// The offset from a block to the neighbour this face touches.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
        }
    }

    /// Fixed brightness multiplier for this face, a cheap stand-in for lighting.
    pub fn shading(self) -> f32 {
        match self {
            BlockSide::TOP | BlockSide::BOTTOM => TB_FACE_SHADING,
            BlockSide::LEFT | BlockSide::RIGHT => LR_FACE_SHADING,
            BlockSide::FRONT | BlockSide::BACK => FB_FACE_SHADING,
        }
    }

    /// This side's bit in a 6-bit visibility mask.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }
}
