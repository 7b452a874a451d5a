//! Vertex buffer assembly for voxel rendering.
//!
//! This module turns blocks plus visibility masks into the flat, interleaved vertex
//! buffer the rasterizer consumes.

use crate::engine_state::rendering::ChunkVertex;
use crate::engine_state::voxels::block::block_type::BlockType;
use crate::math::Vec3;

use super::face::{Face, EMISSION_ORDER, VERTICES_PER_FACE};

/// Visibility mask with every face visible.
pub const ALL_FACES: u8 = 0b11_1111;

/// Vertices in a fully visible cube.
pub const VERTICES_PER_BLOCK: usize = EMISSION_ORDER.len() * VERTICES_PER_FACE;

/// Accumulates the faces of many blocks into one vertex buffer.
#[derive(Debug, Default)]
pub struct MeshBuilder {
    /// The vertex data generated so far
    vertices: Vec<ChunkVertex>,
}

impl MeshBuilder {
    /// Creates a builder with room for `blocks` fully visible cubes.
    pub fn with_block_capacity(blocks: usize) -> Self {
        MeshBuilder {
            vertices: Vec::with_capacity(blocks * VERTICES_PER_BLOCK),
        }
    }

    /// Appends the six vertices of one face.
    pub fn face(&mut self, face: &Face) {
        self.vertices.extend_from_slice(&face.vertices());
    }

    /// Appends the faces of a block whose bit is set in `mask`, in [`EMISSION_ORDER`].
    ///
    /// # Arguments
    /// * `origin` - The block's minimum corner
    /// * `block_type` - Selects the atlas tile for each face
    /// * `mask` - Visibility bits, see `BlockSide::bit`
    pub fn block(&mut self, origin: Vec3, block_type: BlockType, mask: u8) {
        for side in EMISSION_ORDER {
            if mask & side.bit() != 0 {
                self.face(&Face::new(origin, block_type, side));
            }
        }
    }

    /// Number of vertices written so far.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Consumes the builder, returning the vertices.
    pub fn into_vertices(self) -> Vec<ChunkVertex> {
        self.vertices
    }
}
