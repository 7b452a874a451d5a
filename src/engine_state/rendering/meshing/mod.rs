//! Mesh generation and management for voxel rendering.
//!
//! This module converts chunk data into the render payload handed to the rasterizer.
//!
//! # Architecture
//! - [`ChunkView`]: placement plus interleaved vertex buffer for one chunk
//! - [`build_chunk_view`]: meshes a chunk, culling faces hidden by neighbours
//! - [`view_blocks`]: meshes a loose list of blocks with every face visible
//! - `mesh/`: face geometry and buffer assembly
//!
//! # Wire format
//! Each vertex is six `f32`s: position (3), atlas UV (2), shading (1). A fully visible
//! cube is 36 vertices.

mod mesh;

pub use mesh::*;

use crate::engine_state::rendering::ChunkVertex;
use crate::engine_state::voxels::{block::Block, chunk::Chunk};
use crate::math::{Mat4, Vec3};

/// The render payload for one chunk.
///
/// Positions in the buffer are relative to `position`; the renderer places them in
/// the world with [`ChunkView::model_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkView {
    /// World-space placement of the vertices
    pub position: Vec3,
    /// Interleaved vertex data
    pub vertices: Vec<ChunkVertex>,
    /// Number of vertices in `vertices`
    pub vertex_count: usize,
}

impl ChunkView {
    /// Wraps a finished vertex buffer.
    pub fn new(position: Vec3, vertices: Vec<ChunkVertex>) -> Self {
        ChunkView {
            position,
            vertex_count: vertices.len(),
            vertices,
        }
    }

    /// The vertex buffer as a flat `f32` slice, six floats per vertex.
    pub fn vertex_info(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Translation from view-local to world coordinates.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

/// Meshes a chunk.
///
/// Occupied cells are visited in packed-index order. For each, a face is emitted only
/// when the neighbour on that side is free; cells on the chunk border always expose
/// their outward faces.
pub fn build_chunk_view(chunk: &Chunk) -> ChunkView {
    let mut builder = MeshBuilder::with_block_capacity(chunk.block_count());
    for (local, block_type) in chunk.blocks() {
        let mask = chunk.visibility_mask(local);
        let origin = Vec3::new(local.x as f32, local.y as f32, local.z as f32);
        builder.block(origin, block_type, mask);
    }
    ChunkView::new(chunk.position(), builder.into_vertices())
}

/// Meshes an arbitrary list of blocks without any culling.
///
/// Each block contributes all six faces, so the result always holds
/// `36 * blocks.len()` vertices.
pub fn view_blocks(position: Vec3, blocks: &[Block]) -> ChunkView {
    let mut builder = MeshBuilder::with_block_capacity(blocks.len());
    for block in blocks {
        builder.block(block.position, block.block_type, ALL_FACES);
    }
    ChunkView::new(position, builder.into_vertices())
}
