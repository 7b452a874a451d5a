//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x16x16 blocks of voxel data, together with the lazily rebuilt mesh derived from it.
//!
//! ## Storage
//!
//! Every cell stores a `BlockTypeSize` id (0 = air) in a dense 4096 entry array,
//! addressed by the packed index `(z << 8) | (y << 4) | x`.
//!
//! ### Performance Characteristics
//! - **Block read/write**: O(1)
//! - **Neighbour test** (`free`): O(1), out-of-range positions count as open
//! - **Mesh**: rebuilt in full on the first `view()` after any write, otherwise reused
//!
//! Because neighbouring chunks are never consulted, faces on the chunk border are
//! always emitted, even when the adjacent chunk is solid there.

use std::rc::Rc;

use cgmath::Point3;
use log::debug;
use web_time::Instant;

use chunk_iteration::ChunkBlockIterator;

use super::block::block_side::BlockSide;
use super::block::block_type::BlockType;
use super::block::{BlockTypeSize, AIR};
use crate::engine_state::rendering::meshing::{self, ChunkView};
use crate::math::Vec3;

pub mod chunk_iteration;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: i32 = 16;
/// The number of blocks in a single 2D plane of a chunk (CHUNK_DIMENSION²).
pub const CHUNK_PLANE_SIZE: i32 = CHUNK_DIMENSION * CHUNK_DIMENSION;
/// The total number of blocks in a chunk (CHUNK_DIMENSION³).
pub const CHUNK_SIZE: i32 = CHUNK_PLANE_SIZE * CHUNK_DIMENSION;

/// A block position relative to the chunk's minimum corner.
pub type LocalPosition = Point3<i32>;

/// Whether the cached mesh still matches the blocks.
enum MeshState {
    /// Blocks changed since the last build (or nothing was built yet).
    Stale,
    /// The mesh matches the blocks.
    Fresh(Rc<ChunkView>),
}

/// Represents a 16x16x16 collection of voxel blocks in the world.
///
/// The chunk owns its block storage exclusively. Writes only flip the mesh to
/// stale; the mesh itself is regenerated on the next call to [`Chunk::view`].
pub struct Chunk {
    /// World-space position of the chunk's minimum corner.
    position: Vec3,

    /// Block ids indexed by [`Chunk::index`].
    blocks: Box<[BlockTypeSize; CHUNK_SIZE as usize]>,

    /// Mesh derived from `blocks`.
    mesh: MeshState,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are air).
    ///
    /// # Arguments
    /// * `position` - World-space position of the chunk's minimum corner
    pub fn new(position: Vec3) -> Self {
        Chunk {
            position,
            blocks: Box::new([AIR; CHUNK_SIZE as usize]),
            mesh: MeshState::Stale,
        }
    }

    /// Creates a new chunk filled with blocks of one type.
    pub fn solid(position: Vec3, block_type: BlockType) -> Self {
        let mut chunk = Chunk::new(position);
        chunk.blocks.fill(block_type.id());
        chunk
    }

    /// Creates a new chunk with a 3D checkerboard pattern.
    ///
    /// A cell is filled when `x + y + z` is even, so no two filled cells share a face.
    pub fn checkerboard(position: Vec3, block_type: BlockType) -> Self {
        let mut chunk = Chunk::new(position);
        for local in Self::positions() {
            if (local.x + local.y + local.z) % 2 == 0 {
                chunk.set_block(local, block_type);
            }
        }
        chunk
    }

    /// Creates a new chunk where every cell independently holds `block_type` with
    /// the given probability.
    pub fn random(
        position: Vec3,
        block_type: BlockType,
        probability: f64,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let mut chunk = Chunk::new(position);
        for local in Self::positions() {
            if rng.f64() < probability {
                chunk.set_block(local, block_type);
            }
        }
        chunk
    }

    /// Every local position in packed-index order (x fastest, then y, then z).
    pub fn positions() -> impl Iterator<Item = LocalPosition> {
        (0..CHUNK_DIMENSION).flat_map(|z| {
            (0..CHUNK_DIMENSION)
                .flat_map(move |y| (0..CHUNK_DIMENSION).map(move |x| Point3::new(x, y, z)))
        })
    }

    /// World-space position of the chunk's minimum corner.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether `local` lies inside the chunk.
    pub fn in_bounds(local: LocalPosition) -> bool {
        let range = 0..CHUNK_DIMENSION;
        range.contains(&local.x) && range.contains(&local.y) && range.contains(&local.z)
    }

    /// Packed index of an in-bounds local position.
    pub fn index(local: LocalPosition) -> usize {
        debug_assert!(
            Self::in_bounds(local),
            "local position {local:?} is outside the chunk"
        );
        ((local.z << 8) | (local.y << 4) | local.x) as usize
    }

    /// Writes a block and marks the mesh stale.
    pub fn set_block(&mut self, local: LocalPosition, block_type: BlockType) {
        self.set_block_id(local, block_type.id());
    }

    /// Empties a cell and marks the mesh stale.
    pub fn clear_block(&mut self, local: LocalPosition) {
        self.set_block_id(local, AIR);
    }

    fn set_block_id(&mut self, local: LocalPosition, id: BlockTypeSize) {
        self.blocks[Self::index(local)] = id;
        self.mesh = MeshState::Stale;
    }

    /// Reads a block; `None` means air.
    ///
    /// # Panics
    /// Panics if the stored id has no catalog entry.
    pub fn get_block(&self, local: LocalPosition) -> Option<BlockType> {
        match self.blocks[Self::index(local)] {
            AIR => None,
            id => Some(BlockType::from_id(id)),
        }
    }

    /// Whether a face bordering `local` should be drawn.
    ///
    /// True for air and for every position outside the chunk.
    pub fn free(&self, local: LocalPosition) -> bool {
        !Self::in_bounds(local) || self.blocks[Self::index(local)] == AIR
    }

    /// Bit mask of the sides of `local` whose neighbour is free (see [`BlockSide::bit`]).
    pub fn visibility_mask(&self, local: LocalPosition) -> u8 {
        BlockSide::ALL
            .iter()
            .filter(|side| self.free(local + side.normal()))
            .fold(0, |mask, side| mask | side.bit())
    }

    /// Number of occupied cells.
    pub fn block_count(&self) -> usize {
        self.blocks.iter().filter(|&&id| id != AIR).count()
    }

    /// Iterates occupied cells in packed-index order.
    pub fn blocks(&self) -> ChunkBlockIterator<'_> {
        ChunkBlockIterator::new(&self.blocks)
    }

    /// Whether the next [`Chunk::view`] will rebuild the mesh.
    pub fn is_stale(&self) -> bool {
        matches!(self.mesh, MeshState::Stale)
    }

    /// Returns the chunk's mesh, rebuilding it first if any block changed since the
    /// last call.
    ///
    /// Repeated calls without an intervening write return the same allocation.
    pub fn view(&mut self) -> Rc<ChunkView> {
        if let MeshState::Fresh(view) = &self.mesh {
            return Rc::clone(view);
        }

        let start = Instant::now();
        let view = Rc::new(meshing::build_chunk_view(self));
        debug!(
            "Rebuilt chunk mesh at {:?}: {} vertices in {:?}",
            self.position,
            view.vertex_count,
            start.elapsed()
        );
        self.mesh = MeshState::Fresh(Rc::clone(&view));
        view
    }
}
