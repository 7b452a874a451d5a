//! # World Module
//!
//! This module provides the `World` struct which manages a collection of chunks in the
//! voxel world.
//!
//! ## Architecture
//!
//! The world is a cube of chunks around the origin. A chunk's grid coordinate `g` puts
//! its minimum corner at `16 · g` in world space. Chunks keep their insertion order so
//! scenes list them the same way every frame.
//!
//! ## Chunk Borders
//!
//! Each chunk is meshed on its own, so faces on chunk borders are always drawn, even
//! between two solid neighbours.

use std::collections::HashMap;
use std::rc::Rc;

use cgmath::Point3;
use log::info;

use super::block::block_type::BlockType;
use super::chunk::{Chunk, LocalPosition, CHUNK_DIMENSION};
use crate::engine_state::rendering::meshing::ChunkView;
use crate::math::Vec3;

/// A chunk coordinate: the chunk's position in units of whole chunks.
pub type GridPosition = Point3<i32>;

/// A block coordinate in world space.
pub type BlockPosition = Point3<i32>;

/// Represents a voxel world composed of multiple chunks.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_scene::{BlockType, World};
///
/// let mut world = World::with_radius(1);
/// assert_eq!(world.len(), 8);
/// world.set_block(Point3::new(-3, 4, 5), BlockType::STONE);
/// assert_eq!(world.block_at(Point3::new(-3, 4, 5)), Some(BlockType::STONE));
/// ```
#[derive(Default)]
pub struct World {
    /// Chunks in insertion order.
    chunks: Vec<Chunk>,
    /// Grid coordinate to index into `chunks`.
    index: HashMap<GridPosition, usize>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        World::default()
    }

    /// Creates a world of empty chunks covering `-radius..radius` on every axis.
    pub fn with_radius(radius: i32) -> Self {
        let mut world = World::new();
        for x in -radius..radius {
            for y in -radius..radius {
                for z in -radius..radius {
                    world.add_chunk_at(Point3::new(x, y, z));
                }
            }
        }
        world
    }

    /// Adds an empty chunk at the given grid coordinate if one doesn't already exist.
    pub fn add_chunk_at(&mut self, grid: GridPosition) {
        if self.index.contains_key(&grid) {
            return;
        }
        let origin = Vec3::new(
            (grid.x * CHUNK_DIMENSION) as f32,
            (grid.y * CHUNK_DIMENSION) as f32,
            (grid.z * CHUNK_DIMENSION) as f32,
        );
        self.index.insert(grid, self.chunks.len());
        self.chunks.push(Chunk::new(origin));
    }

    /// Fills every chunk with scattered blocks.
    ///
    /// Each chunk gets one randomly chosen block type, placed in each of its cells with
    /// the given probability.
    pub fn populate(&mut self, rng: &mut fastrand::Rng, probability: f64) {
        for chunk in &mut self.chunks {
            let block_type = BlockType::random(rng);
            *chunk = Chunk::random(chunk.position(), block_type, probability, rng);
        }
        info!(
            "Populated {} chunks with {} blocks",
            self.chunks.len(),
            self.block_count()
        );
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the world has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Total occupied cells across every chunk.
    pub fn block_count(&self) -> usize {
        self.chunks.iter().map(Chunk::block_count).sum()
    }

    /// All chunks in insertion order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The chunk at a grid coordinate.
    pub fn chunk_at(&self, grid: GridPosition) -> Option<&Chunk> {
        self.index.get(&grid).map(|&i| &self.chunks[i])
    }

    /// The chunk at a grid coordinate, for writing.
    pub fn chunk_at_mut(&mut self, grid: GridPosition) -> Option<&mut Chunk> {
        self.index.get(&grid).map(|&i| &mut self.chunks[i])
    }

    /// Splits a world block coordinate into its chunk and the position inside it.
    pub fn split_position(position: BlockPosition) -> (GridPosition, LocalPosition) {
        let grid = Point3::new(
            position.x.div_euclid(CHUNK_DIMENSION),
            position.y.div_euclid(CHUNK_DIMENSION),
            position.z.div_euclid(CHUNK_DIMENSION),
        );
        let local = Point3::new(
            position.x.rem_euclid(CHUNK_DIMENSION),
            position.y.rem_euclid(CHUNK_DIMENSION),
            position.z.rem_euclid(CHUNK_DIMENSION),
        );
        (grid, local)
    }

    /// The block at a world position; `None` for air or outside every chunk.
    pub fn block_at(&self, position: BlockPosition) -> Option<BlockType> {
        let (grid, local) = Self::split_position(position);
        self.chunk_at(grid)?.get_block(local)
    }

    /// Writes a block at a world position, marking only the owning chunk stale.
    ///
    /// Returns `false` if no chunk covers the position.
    pub fn set_block(&mut self, position: BlockPosition, block_type: BlockType) -> bool {
        let (grid, local) = Self::split_position(position);
        match self.chunk_at_mut(grid) {
            Some(chunk) => {
                chunk.set_block(local, block_type);
                true
            }
            None => false,
        }
    }

    /// Every chunk's mesh, rebuilding only the stale ones.
    pub fn views(&mut self) -> Vec<Rc<ChunkView>> {
        self.chunks.iter_mut().map(Chunk::view).collect()
    }
}
