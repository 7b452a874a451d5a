//! # Chunk Iteration Module
//!
//! This module provides an iterator for traversing all non-air blocks in a chunk.
//! Cells are visited in packed-index order, which keeps mesh output stable for a
//! given chunk state.

use cgmath::Point3;

use crate::engine_state::voxels::block::{block_type::BlockType, BlockTypeSize, AIR};

use super::{LocalPosition, CHUNK_SIZE};

/// An iterator over all non-air blocks in a chunk.
///
/// Yields each occupied cell's local position together with its block type.
pub struct ChunkBlockIterator<'a> {
    /// The chunk's block ids
    blocks: &'a [BlockTypeSize; CHUNK_SIZE as usize],
    /// Next packed index to inspect
    current_offset: usize,
}

impl<'a> ChunkBlockIterator<'a> {
    /// Creates a new `ChunkBlockIterator` positioned before the first cell.
    pub fn new(blocks: &'a [BlockTypeSize; CHUNK_SIZE as usize]) -> Self {
        ChunkBlockIterator {
            blocks,
            current_offset: 0,
        }
    }

    /// Inverse of `Chunk::index`.
    fn unpack(offset: usize) -> LocalPosition {
        let offset = offset as i32;
        Point3::new(offset & 0xF, (offset >> 4) & 0xF, (offset >> 8) & 0xF)
    }
}

impl Iterator for ChunkBlockIterator<'_> {
    type Item = (LocalPosition, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_offset < self.blocks.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let id = self.blocks[offset];
            if id != AIR {
                return Some((Self::unpack(offset), BlockType::from_id(id)));
            }
        }
        None
    }
}
