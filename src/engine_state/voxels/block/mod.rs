//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel engine.
//! It includes block type definitions, block face handling, and the texture table that
//! maps every block type to its atlas tiles.

use block_side::BlockSide;
use block_type::BlockType;

use crate::math::Vec3;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// The stored id of an empty (air) cell.
pub const AIR: BlockTypeSize = 0;

/// Atlas tiles for the six faces of a block.
///
/// Every face shows `side` unless a top or bottom override is given.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockTextures {
    /// Tile shown on faces without an override
    pub side: usize,
    /// Tile shown on the top face, if different
    pub top: Option<usize>,
    /// Tile shown on the bottom face, if different
    pub bottom: Option<usize>,
}

impl BlockTextures {
    /// The same tile on every face.
    pub const fn uniform(side: usize) -> Self {
        BlockTextures {
            side,
            top: None,
            bottom: None,
        }
    }

    /// Separate tiles for the top and bottom faces.
    pub const fn capped(side: usize, top: usize, bottom: usize) -> Self {
        BlockTextures {
            side,
            top: Some(top),
            bottom: Some(bottom),
        }
    }

    /// The tile for `side`.
    pub fn texture(&self, side: BlockSide) -> usize {
        match side {
            BlockSide::TOP => self.top.unwrap_or(self.side),
            BlockSide::BOTTOM => self.bottom.unwrap_or(self.side),
            _ => self.side,
        }
    }
}

/// Maps each block type to its atlas tiles.
///
/// Indexed by `BlockType` id minus one; must list entries in `BlockType` order.
pub static BLOCK_TYPE_TO_TEXTURES: [BlockTextures; 6] = [
    BlockTextures::uniform(1),        // STONE
    BlockTextures::uniform(2),        // DIRT
    BlockTextures::capped(3, 0, 2),   // GRASS (top: 0, bottom: 2, sides: 3)
    BlockTextures::uniform(18),       // SAND
    BlockTextures::uniform(19),       // GRAVEL
    BlockTextures::uniform(34),       // COAL
];

/// A block placed somewhere, used when meshing a loose list of blocks rather than a chunk.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Block {
    /// Position of the block's minimum corner
    pub position: Vec3,
    /// What the block is made of
    pub block_type: BlockType,
}

impl Block {
    /// Creates a new block of the specified type at `position`.
    pub fn new(position: Vec3, block_type: BlockType) -> Self {
        Block {
            position,
            block_type,
        }
    }
}
