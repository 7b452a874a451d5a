//! # Block Type Module
//!
//! This module defines the closed catalog of block types in the voxel world and the
//! conversion between a block type and the compact id stored in chunks.

use num_derive::FromPrimitive;

use super::{block_side::BlockSide, BlockTypeSize, BLOCK_TYPE_TO_TEXTURES};

/// Enumerates all possible block types in the voxel world.
///
/// The discriminant is the id stored in chunk data. Ids start at 1 because 0 means air,
/// and they follow declaration order, so inserting a variant renumbers every variant
/// after it (and invalidates any chunk data written with the old order).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Plain grey stone.
    STONE = 1,

    /// A basic dirt block.
    DIRT = 2,

    /// A grass block: grass on top, dirt at the bottom, grass-on-dirt on the sides.
    GRASS = 3,

    /// Sand.
    SAND = 4,

    /// Gravel.
    GRAVEL = 5,

    /// Stone with coal ore.
    COAL = 6,
}

impl BlockType {
    /// Every block type, in id order.
    pub const ALL: [BlockType; 6] = [
        BlockType::STONE,
        BlockType::DIRT,
        BlockType::GRASS,
        BlockType::SAND,
        BlockType::GRAVEL,
        BlockType::COAL,
    ];

    /// The id stored in chunk data for this block type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Converts a stored id back to its block type.
    ///
    /// # Panics
    /// Panics if `id` has no catalog entry. Chunk data holding such an id is corrupt,
    /// and there is no fallback texture to draw it with.
    pub fn from_id(id: BlockTypeSize) -> Self {
        match num::FromPrimitive::from_u8(id) {
            Some(block_type) => block_type,
            None => panic!("block id {id} has no entry in the block catalog"),
        }
    }

    /// The atlas tile drawn on the given side of this block.
    pub fn texture(self, side: BlockSide) -> usize {
        BLOCK_TYPE_TO_TEXTURES[self as usize - 1].texture(side)
    }

    /// Picks a random block type.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        *crate::math::choose(rng, &Self::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_round_trips_every_entry() {
        for block_type in BlockType::ALL {
            assert_eq!(BlockType::from_id(block_type.id()), block_type);
        }
    }

    #[test]
    fn ids_follow_catalog_order() {
        for (index, block_type) in BlockType::ALL.iter().enumerate() {
            assert_eq!(block_type.id() as usize, index + 1);
        }
    }

    #[test]
    #[should_panic(expected = "no entry in the block catalog")]
    fn air_id_is_not_a_block_type() {
        BlockType::from_id(0);
    }

    #[test]
    #[should_panic(expected = "block id 200")]
    fn unknown_id_panics() {
        BlockType::from_id(200);
    }

    #[test]
    fn grass_overrides_top_and_bottom() {
        assert_eq!(BlockType::GRASS.texture(BlockSide::TOP), 0);
        assert_eq!(BlockType::GRASS.texture(BlockSide::BOTTOM), 2);
        for side in [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::FRONT,
            BlockSide::BACK,
        ] {
            assert_eq!(BlockType::GRASS.texture(side), 3);
        }
    }

    #[test]
    fn uniform_blocks_use_one_tile() {
        let expected = [
            (BlockType::STONE, 1),
            (BlockType::DIRT, 2),
            (BlockType::SAND, 18),
            (BlockType::GRAVEL, 19),
            (BlockType::COAL, 34),
        ];
        for (block_type, tile) in expected {
            for side in BlockSide::ALL {
                assert_eq!(block_type.texture(side), tile, "{block_type:?} {side:?}");
            }
        }
    }
}
