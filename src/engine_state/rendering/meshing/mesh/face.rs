use crate::engine_state::rendering::ChunkVertex;
use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType};
use crate::math::Vec3;

/// Number of tiles along each edge of the square texture atlas.
pub const ATLAS_TILES: usize = 16;

/// How far each tile's UVs are pulled in from its edges, in texels of a 16px tile.
///
/// Without the inset, filtering at the tile edge samples the neighbouring tile.
pub const UV_SHIFT: f32 = 0.15;

/// Vertices emitted per face: two triangles, no index buffer.
pub const VERTICES_PER_FACE: usize = 6;

/// Order in which a block's faces are written to the vertex buffer.
pub const EMISSION_ORDER: [BlockSide; 6] = [
    BlockSide::FRONT,
    BlockSide::LEFT,
    BlockSide::TOP,
    BlockSide::BACK,
    BlockSide::RIGHT,
    BlockSide::BOTTOM,
];

/// The UV rectangle of one atlas tile after insetting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileUv {
    /// Left edge
    pub u: f32,
    /// Top edge
    pub v: f32,
    /// Width and height
    pub extent: f32,
}

impl TileUv {
    /// UVs for atlas tile `tile`, numbered row by row from the top left.
    pub fn new(tile: usize) -> Self {
        let tiles = ATLAS_TILES as f32;
        let inset = UV_SHIFT / tiles / tiles;
        TileUv {
            u: (tile % ATLAS_TILES) as f32 / tiles + inset,
            v: (tile / ATLAS_TILES) as f32 / tiles + inset,
            extent: 1.0 / tiles - 2.0 * inset,
        }
    }
}

/// Represents a single unit quad on the surface of a block.
///
/// The quad spans `base`, `base + e_x`, `base + e_y` and `base + e_x + e_y`; the edge
/// vectors are chosen per side so the front of the quad faces away from the block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corner mapped to the bottom-left of the tile
    pub base: Vec3,
    /// Edge running up the tile
    pub e_y: Vec3,
    /// Edge running across the tile
    pub e_x: Vec3,
    /// Atlas tile drawn on the quad
    pub texture: usize,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates the face on `block_side` of the block whose minimum corner is `origin`.
    pub fn new(origin: Vec3, block_type: BlockType, block_side: BlockSide) -> Self {
        let (base, e_y, e_x) = match block_side {
            BlockSide::FRONT => (
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
            ),
            BlockSide::LEFT => (
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ),
            BlockSide::TOP => (
                Vec3::new(0.0, 1.0, 1.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, 0.0),
            ),
            BlockSide::BACK => (
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
            ),
            BlockSide::BOTTOM => (
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 0.0),
            ),
            BlockSide::RIGHT => (
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
            ),
        };

        Face {
            base: base + origin,
            e_y,
            e_x,
            texture: block_type.texture(block_side),
            block_side,
        }
    }

    /// The six vertices of the quad, as triangles `(a, c, b)` and `(d, b, c)`, both
    /// counter-clockwise when seen from outside the block.
    pub fn vertices(&self) -> [ChunkVertex; VERTICES_PER_FACE] {
        let a = self.base;
        let b = self.base + self.e_y;
        let c = self.base + self.e_x;
        let d = b + self.e_x;

        let uv = TileUv::new(self.texture);
        let (left, right) = (uv.u, uv.u + uv.extent);
        let (top, bottom) = (uv.v, uv.v + uv.extent);
        let shading = self.block_side.shading();

        [
            ChunkVertex::new(a.into(), [left, bottom], shading),
            ChunkVertex::new(c.into(), [right, bottom], shading),
            ChunkVertex::new(b.into(), [left, top], shading),
            ChunkVertex::new(d.into(), [right, top], shading),
            ChunkVertex::new(b.into(), [left, top], shading),
            ChunkVertex::new(c.into(), [right, bottom], shading),
        ]
    }
}
