//! Mesh generation for voxel rendering.
//!
//! Blocks are meshed face by face: every visible face becomes one textured, shaded
//! quad, written as two triangles. Adjacent coplanar faces are not merged.
//!
//! # Architecture
//! - [`Face`]: one unit quad on a block, with its atlas UVs and shading
//! - [`MeshBuilder`]: appends faces to an interleaved vertex buffer

mod face;
mod mesh;

pub use face::{Face, TileUv, ATLAS_TILES, EMISSION_ORDER, UV_SHIFT, VERTICES_PER_FACE};
pub use mesh::*;
