//! # Voxel Engine Core
//!
//! This module contains the voxel data model: what a block is, how blocks are stored
//! in chunks, and how chunks make up a world.
//!
//! ## Architecture
//!
//! * **Block**: The closed catalog of block types and their atlas tiles per side
//! * **Chunk**: A dense 16×16×16 grid of blocks that caches its own mesh
//! * **World**: A grid of chunks addressed by chunk coordinate
//!
//! ## Data Flow
//!
//! 1. World receives requests for block access or modification
//! 2. World delegates to the owning chunk, which marks its mesh stale
//! 3. The next frame rebuilds stale meshes and reuses the rest

pub mod block;
pub mod chunk;
pub mod world;
