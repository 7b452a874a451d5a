#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Scene
//!
//! The core of a first-person voxel viewer: block catalog, chunk storage, face-culled
//! chunk meshing, camera maths and the per-frame game update.
//!
//! ## Key Modules
//!
//! * `math` - Column-major matrices, vectors and colours
//! * `engine_state` - Voxels, meshing, camera and the frame loop
//! * `application_state` - Configuration, input and the headless runner
//!
//! ## Architecture
//!
//! The engine stops at the [`Rasterizer`] trait: it produces interleaved vertex buffers
//! and a camera matrix every frame, and a backend turns them into pixels.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_scene::run();
//! }
//! ```

pub mod application_state;
pub mod engine_state;
pub mod math;

pub use application_state::{
    config::{ConfigError, EngineConfig},
    input_state::InputState,
    run,
};
pub use engine_state::{
    camera_state::{Camera, CameraUniform},
    rendering::{meshing::ChunkView, ChunkVertex, LoggingRasterizer, Rasterizer},
    scene::Scene,
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType, Block},
        chunk::Chunk,
        world::World,
    },
    EngineState,
};
pub use math::{Color, Mat4, Vec3};
