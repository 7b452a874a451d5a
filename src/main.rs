//! # Voxel Scene Entry Point
//!
//! Runs the engine headlessly for the configured number of frames.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- config.json
//! ```

fn main() {
    voxel_scene::run();
}
