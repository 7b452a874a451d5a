//! Rendering system for the voxel engine.
//!
//! This module produces everything a rasterizer needs to draw the world: chunk meshes
//! in the [`ChunkVertex`] format and the camera uniform. Drawing itself happens behind
//! the [`Rasterizer`] trait, so the backend stays outside the engine.

use log::{debug, trace};

use super::scene::Scene;
use crate::math::Color;

pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use vertex::{ChunkVertex, VERTEX_FLOATS, VERTEX_STRIDE};

/// Sky colour the frame is cleared to.
pub const CLEAR_COLOR: Color = Color::new(0.53, 0.81, 0.92);

/// A backend that draws a finished scene.
///
/// Called once per frame, after the scene has been assembled. The scene's buffers are
/// read-only for the rest of the frame.
pub trait Rasterizer {
    /// Submits every chunk in `scene` for drawing.
    fn draw(&mut self, scene: &Scene);
}

/// Totals for one submitted frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Chunks with at least one vertex
    pub chunks_drawn: usize,
    /// Chunks skipped because their mesh was empty
    pub chunks_skipped: usize,
    /// Vertices across all drawn chunks
    pub vertices: usize,
    /// Bytes of vertex data referenced by the frame
    pub bytes: usize,
}

/// A rasterizer that draws nothing and logs what it was given.
///
/// Used by the headless runner and by tests to observe the draw stage.
#[derive(Debug, Default)]
pub struct LoggingRasterizer {
    /// Frames submitted so far
    pub frames: usize,
    /// Stats for the most recent frame
    pub last_frame: FrameStats,
    /// Vertices submitted over every frame
    pub total_vertices: usize,
}

impl Rasterizer for LoggingRasterizer {
    fn draw(&mut self, scene: &Scene) {
        let mut stats = FrameStats::default();
        for view in &scene.chunks {
            if view.is_empty() {
                stats.chunks_skipped += 1;
                continue;
            }
            stats.chunks_drawn += 1;
            stats.vertices += view.vertex_count;
            stats.bytes += view.as_bytes().len();
        }

        let clear: wgpu::Color = CLEAR_COLOR.into();
        trace!(
            "Frame {}: clear {:?}, view-projection {:?}",
            self.frames,
            clear,
            scene.uniform.view_proj
        );
        debug!(
            "Frame {}: {} chunks drawn, {} skipped, {} vertices ({} bytes)",
            self.frames, stats.chunks_drawn, stats.chunks_skipped, stats.vertices, stats.bytes
        );

        self.frames += 1;
        self.total_vertices += stats.vertices;
        self.last_frame = stats;
    }
}
