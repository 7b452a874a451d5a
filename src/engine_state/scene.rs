//! # Scene Module
//!
//! A scene is everything the rasterizer needs for one frame: the camera, its packed
//! uniform, and the mesh of every chunk to draw.

use std::rc::Rc;

use super::camera_state::{Camera, CameraUniform};
use super::rendering::meshing::ChunkView;

/// Represents a scene, containing information about the things we want to draw.
#[derive(Debug, Clone)]
pub struct Scene {
    /// The camera viewing the scene
    pub camera: Camera,
    /// The camera's view-projection matrix, packed for upload
    pub uniform: CameraUniform,
    /// Chunk meshes, shared with the chunks that cached them
    pub chunks: Vec<Rc<ChunkView>>,
}

impl Scene {
    /// Assembles a scene, packing the camera for the given aspect ratio.
    pub fn new(camera: Camera, aspect_ratio: f32, chunks: Vec<Rc<ChunkView>>) -> Self {
        Scene {
            uniform: CameraUniform::from_camera(&camera, aspect_ratio),
            camera,
            chunks,
        }
    }

    /// Total vertices across all chunks.
    pub fn vertex_count(&self) -> usize {
        self.chunks.iter().map(|view| view.vertex_count).sum()
    }
}
