//! Vertex data structures and layouts for voxel rendering.
//!
//! This module defines the vertex format produced by the chunk mesher and the buffer
//! layout the rasterizer must be configured with to read it.

/// Number of `f32`s in one vertex.
pub const VERTEX_FLOATS: usize = 6;

/// Size of one vertex in bytes.
pub const VERTEX_STRIDE: usize = VERTEX_FLOATS * std::mem::size_of::<f32>();

/// A vertex in the voxel rendering pipeline.
///
/// # Memory Layout
/// - Position: 3x f32 (offset 0)
/// - Texture Coordinates: 2x f32 (offset 12)
/// - Shading: f32 (offset 20)
///
/// Total size: 24 bytes, tightly packed, no index buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChunkVertex {
    /// Position relative to the owning view's placement
    pub position: [f32; 3],
    /// UV coordinates into the texture atlas
    pub tex_coords: [f32; 2],
    /// Brightness multiplier for the face this vertex belongs to
    pub shading: f32,
}

impl ChunkVertex {
    /// Creates a new vertex.
    pub fn new(position: [f32; 3], tex_coords: [f32; 2], shading: f32) -> Self {
        ChunkVertex {
            position,
            tex_coords,
            shading,
        }
    }

    /// Returns the vertex buffer layout description for the shader pipeline.
    ///
    /// # Shader Attributes
    /// - `location = 0`: position (vec3<f32>)
    /// - `location = 1`: tex_coords (vec2<f32>)
    /// - `location = 2`: shading (f32)
    pub fn desc<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: VERTEX_STRIDE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_six_packed_floats() {
        assert_eq!(std::mem::size_of::<ChunkVertex>(), 24);
        assert_eq!(VERTEX_STRIDE, 24);

        let v = ChunkVertex::new([1.0, 2.0, 3.0], [0.25, 0.5], 0.9);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.25, 0.5, 0.9]);
    }

    #[test]
    fn layout_matches_wire_contract() {
        let layout = ChunkVertex::desc();
        assert_eq!(layout.array_stride, 24);
        let offsets: Vec<_> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 20]);
        let formats: Vec<_> = layout.attributes.iter().map(|a| a.format).collect();
        assert_eq!(
            formats,
            vec![
                wgpu::VertexFormat::Float32x3,
                wgpu::VertexFormat::Float32x2,
                wgpu::VertexFormat::Float32,
            ]
        );
    }
}
