//! Finalized meshes handed to the rendering backend
//!
//! These types are laid out for direct upload. All types derive Pod and
//! Zeroable for safe byte casting.

use bytemuck::{Pod, Zeroable};

use crate::{AttributeMask, SimplexBuffer3D, Topology};

/// An interleaved output vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
    /// Texture coordinate
    pub uv: [f32; 2],
}

impl Default for MeshVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, 0.0, 1.0],
            color: [1.0; 4],
            uv: [0.0; 2],
        }
    }
}

/// A renderable mesh: interleaved vertices, indices and a topology tag
///
/// Channels missing from `attributes` hold [`MeshVertex::default`] values.
#[derive(Clone, Debug, Default)]
pub struct RenderMesh {
    pub topology: Topology,
    pub attributes: AttributeMask,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a finalized copy of `buffer`
    pub fn fill_from(&mut self, buffer: &SimplexBuffer3D, attributes: AttributeMask) {
        let defaults = MeshVertex::default();
        self.topology = buffer.topology;
        self.attributes = attributes;
        self.vertices.clear();
        self.vertices.reserve(buffer.vertex_count());
        for (i, position) in buffer.positions.iter().enumerate() {
            self.vertices.push(MeshVertex {
                position: *position,
                normal: if attributes.contains(AttributeMask::NORMAL) {
                    buffer.normals[i]
                } else {
                    defaults.normal
                },
                color: if attributes.contains(AttributeMask::COLOR) {
                    buffer.colors[i]
                } else {
                    defaults.color
                },
                uv: if attributes.contains(AttributeMask::UV) {
                    buffer.uvs[i]
                } else {
                    defaults.uv
                },
            });
        }
        self.indices.clear();
        self.indices.extend_from_slice(&buffer.indices);
    }

    /// Remove all vertices and indices
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Get the number of primitives
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.vertices_per_primitive()
    }

    /// Vertex data as raw bytes, ready for a vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes, ready for an index buffer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
