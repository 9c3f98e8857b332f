//! 3D accumulation buffers - the output of projection
//!
//! Visualizers append projected primitives here during a frame, then
//! finalize the buffer into a [`RenderMesh`](crate::RenderMesh).

use std::collections::HashMap;

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

use crate::Profile;

/// Primitive kind of an output mesh
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    Points,
    Lines,
    #[default]
    Triangles,
}

impl Topology {
    /// Indices per primitive
    #[inline]
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            Topology::Points => 1,
            Topology::Lines => 2,
            Topology::Triangles => 3,
        }
    }
}

bitflags! {
    /// Attribute channels to carry into a finalized mesh
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct AttributeMask: u8 {
        const COLOR = 1 << 0;
        const UV = 1 << 1;
        const NORMAL = 1 << 2;
    }
}

/// Projected vertices, attribute channels and topology
///
/// All channel vectors are parallel to `positions`.
#[derive(Clone, Debug, Default)]
pub struct SimplexBuffer3D {
    pub topology: Topology,
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub uvs: Vec<[f32; 2]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    /// Exact-position lookup used only when merging vertices
    merge_table: HashMap<[u32; 3], u32>,
}

impl SimplexBuffer3D {
    /// Create an empty buffer for the given topology
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    /// Remove all data and switch topology
    pub fn reset(&mut self, topology: Topology) {
        self.topology = topology;
        self.positions.clear();
        self.colors.clear();
        self.uvs.clear();
        self.normals.clear();
        self.indices.clear();
        self.merge_table.clear();
    }

    /// Append a vertex with its shading attributes and return its index
    pub fn add_vertex(&mut self, position: [f32; 3], profile: &Profile) -> u32 {
        self.positions.push(position);
        self.colors.push(profile.color);
        self.uvs.push(profile.uv);
        self.normals.push(profile.normal);
        (self.positions.len() - 1) as u32
    }

    /// Append a vertex unless one already exists at exactly this position
    ///
    /// The first vertex written at a position keeps its attributes.
    pub fn add_merged_vertex(&mut self, position: [f32; 3], profile: &Profile) -> u32 {
        let key = position_key(position);
        if let Some(&index) = self.merge_table.get(&key) {
            return index;
        }
        let index = self.add_vertex(position, profile);
        self.merge_table.insert(key, index);
        index
    }

    /// Append a point primitive
    pub fn add_point(&mut self, a: u32) {
        self.indices.push(a);
    }

    /// Append a line primitive
    pub fn add_line(&mut self, a: u32, b: u32) {
        self.indices.extend_from_slice(&[a, b]);
    }

    /// Append a triangle primitive
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of primitives
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.indices.len() / self.topology.vertices_per_primitive()
    }

    /// Check whether no primitives were written
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Bit pattern of a position, with -0.0 folded onto 0.0
fn position_key(p: [f32; 3]) -> [u32; 3] {
    let bits = |v: f32| if v == 0.0 { 0 } else { v.to_bits() };
    [bits(p[0]), bits(p[1]), bits(p[2])]
}
