//! Demo geometry
//!
//! Mesh builders for the shapes the demos draw. Vertex positions and colors
//! are always explicit parameters (or documented defaults) of the builder;
//! there is no shared mutable vertex data.

mod cube;
mod flat;

pub use cube::CUBE_FACE_COLORS;
pub use flat::{TRIANGLE_COLORS, flip_channels};

use crate::pipeline::Vertex;

/// An indexed triangle mesh with per-vertex colors
#[derive(Clone, Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
