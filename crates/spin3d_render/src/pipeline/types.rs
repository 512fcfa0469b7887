//! GPU-compatible data types for the scene pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A colored vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the scene pipeline
/// Layout: 192 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// World transform, replaced every tick (64 bytes)
    pub world: [[f32; 4]; 4],
    /// View matrix (64 bytes)
    pub view: [[f32; 4]; 4],
    /// Projection matrix (64 bytes)
    pub proj: [[f32; 4]; 4],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        let identity = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        Self {
            world: identity,
            view: identity,
            proj: identity,
        }
    }
}
