//! Rendering pipeline components

pub mod types;
pub mod scene_pipeline;

// Re-export types
pub use types::{SceneUniforms, Vertex};

// Re-export pipeline
pub use scene_pipeline::{ScenePipeline, look_at_matrix, perspective_matrix};
