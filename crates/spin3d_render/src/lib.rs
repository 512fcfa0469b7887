//! Rendering library for the spin3d demos
//!
//! This crate provides the wgpu-based rendering path shared by the demos.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ScenePipeline`] - world/view/projection pipeline for
//!   colored indexed meshes
//! - [`geometry::Mesh`] - demo geometry (cube, triangle, square, hexagon)
//!   built from explicit vertex/color parameters

pub mod context;
pub mod geometry;
pub mod pipeline;

// Re-export core types for convenience
pub use spin3d_core::{AnimationClock, FrameUpdater, RenderSink, Spin, SpinError};
pub use spin3d_core::{Mat4, Vec3};

// Re-export the mesh type and palettes for easy access
pub use geometry::{Mesh, CUBE_FACE_COLORS, TRIANGLE_COLORS};
