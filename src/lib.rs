//! spin3d - rotating-shape rendering demos
//!
//! The binary wires configuration, the frame transform updater from
//! `spin3d_core`, and the wgpu renderer from `spin3d_render` into a winit
//! application.

pub mod config;
pub mod systems;
