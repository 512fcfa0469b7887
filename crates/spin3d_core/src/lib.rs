//! Core types for the spin3d demos
//!
//! This crate provides the frame-update pipeline that turns elapsed time
//! into a per-frame world transform:
//!
//! - [`Spin`] - rotation axis, period, and translation for the animation
//! - [`AnimationClock`] - monotonic elapsed-time source
//! - [`FrameUpdater`] - owns the current transform and drives ticks
//! - [`RenderSink`] - capability the graphics collaborator exposes to the
//!   updater ("submit transform and draw")

mod spin;
mod clock;
mod updater;

pub use spin::{Spin, SpinError};
pub use clock::AnimationClock;
pub use updater::{FrameUpdater, RenderSink};

// Re-export commonly used types from spin3d_math for convenience
pub use spin3d_math::{Mat4, Vec3};
