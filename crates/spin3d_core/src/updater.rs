//! Frame transform updater
//!
//! The updater owns the single current world transform. Every tick it
//! recomputes the transform from scratch for the given elapsed time and
//! hands it to the render sink; the old value is discarded wholesale, so a
//! partially-applied update can never leak into a frame. Callers read the
//! transform through [`FrameUpdater::current`], never through a copy taken
//! at setup time.
//!
//! Scheduling stays with the host: the updater reports whether another tick
//! should be requested, and a cancelled updater reports `false` and stops
//! invoking the sink immediately.

use crate::Spin;
use spin3d_math::Mat4;

/// Capability handed to the updater by the graphics collaborator
///
/// One operation: take the world transform for this frame and draw with it.
/// Implemented for closures, so an ad-hoc sink is just `&mut |world| ...`.
pub trait RenderSink {
    /// Draw one frame with the given world transform
    fn submit(&mut self, world: Mat4);
}

impl<F: FnMut(Mat4)> RenderSink for F {
    fn submit(&mut self, world: Mat4) {
        self(world)
    }
}

/// Drives the per-frame transform update
pub struct FrameUpdater {
    spin: Spin,
    current: Mat4,
    running: bool,
}

impl FrameUpdater {
    /// Create an updater; the initial transform is the spin at `t = 0`
    /// (pure translation)
    pub fn new(spin: Spin) -> Self {
        Self {
            spin,
            current: spin.transform_at(0.0),
            running: true,
        }
    }

    /// The spin configuration driving this updater
    #[inline]
    pub fn spin(&self) -> &Spin {
        &self.spin
    }

    /// The current world transform (the value of the most recent tick)
    #[inline]
    pub fn current(&self) -> Mat4 {
        self.current
    }

    /// Whether ticks are still being produced
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop. Takes effect immediately: no sink invocation happens
    /// after this call until [`resume`](Self::resume).
    pub fn cancel(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("frame updater cancelled");
        }
    }

    /// Restart the loop after a [`cancel`](Self::cancel)
    pub fn resume(&mut self) {
        if !self.running {
            self.running = true;
            log::debug!("frame updater resumed");
        }
    }

    /// Recompute the current transform for the given elapsed time.
    ///
    /// Returns the new transform, or `None` if the updater is cancelled.
    /// The current transform is fully replaced, never patched in place.
    pub fn advance(&mut self, elapsed_secs: f32) -> Option<Mat4> {
        if !self.running {
            return None;
        }
        self.current = self.spin.transform_at(elapsed_secs);
        Some(self.current)
    }

    /// Run one tick: recompute the transform and submit it to the sink.
    ///
    /// Returns whether the host should schedule another tick. A cancelled
    /// updater returns `false` without touching the sink.
    pub fn tick(&mut self, elapsed_secs: f32, sink: &mut dyn RenderSink) -> bool {
        match self.advance(elapsed_secs) {
            Some(world) => {
                sink.submit(world);
                true
            }
            None => false,
        }
    }
}
