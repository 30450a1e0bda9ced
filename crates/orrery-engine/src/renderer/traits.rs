//! Renderer trait for native GPU backends.
//!
//! In the browser, the TypeScript host reads draw records straight out of
//! the shared buffer. Native backends (or test doubles) implement this trait
//! and receive the same data as slices.

use super::draw::DrawRecord;
use super::instance::InstanceTransform;

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// Draws in execution order.
    pub draws: &'a [DrawRecord],
    /// Static per-instance transforms for instanced draws.
    pub instances: &'a [InstanceTransform],
    /// Monotonic frame counter.
    pub frame: u64,
}

/// Renderer trait for GPU backends.
pub trait Renderer {
    /// Backend identifier (e.g., "webgpu", "wgpu-native").
    fn backend(&self) -> &'static str;

    /// Execute one frame's draws in order.
    fn draw(&mut self, frame: &FrameData);

    /// Handle window resize.
    fn resize(&mut self, width: u32, height: u32);
}
