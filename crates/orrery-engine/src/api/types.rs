use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Handle to an externally loaded resource (texture, cubemap or mesh).
/// Ids are assigned in manifest order and are stable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// Wire encoding used in draw records; `-1.0` marks an empty slot.
    pub fn encode(slot: Option<ResourceId>) -> f32 {
        slot.map(|id| id.0 as f32).unwrap_or(-1.0)
    }
}

/// A game event communicated from Rust to TypeScript via SharedArrayBuffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}
