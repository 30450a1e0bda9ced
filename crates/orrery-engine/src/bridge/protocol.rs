/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Draws: max_draws × 88 floats]
/// [Events: max_events × 4 floats]
/// [Instances: max_instances × 16 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.
/// The instance section is written once; the host uploads it a single time.

use crate::api::game::GameConfig;
use crate::renderer::draw::DrawRecord;
use crate::renderer::instance::InstanceTransform;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_DRAWS: usize = 3;
pub const HEADER_DRAW_COUNT: usize = 4;
pub const HEADER_DEFERRED_COUNT: usize = 5;
pub const HEADER_MAX_EVENTS: usize = 6;
pub const HEADER_EVENT_COUNT: usize = 7;
pub const HEADER_MAX_INSTANCES: usize = 8;
pub const HEADER_INSTANCE_COUNT: usize = 9;
pub const HEADER_SIM_TIME: usize = 10;
pub const HEADER_PAUSED: usize = 11;
pub const HEADER_PENDING_ASSETS: usize = 12;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per draw record. Fixed wire format.
pub const DRAW_FLOATS: usize = DrawRecord::FLOATS;

/// Floats per game event: kind, a, b, c. Fixed wire format.
pub const EVENT_FLOATS: usize = 4;

/// Floats per instance transform. Fixed wire format.
pub const INSTANCE_FLOATS: usize = InstanceTransform::FLOATS;

/// Per-frame values written into the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCounts {
    pub frame: u64,
    pub draws: u32,
    pub deferred: u32,
    pub events: u32,
    pub instances: u32,
    pub sim_time: f64,
    pub paused: bool,
    /// Assets still waiting for a loaded/failed report.
    pub pending_assets: u32,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_draws: usize,
    pub max_events: usize,
    pub max_instances: usize,

    /// Size of draw data section in floats.
    pub draw_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,

    /// Offset (in floats) where draw data begins.
    pub draw_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_draws: usize, max_events: usize, max_instances: usize) -> Self {
        let draw_data_floats = max_draws * DRAW_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let instance_data_floats = max_instances * INSTANCE_FLOATS;

        let draw_data_offset = HEADER_FLOATS;
        let event_data_offset = draw_data_offset + draw_data_floats;
        let instance_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = instance_data_offset + instance_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_draws,
            max_events,
            max_instances,
            draw_data_floats,
            event_data_floats,
            instance_data_floats,
            draw_data_offset,
            event_data_offset,
            instance_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_draws, config.max_events, config.max_instances)
    }

    /// Fill the header for the current frame.
    pub fn write_header(&self, header: &mut [f32; HEADER_FLOATS], counts: &FrameCounts) {
        header[HEADER_FRAME_COUNTER] = counts.frame as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_MAX_DRAWS] = self.max_draws as f32;
        header[HEADER_DRAW_COUNT] = counts.draws as f32;
        header[HEADER_DEFERRED_COUNT] = counts.deferred as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = counts.events.min(self.max_events as u32) as f32;
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = counts.instances as f32;
        header[HEADER_SIM_TIME] = counts.sim_time as f32;
        header[HEADER_PAUSED] = if counts.paused { 1.0 } else { 0.0 };
        header[HEADER_PENDING_ASSETS] = counts.pending_assets as f32;
    }
}
