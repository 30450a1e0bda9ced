use orrery_engine::bridge::protocol::HEADER_FLOATS;
use orrery_engine::{
    EngineContext, FrameCounts, FrameData, Game, InputEvent, InputQueue, ProtocolLayout,
    Renderer, ResourceId,
};

/// Generic scene runner that wires up the frame loop.
///
/// Each concrete scene (e.g., `solar-system`) creates a `thread_local!`
/// GameRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame: u64,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    /// `seed` feeds the context's Rng; the wasm exports pass host entropy.
    pub fn new(game: G, seed: u64) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::new(&config, seed);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            layout,
            header: [0.0; HEADER_FLOATS],
            frame: 0,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    ///
    /// A failed init is logged and leaves the runner idle: ticks become
    /// no-ops instead of drawing a half-built scene.
    pub fn init(&mut self) {
        match self.game.init(&mut self.ctx) {
            Ok(()) => {
                self.initialized = true;
                self.write_header();
            }
            Err(err) => log::error!("init failed: {err}"),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: advance the clock, let the scene react to input and
    /// submit its draws, then publish the header.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.ctx.clock.advance(dt);
        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.frame += 1;
        self.write_header();
    }

    fn write_header(&mut self) {
        let counts = FrameCounts {
            frame: self.frame,
            draws: self.ctx.draws.draw_count(),
            deferred: self.ctx.draws.deferred_count(),
            events: self.ctx.events.len() as u32,
            instances: self.ctx.instances.instance_count(),
            sim_time: self.ctx.clock.elapsed(),
            paused: self.ctx.clock.is_paused(),
            pending_assets: self.ctx.assets.pending_count() as u32,
        };
        self.layout.write_header(&mut self.header, &counts);
    }

    /// Hand the current frame to a native renderer.
    pub fn present<R: Renderer>(&self, renderer: &mut R) {
        let frame = FrameData {
            draws: self.ctx.draws.records(),
            instances: self.ctx.instances.as_slice(),
            frame: self.frame,
        };
        renderer.draw(&frame);
    }

    /// Viewport size changed; the projection follows on the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.camera.resize(width, height);
    }

    // ---- Asset readiness, reported by the host ----

    pub fn asset_loaded(&mut self, id: u32) {
        if let Err(err) = self.ctx.assets.mark_ready(ResourceId(id)) {
            log::warn!("asset_loaded: {err}");
        }
    }

    pub fn asset_failed(&mut self, id: u32) {
        if let Err(err) = self.ctx.assets.mark_failed(ResourceId(id)) {
            log::warn!("asset_failed: {err}");
        }
    }

    /// Registered assets as JSON, for the host to fetch.
    pub fn manifest_json(&self) -> String {
        self.ctx.assets.to_json()
    }

    pub fn shader_source(&self, program: u32) -> Option<&'static str> {
        self.game.shader_source(program)
    }

    pub fn help_text(&self) -> &'static str {
        self.game.help_text()
    }

    pub fn controls_json(&self) -> String {
        self.game.controls_json()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn draws_ptr(&self) -> *const f32 {
        self.ctx.draws.records_ptr()
    }

    pub fn draw_count(&self) -> u32 {
        self.ctx.draws.draw_count()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.ctx.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.ctx.instances.instance_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    /// Never more than the event section holds.
    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_draws(&self) -> u32 {
        self.layout.max_draws as u32
    }

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
