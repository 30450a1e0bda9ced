use glam::Vec3;

use crate::api::types::GameEvent;
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::AssetRegistry;
use crate::core::rng::Rng;
use crate::core::time::SimClock;
use crate::error::EngineError;
use crate::input::queue::InputQueue;
use crate::renderer::camera::SceneCamera;
use crate::renderer::draw::DrawList;
use crate::renderer::instance::InstanceBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum draws per frame (default: 32).
    pub max_draws: usize,
    /// Maximum static instance transforms (default: 0, no instancing).
    pub max_instances: usize,
    /// Maximum game events per frame (default: 32).
    pub max_events: usize,
    /// Vertical field of view in degrees (default: 50).
    pub fov_y_degrees: f32,
    /// Center of the bounding sphere of the scene.
    pub scene_center: Vec3,
    /// Radius of the bounding sphere; drives the clip planes.
    pub scene_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_draws: 32,
            max_instances: 0,
            max_events: 32,
            fov_y_degrees: 50.0,
            scene_center: Vec3::ZERO,
            scene_radius: 10.0,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Register assets, fill instance buffers, place the camera.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), EngineError>;

    /// One frame: react to input, then submit this frame's draws.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Shader source for a program id, compiled by the host.
    fn shader_source(&self, _program: u32) -> Option<&'static str> {
        None
    }

    /// Human-readable help (key bindings) for the host UI.
    fn help_text(&self) -> &'static str {
        ""
    }

    /// JSON description of the host UI controls the scene reacts to.
    fn controls_json(&self) -> String {
        "{}".to_string()
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub camera: SceneCamera,
    pub clock: SimClock,
    pub assets: AssetRegistry,
    pub draws: DrawList,
    pub instances: InstanceBuffer,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
}

impl EngineContext {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            camera: SceneCamera::new(config.fov_y_degrees, config.scene_center, config.scene_radius),
            clock: SimClock::new(),
            assets: AssetRegistry::new(),
            draws: DrawList::with_capacity(config.max_draws),
            instances: InstanceBuffer::with_capacity(config.max_instances),
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(seed),
        }
    }

    /// Parse a manifest and replace the asset registry with it.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), EngineError> {
        let manifest = AssetManifest::from_json(json)?;
        self.assets = AssetRegistry::from_manifest(&manifest);
        log::info!("manifest: {} assets registered", self.assets.len());
        Ok(())
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (draws, events).
    pub fn clear_frame_data(&mut self) {
        self.draws.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default(), 42)
    }
}
