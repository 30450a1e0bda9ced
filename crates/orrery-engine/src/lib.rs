pub mod api;
pub mod core;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{GameEvent, ResourceId};
pub use core::rng::Rng;
pub use core::time::SimClock;
pub use renderer::camera::SceneCamera;
pub use renderer::draw::{DrawCall, DrawList, DrawRecord, Geometry, Submission, MAX_TEXTURE_UNITS};
pub use renderer::instance::{InstanceBuffer, InstanceTransform};
pub use renderer::{FrameData, Renderer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{AssetRegistry, AssetState};
pub use bridge::protocol::{FrameCounts, ProtocolLayout};
pub use error::EngineError;
