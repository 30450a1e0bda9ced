use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Asset manifest describing every texture and mesh a scene loads.
/// Bundled with the game as JSON; the host fetches and decodes the files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
    #[serde(default)]
    pub meshes: Vec<MeshDescriptor>,
}

/// A named texture and where its image data lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Name game code looks the texture up by (e.g., "earth_day").
    pub name: String,
    #[serde(flatten)]
    pub source: TextureSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextureSource {
    /// A single 2D image.
    Image { path: String },
    /// Six faces in +X, -X, +Y, -Y, +Z, -Z order.
    CubeMap { faces: [String; 6] },
}

/// A mesh file (Wavefront OBJ) loaded by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshDescriptor {
    pub name: String,
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
