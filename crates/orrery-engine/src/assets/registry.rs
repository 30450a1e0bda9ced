use std::collections::HashMap;

use serde::Serialize;

use crate::api::types::ResourceId;
use crate::assets::manifest::{AssetManifest, TextureSource};
use crate::error::EngineError;

/// Load state of one external resource, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetState {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Texture,
    CubeMap,
    Mesh,
}

/// One entry as listed to the host: what to fetch and which id to report back.
#[derive(Debug, Clone, Serialize)]
pub struct AssetEntry {
    pub id: ResourceId,
    pub name: String,
    pub kind: AssetKind,
    pub paths: Vec<String>,
    pub state: AssetState,
}

/// Readiness handles for every asset in a manifest.
///
/// Ids follow manifest order: textures first, then meshes. The frame code
/// polls `is_ready` instead of assuming loads finished before the first frame.
#[derive(Default)]
pub struct AssetRegistry {
    entries: Vec<AssetEntry>,
    by_name: HashMap<String, ResourceId>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest. Every entry starts pending.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut registry = Self::new();
        for tex in &manifest.textures {
            let (kind, paths) = match &tex.source {
                TextureSource::Image { path } => (AssetKind::Texture, vec![path.clone()]),
                TextureSource::CubeMap { faces } => (AssetKind::CubeMap, faces.to_vec()),
            };
            registry.insert(&tex.name, kind, paths);
        }
        for mesh in &manifest.meshes {
            registry.insert(&mesh.name, AssetKind::Mesh, vec![mesh.path.clone()]);
        }
        registry
    }

    fn insert(&mut self, name: &str, kind: AssetKind, paths: Vec<String>) {
        if self.by_name.contains_key(name) {
            log::warn!("asset `{name}` listed twice; keeping the first entry");
            return;
        }
        let id = ResourceId(self.entries.len() as u32);
        self.by_name.insert(name.to_string(), id);
        self.entries.push(AssetEntry {
            id,
            name: name.to_string(),
            kind,
            paths,
            state: AssetState::Pending,
        });
    }

    /// Look up an asset id by name.
    pub fn lookup(&self, name: &str) -> Result<ResourceId, EngineError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownAsset(name.to_string()))
    }

    pub fn state(&self, id: ResourceId) -> Option<AssetState> {
        self.entries.get(id.0 as usize).map(|e| e.state)
    }

    /// Unknown ids count as not ready.
    pub fn is_ready(&self, id: ResourceId) -> bool {
        self.state(id) == Some(AssetState::Ready)
    }

    pub fn mark_ready(&mut self, id: ResourceId) -> Result<(), EngineError> {
        let entry = self.entry_mut(id)?;
        entry.state = AssetState::Ready;
        log::debug!("asset `{}` ready", entry.name);
        Ok(())
    }

    /// Record a failed load. Draws using it stay deferred for the session.
    pub fn mark_failed(&mut self, id: ResourceId) -> Result<(), EngineError> {
        let entry = self.entry_mut(id)?;
        if entry.state != AssetState::Failed {
            log::warn!("asset `{}` failed to load ({:?})", entry.name, entry.paths);
        }
        entry.state = AssetState::Failed;
        Ok(())
    }

    fn entry_mut(&mut self, id: ResourceId) -> Result<&mut AssetEntry, EngineError> {
        self.entries
            .get_mut(id.0 as usize)
            .ok_or(EngineError::UnknownResource(id))
    }

    /// Assets the host has not reported on yet.
    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|e| e.state == AssetState::Pending).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON listing handed to the host so it knows what to fetch.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> AssetManifest {
        AssetManifest::from_json(
            r#"{
                "textures": [
                    { "name": "earth_day", "kind": "image", "path": "earth.jpg" },
                    { "name": "sky", "kind": "cube_map",
                      "faces": ["m.png", "s.png", "s.png", "s.png", "s.png", "s.png"] }
                ],
                "meshes": [ { "name": "rock", "path": "rock.obj" } ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn ids_follow_manifest_order() {
        let reg = AssetRegistry::from_manifest(&manifest());
        assert_eq!(reg.lookup("earth_day").unwrap(), ResourceId(0));
        assert_eq!(reg.lookup("sky").unwrap(), ResourceId(1));
        assert_eq!(reg.lookup("rock").unwrap(), ResourceId(2));
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.pending_count(), 3);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let reg = AssetRegistry::from_manifest(&manifest());
        assert!(matches!(reg.lookup("pluto"), Err(EngineError::UnknownAsset(n)) if n == "pluto"));
    }

    #[test]
    fn readiness_transitions() {
        let mut reg = AssetRegistry::from_manifest(&manifest());
        let rock = reg.lookup("rock").unwrap();
        assert!(!reg.is_ready(rock));
        reg.mark_ready(rock).unwrap();
        assert!(reg.is_ready(rock));

        let sky = reg.lookup("sky").unwrap();
        reg.mark_failed(sky).unwrap();
        assert_eq!(reg.state(sky), Some(AssetState::Failed));
        assert!(!reg.is_ready(sky));
        assert_eq!(reg.pending_count(), 1);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut reg = AssetRegistry::new();
        assert!(matches!(reg.mark_ready(ResourceId(5)), Err(EngineError::UnknownResource(_))));
        assert!(!reg.is_ready(ResourceId(5)));
    }

    #[test]
    fn listing_carries_cube_faces() {
        let reg = AssetRegistry::from_manifest(&manifest());
        let json = reg.to_json();
        assert!(json.contains(r#""kind":"cube_map""#), "{json}");
        assert!(json.contains(r#""id":1"#), "{json}");
        assert!(json.contains("m.png"));
    }
}
