use thiserror::Error;

use crate::api::types::ResourceId;

/// Errors surfaced while setting a scene up.
///
/// Nothing in the per-frame path returns these: a frame with missing
/// resources defers the affected draws instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("asset manifest is not valid JSON: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("asset manifest has no entry named `{0}`")]
    UnknownAsset(String),

    #[error("resource id {0:?} is not registered")]
    UnknownResource(ResourceId),

    #[error("{what} capacity exceeded: {requested} > {capacity}")]
    Capacity {
        what: &'static str,
        requested: usize,
        capacity: usize,
    },

    #[error("instance buffer was already filled")]
    InstancesFrozen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message_names_the_buffer() {
        let err = EngineError::Capacity { what: "instance", requested: 20, capacity: 10 };
        assert_eq!(err.to_string(), "instance capacity exceeded: 20 > 10");
    }

    #[test]
    fn manifest_error_wraps_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EngineError = parse.into();
        assert!(matches!(err, EngineError::Manifest(_)));
    }
}
