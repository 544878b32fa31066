//! Entity and key traits for the storage layer

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// A key that identifies one stored entity.
///
/// Backends index by string, so every key must expose a stable string
/// form (`WorkflowId` is the validated id, `RunId` the generated uuid).
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + std::hash::Hash {
    fn as_str(&self) -> &str;
}

/// Anything the storage layer can persist.
///
/// Entities are serialized whole (the postgres backend keeps them as
/// JSONB documents), so they must round-trip through serde.
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    type Key: StorageKey;

    fn key(&self) -> &Self::Key;
}
