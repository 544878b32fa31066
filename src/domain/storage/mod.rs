//! Storage abstraction - entities, keys, and the generic storage trait

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;
