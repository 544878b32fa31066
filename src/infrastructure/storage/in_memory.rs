//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// The default backend. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<HashMap<String, E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }

    /// Creates storage pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        let storage = Self::new();
        {
            let mut map = storage.entities.write().unwrap();

            for entity in entities {
                map.insert(entity.key().as_str().to_string(), entity);
            }
        }
        storage
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.get(key.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let entities = self
            .entities
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entities.values().cloned().collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if entities.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Entity with key '{}' already exists",
                key
            )));
        }

        entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut entities = self
            .entities
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(entities.remove(key.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::workflow::{StepKind, Workflow, WorkflowId, WorkflowStep};

    fn workflow(id: &str) -> Workflow {
        Workflow::new(
            WorkflowId::new(id).unwrap(),
            "Test",
            vec![
                WorkflowStep::new(StepKind::CleanText),
                WorkflowStep::new(StepKind::Summarize),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage = InMemoryStorage::new();
        let entity = workflow("wf-1");

        storage.create(entity.clone()).await.unwrap();

        let fetched = storage.get(entity.key()).await.unwrap();
        assert_eq!(fetched.unwrap().id(), entity.id());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let storage: InMemoryStorage<Workflow> = InMemoryStorage::new();
        let key = WorkflowId::new("nope").unwrap();

        assert!(storage.get(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_create_conflicts() {
        let storage = InMemoryStorage::new();
        storage.create(workflow("wf-1")).await.unwrap();

        let result = storage.create(workflow("wf-1")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_with_entities_and_list() {
        let storage = InMemoryStorage::with_entities(vec![workflow("a"), workflow("b")]);

        assert_eq!(storage.list().await.unwrap().len(), 2);
        assert_eq!(storage.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let storage = InMemoryStorage::new();
        let entity = workflow("wf-1");
        storage.create(entity.clone()).await.unwrap();

        assert!(storage.delete(entity.key()).await.unwrap());
        assert!(!storage.delete(entity.key()).await.unwrap());
    }
}
