//! In-memory adapter for ExampleEntityRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ExampleEntity, ExampleEntityId};
use crate::domain::ports::{EntityCriterion, ExampleEntityRepository};
use crate::error::DomainError;

/// In-memory implementation of ExampleEntityRepository
///
/// Serves as the running adapter and as the fake for use case tests. Every
/// operation is total: it never returns an error.
#[derive(Default)]
pub struct InMemoryExampleEntityRepository {
    entities: RwLock<HashMap<ExampleEntityId, ExampleEntity>>,
}

impl InMemoryExampleEntityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an entity
    #[allow(dead_code)]
    pub fn with_entity(mut self, entity: ExampleEntity) -> Self {
        self.entities.get_mut().insert(entity.id, entity);
        self
    }

    /// Remove every stored entity. Not part of the port.
    #[allow(dead_code)]
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }

    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }
}

#[async_trait]
impl ExampleEntityRepository for InMemoryExampleEntityRepository {
    async fn save(&self, entity: ExampleEntity) -> Result<ExampleEntity, DomainError> {
        let mut entities = self.entities.write().await;
        entities.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: &ExampleEntityId) -> Result<Option<ExampleEntity>, DomainError> {
        let entities = self.entities.read().await;
        Ok(entities.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ExampleEntity>, DomainError> {
        let entities = self.entities.read().await;
        Ok(entities.values().cloned().collect())
    }

    async fn exists_with(&self, criterion: &EntityCriterion) -> Result<bool, DomainError> {
        let entities = self.entities.read().await;
        Ok(entities.values().any(|e| criterion.matches(e)))
    }

    async fn delete(&self, id: &ExampleEntityId) -> Result<bool, DomainError> {
        let mut entities = self.entities.write().await;
        Ok(entities.remove(id).is_some())
    }
}
