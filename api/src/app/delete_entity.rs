//! Delete entity use case

use std::sync::Arc;

use crate::domain::entities::ExampleEntityId;
use crate::domain::ports::ExampleEntityRepository;
use crate::error::DomainError;

/// Use case for deleting entities
pub struct DeleteEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    entities: Arc<R>,
}

impl<R> DeleteEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    pub fn new(entities: Arc<R>) -> Self {
        Self { entities }
    }

    /// Delete an entity. Returns false if nothing was stored under `id`.
    pub async fn execute(&self, id: &ExampleEntityId) -> Result<bool, DomainError> {
        let deleted = self.entities.delete(id).await?;
        if deleted {
            tracing::debug!(id = %id, "Deleted entity");
        }
        Ok(deleted)
    }
}
