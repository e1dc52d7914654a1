//! Read-only entity use cases

use std::sync::Arc;

use crate::app::create_entity::EntityOutput;
use crate::domain::entities::ExampleEntityId;
use crate::domain::ports::ExampleEntityRepository;
use crate::error::DomainError;

/// Use case for looking up a single entity
pub struct GetEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    entities: Arc<R>,
}

impl<R> GetEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    pub fn new(entities: Arc<R>) -> Self {
        Self { entities }
    }

    pub async fn execute(&self, id: &ExampleEntityId) -> Result<Option<EntityOutput>, DomainError> {
        let entity = self.entities.find_by_id(id).await?;
        Ok(entity.as_ref().map(EntityOutput::from))
    }
}

/// Use case for listing every entity
pub struct ListEntitiesUseCase<R>
where
    R: ExampleEntityRepository,
{
    entities: Arc<R>,
}

impl<R> ListEntitiesUseCase<R>
where
    R: ExampleEntityRepository,
{
    pub fn new(entities: Arc<R>) -> Self {
        Self { entities }
    }

    /// All entities, oldest first (ties broken by id)
    pub async fn execute(&self) -> Result<Vec<EntityOutput>, DomainError> {
        let mut entities = self.entities.find_all().await?;
        entities.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(entities.iter().map(EntityOutput::from).collect())
    }
}
