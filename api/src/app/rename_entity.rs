//! Rename entity use case

use std::sync::Arc;

use crate::app::create_entity::EntityOutput;
use crate::app::validation::validate_name;
use crate::domain::entities::ExampleEntityId;
use crate::domain::ports::{EntityCriterion, ExampleEntityRepository};
use crate::error::DomainError;

/// Data needed to rename an entity
#[derive(Debug, Clone)]
pub struct RenameEntityInput {
    pub id: ExampleEntityId,
    pub name: String,
}

/// Use case for renaming entities
pub struct RenameEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    entities: Arc<R>,
}

impl<R> RenameEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    pub fn new(entities: Arc<R>) -> Self {
        Self { entities }
    }

    /// Rename an entity, keeping its id
    ///
    /// Returns `None` when no entity has the given id. Renaming to the
    /// current name is a no-op without a write.
    pub async fn execute(
        &self,
        input: RenameEntityInput,
    ) -> Result<Option<EntityOutput>, DomainError> {
        let name = validate_name(&input.name)?;

        let Some(current) = self.entities.find_by_id(&input.id).await? else {
            return Ok(None);
        };

        if current.name == name {
            return Ok(Some(EntityOutput::from(&current)));
        }

        // names are unique, so any match here belongs to another entity
        if self
            .entities
            .exists_with(&EntityCriterion::NameEquals(name.clone()))
            .await?
        {
            tracing::warn!(id = %input.id, name = %name, "Rejected rename: name already in use");
            return Err(DomainError::Conflict(format!(
                "Entity with name '{}' already exists",
                name
            )));
        }

        let saved = self.entities.save(current.with_name(name)).await?;
        tracing::debug!(id = %saved.id, name = %saved.name, "Renamed entity");

        Ok(Some(EntityOutput::from(&saved)))
    }
}
