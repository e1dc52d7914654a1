//! Create entity use case
//!
//! Validates input, enforces name and email uniqueness through the
//! repository port, then persists a new entity.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::validation::{validate_email, validate_name};
use crate::domain::entities::{ExampleEntity, ExampleEntityId};
use crate::domain::ports::{EntityCriterion, ExampleEntityRepository};
use crate::error::DomainError;

/// Data needed to create a new entity
#[derive(Debug, Clone)]
pub struct CreateEntityInput {
    pub name: String,
    pub email: Option<String>,
    pub description: Option<String>,
}

/// Entity as returned by the use cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityOutput {
    pub id: ExampleEntityId,
    pub name: String,
    pub email: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&ExampleEntity> for EntityOutput {
    fn from(entity: &ExampleEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name.clone(),
            email: entity.email.clone(),
            description: entity.description.clone(),
            created_at: entity.created_at,
        }
    }
}

/// Use case for creating entities
pub struct CreateEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    entities: Arc<R>,
}

impl<R> CreateEntityUseCase<R>
where
    R: ExampleEntityRepository,
{
    pub fn new(entities: Arc<R>) -> Self {
        Self { entities }
    }

    /// Create and persist a new entity
    ///
    /// Fails with `Validation` before touching the repository, or with
    /// `Conflict` when the name or email is already taken. On success exactly
    /// one `save` is issued.
    pub async fn execute(&self, input: CreateEntityInput) -> Result<EntityOutput, DomainError> {
        let name = validate_name(&input.name)?;
        let email = input.email.as_deref().map(validate_email).transpose()?;

        let criterion = EntityCriterion::NameOrEmail {
            name: name.clone(),
            email: email.clone(),
        };
        if self.entities.exists_with(&criterion).await? {
            tracing::warn!(
                name = %name,
                email = ?email,
                "Rejected create: name or email already in use"
            );
            let message = match email {
                Some(ref email) => format!(
                    "Entity with name '{}' or email '{}' already exists",
                    name, email
                ),
                None => format!("Entity with name '{}' already exists", name),
            };
            return Err(DomainError::Conflict(message));
        }

        let entity = ExampleEntity::create(name, email, input.description);
        let saved = self.entities.save(entity).await?;
        tracing::debug!(id = %saved.id, name = %saved.name, "Created entity");

        Ok(EntityOutput::from(&saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryExampleEntityRepository;
    use crate::test_utils::{create_input, FailingRepository, RecordingRepository};

    fn create_use_case(
        repo: Arc<InMemoryExampleEntityRepository>,
    ) -> CreateEntityUseCase<InMemoryExampleEntityRepository> {
        CreateEntityUseCase::new(repo)
    }

    #[tokio::test]
    async fn given_valid_input_when_create_then_entity_is_persisted() {
        let repo = Arc::new(InMemoryExampleEntityRepository::new());
        let use_case = create_use_case(repo.clone());

        let output = use_case
            .execute(CreateEntityInput {
                name: "Test Entity".to_string(),
                email: None,
                description: Some("A test entity".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(output.name, "Test Entity");
        assert_eq!(output.description.as_deref(), Some("A test entity"));
        let found = repo.find_by_id(&output.id).await.unwrap().unwrap();
        assert_eq!(found.id, output.id);
        assert_eq!(EntityOutput::from(&found), output);
    }

    #[tokio::test]
    async fn given_padded_name_when_create_then_name_is_trimmed() {
        let repo = Arc::new(InMemoryExampleEntityRepository::new());
        let use_case = create_use_case(repo);

        let output = use_case.execute(create_input("  Padded  ")).await.unwrap();

        assert_eq!(output.name, "Padded");
    }

    #[tokio::test]
    async fn given_duplicate_email_when_create_then_conflict_and_store_unchanged() {
        let repo = Arc::new(InMemoryExampleEntityRepository::new());
        let use_case = create_use_case(repo.clone());

        use_case
            .execute(CreateEntityInput {
                name: "John".to_string(),
                email: Some("john@example.com".to_string()),
                description: None,
            })
            .await
            .unwrap();

        let result = use_case
            .execute(CreateEntityInput {
                name: "Jane".to_string(),
                email: Some("john@example.com".to_string()),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert!(result.unwrap_err().to_string().contains("already exists"));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn given_duplicate_name_when_create_then_conflict_and_store_unchanged() {
        let repo = Arc::new(InMemoryExampleEntityRepository::new());
        let use_case = create_use_case(repo.clone());

        use_case.execute(create_input("Taken")).await.unwrap();
        let result = use_case.execute(create_input("Taken")).await;

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn given_empty_name_when_create_then_validation_error() {
        let repo = Arc::new(RecordingRepository::new());
        let use_case = CreateEntityUseCase::new(repo.clone());

        let result = use_case.execute(create_input("")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.exists_calls(), 0);
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn given_malformed_email_when_create_then_validation_error() {
        let repo = Arc::new(RecordingRepository::new());
        let use_case = CreateEntityUseCase::new(repo.clone());

        let result = use_case
            .execute(CreateEntityInput {
                name: "John".to_string(),
                email: Some("not-an-email".to_string()),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn given_success_then_exactly_one_write() {
        let repo = Arc::new(RecordingRepository::new());
        let use_case = CreateEntityUseCase::new(repo.clone());

        use_case
            .execute(CreateEntityInput {
                name: "John".to_string(),
                email: Some("john@example.com".to_string()),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(repo.save_calls(), 1);
        assert_eq!(repo.exists_calls(), 1);
    }

    #[tokio::test]
    async fn given_no_email_then_single_existence_check() {
        let repo = Arc::new(RecordingRepository::new());
        let use_case = CreateEntityUseCase::new(repo.clone());

        use_case.execute(create_input("John")).await.unwrap();

        assert_eq!(repo.save_calls(), 1);
        assert_eq!(repo.exists_calls(), 1);
    }

    #[tokio::test]
    async fn given_duplicate_email_then_single_existence_check_and_no_write() {
        let repo = Arc::new(RecordingRepository::new());
        let use_case = CreateEntityUseCase::new(repo.clone());
        use_case
            .execute(CreateEntityInput {
                name: "John".to_string(),
                email: Some("john@example.com".to_string()),
                description: None,
            })
            .await
            .unwrap();

        let result = use_case
            .execute(CreateEntityInput {
                name: "Jane".to_string(),
                email: Some("john@example.com".to_string()),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(repo.exists_calls(), 2);
        assert_eq!(repo.save_calls(), 1);
    }

    #[tokio::test]
    async fn given_conflict_then_no_write() {
        let repo = Arc::new(RecordingRepository::new());
        let use_case = CreateEntityUseCase::new(repo.clone());
        use_case.execute(create_input("John")).await.unwrap();

        let result = use_case.execute(create_input("John")).await;

        assert!(result.is_err());
        assert_eq!(repo.save_calls(), 1);
    }

    #[tokio::test]
    async fn given_failing_repository_then_storage_error_propagates() {
        let use_case = CreateEntityUseCase::new(Arc::new(FailingRepository));

        let result = use_case.execute(create_input("John")).await;

        assert!(matches!(result, Err(DomainError::Storage(_))));
    }
}
