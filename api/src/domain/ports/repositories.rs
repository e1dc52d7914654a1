//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., in-memory).

use async_trait::async_trait;

use crate::domain::entities::{ExampleEntity, ExampleEntityId};
use crate::error::DomainError;

/// Condition used by use cases to check uniqueness before writing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityCriterion {
    /// Exact name match
    NameEquals(String),
    /// Exact name match, or an email match (ASCII case-insensitive) when an
    /// email is given
    NameOrEmail { name: String, email: Option<String> },
}

impl EntityCriterion {
    /// Whether `entity` satisfies this criterion
    pub fn matches(&self, entity: &ExampleEntity) -> bool {
        match self {
            EntityCriterion::NameEquals(name) => entity.name == *name,
            EntityCriterion::NameOrEmail { name, email } => {
                entity.name == *name
                    || match (email.as_deref(), entity.email.as_deref()) {
                        (Some(wanted), Some(stored)) => stored.eq_ignore_ascii_case(wanted),
                        _ => false,
                    }
            }
        }
    }
}

/// Repository for ExampleEntity entities
#[async_trait]
pub trait ExampleEntityRepository: Send + Sync {
    /// Insert or overwrite an entity, returning the stored value
    async fn save(&self, entity: ExampleEntity) -> Result<ExampleEntity, DomainError>;

    /// Find an entity by ID
    async fn find_by_id(&self, id: &ExampleEntityId) -> Result<Option<ExampleEntity>, DomainError>;

    /// Get every stored entity, in no particular order
    async fn find_all(&self) -> Result<Vec<ExampleEntity>, DomainError>;

    /// Check whether any stored entity satisfies the criterion
    async fn exists_with(&self, criterion: &EntityCriterion) -> Result<bool, DomainError>;

    /// Delete an entity. Returns false if it was not stored.
    async fn delete(&self, id: &ExampleEntityId) -> Result<bool, DomainError>;
}
