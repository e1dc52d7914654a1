//! Example domain entity
//!
//! Represents a named record with identity. Persistence-ignorant: adapters
//! decide how it is stored.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an example entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExampleEntityId(pub Uuid);

impl ExampleEntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExampleEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ExampleEntityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ExampleEntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExampleEntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// An example entity
///
/// Equality and hashing use `id` only. Instances are never changed in place:
/// `with_name` and `with_description` return a new value with the same `id`.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleEntity {
    pub id: ExampleEntityId,
    pub name: String,
    pub email: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ExampleEntity {
    /// Create a new entity with a freshly generated id
    pub fn create(
        name: impl Into<String>,
        email: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self::new(
            ExampleEntityId::new(),
            name,
            email,
            description,
            Utc::now(),
        )
    }

    /// Rebuild an entity from already-known fields (storage, test setup)
    pub fn new(
        id: ExampleEntityId,
        name: impl Into<String>,
        email: Option<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            description,
            created_at,
        }
    }

    /// Copy of this entity with a different name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy of this entity with a different description
    #[allow(dead_code)]
    pub fn with_description(&self, description: Option<String>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }
}

impl PartialEq for ExampleEntity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ExampleEntity {}

impl Hash for ExampleEntity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
