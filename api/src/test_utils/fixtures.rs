//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::app::CreateEntityInput;
use crate::domain::entities::{ExampleEntity, ExampleEntityId};

/// Create a test entity with default values
pub fn test_entity() -> ExampleEntity {
    ExampleEntity::new(
        ExampleEntityId::new(),
        "Test Entity",
        None,
        Some("A test entity for integration tests".to_string()),
        Utc::now(),
    )
}

/// Create a test entity with a specific name
pub fn test_entity_named(name: &str) -> ExampleEntity {
    ExampleEntity::new(ExampleEntityId::new(), name, None, None, Utc::now())
}

/// Create-use-case input with only a name
pub fn create_input(name: &str) -> CreateEntityInput {
    CreateEntityInput {
        name: name.to_string(),
        email: None,
        description: None,
    }
}
