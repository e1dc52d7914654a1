//! Application layer
//!
//! Contains use cases and service orchestration.
//! Use cases coordinate between domain entities and ports.

pub mod create_entity;
pub mod delete_entity;
pub mod queries;
pub mod rename_entity;
pub mod validation;

pub use create_entity::{CreateEntityInput, CreateEntityUseCase, EntityOutput};
pub use delete_entity::DeleteEntityUseCase;
pub use queries::{GetEntityUseCase, ListEntitiesUseCase};
pub use rename_entity::{RenameEntityInput, RenameEntityUseCase};
