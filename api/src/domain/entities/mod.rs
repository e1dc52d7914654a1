//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod example_entity;

pub use example_entity::{ExampleEntity, ExampleEntityId};
