//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod entities;

pub use entities::{create_entity, delete_entity, get_entity, list_entities, rename_entity};
