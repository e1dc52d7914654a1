//! Test doubles for the repository port
//!
//! `RecordingRepository` delegates to the in-memory adapter and counts calls,
//! so tests can check how many reads and writes a use case issued.
//! `FailingRepository` returns a storage error from every method.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::adapters::InMemoryExampleEntityRepository;
use crate::domain::entities::{ExampleEntity, ExampleEntityId};
use crate::domain::ports::{EntityCriterion, ExampleEntityRepository};
use crate::error::DomainError;

// ============================================================================
// Recording Repository
// ============================================================================

#[derive(Default)]
pub struct RecordingRepository {
    inner: InMemoryExampleEntityRepository,
    saves: AtomicUsize,
    exists_checks: AtomicUsize,
    deletes: AtomicUsize,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an entity without counting it as a save
    pub fn with_entity(entity: ExampleEntity) -> Self {
        Self {
            inner: InMemoryExampleEntityRepository::new().with_entity(entity),
            ..Self::default()
        }
    }

    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_checks.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExampleEntityRepository for RecordingRepository {
    async fn save(&self, entity: ExampleEntity) -> Result<ExampleEntity, DomainError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(entity).await
    }

    async fn find_by_id(&self, id: &ExampleEntityId) -> Result<Option<ExampleEntity>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<ExampleEntity>, DomainError> {
        self.inner.find_all().await
    }

    async fn exists_with(&self, criterion: &EntityCriterion) -> Result<bool, DomainError> {
        self.exists_checks.fetch_add(1, Ordering::SeqCst);
        self.inner.exists_with(criterion).await
    }

    async fn delete(&self, id: &ExampleEntityId) -> Result<bool, DomainError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }
}

// ============================================================================
// Failing Repository
// ============================================================================

pub struct FailingRepository;

fn storage_down() -> DomainError {
    DomainError::Storage("storage unavailable".to_string())
}

#[async_trait]
impl ExampleEntityRepository for FailingRepository {
    async fn save(&self, _entity: ExampleEntity) -> Result<ExampleEntity, DomainError> {
        Err(storage_down())
    }

    async fn find_by_id(
        &self,
        _id: &ExampleEntityId,
    ) -> Result<Option<ExampleEntity>, DomainError> {
        Err(storage_down())
    }

    async fn find_all(&self) -> Result<Vec<ExampleEntity>, DomainError> {
        Err(storage_down())
    }

    async fn exists_with(&self, _criterion: &EntityCriterion) -> Result<bool, DomainError> {
        Err(storage_down())
    }

    async fn delete(&self, _id: &ExampleEntityId) -> Result<bool, DomainError> {
        Err(storage_down())
    }
}
