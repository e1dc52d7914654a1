//! In-memory adapters
//!
//! Map-backed implementations of the repository ports. No external services
//! are needed, so the same types back the server and the unit tests.

mod example_entity_repo;

pub use example_entity_repo::InMemoryExampleEntityRepository;
