//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod in_memory;

pub use in_memory::InMemoryExampleEntityRepository;
