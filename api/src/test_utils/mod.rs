//! Test utilities
//!
//! Test doubles and fixtures for unit testing.
//!
//! The in-memory adapter already works as a fake for the repository port, so
//! the doubles here only add call counting and failure injection on top of it.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
