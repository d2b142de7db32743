//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `fixtures` - fake-data seeding helpers for tests

pub mod database;

#[cfg(feature = "fixtures")]
pub mod fixtures;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
