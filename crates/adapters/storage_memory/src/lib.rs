//! # climahub-adapter-storage-memory
//!
//! Volatile implementation of the storage ports. Snapshots are lost on
//! restart; integrations register them again during setup.
//!
//! ## Dependency rule
//! Depends on `climahub-app` (port traits) and `climahub-domain` only.

mod entity_repo;

pub use entity_repo::InMemoryEntityRepository;
