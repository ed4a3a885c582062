//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - Alias mapping storage and lookup

pub mod pg_mapping_repository;

pub use pg_mapping_repository::{PgMappingRepository, StoreOptions, with_statement_timeout};
