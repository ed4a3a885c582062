//! Repository trait for alias mapping persistence.

use crate::domain::errors::StoreResult;
use async_trait::async_trait;

/// Durable, uniqueness-enforcing store of alias → URL mappings.
///
/// Uniqueness of `alias` is guaranteed by the backend at insertion time, never
/// by a read before the write. Implementations must translate backend errors
/// into [`crate::domain::errors::StoreError`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns its surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasConflict`](crate::domain::errors::StoreError::AliasConflict)
    /// if `alias` is already mapped. The existing mapping is left unchanged.
    ///
    /// Returns [`StoreError::BackendUnavailable`](crate::domain::errors::StoreError::BackendUnavailable)
    /// on connectivity or transport failures.
    async fn save(&self, url: &str, alias: &str) -> StoreResult<i64>;

    /// Returns the URL mapped to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`](crate::domain::errors::StoreError::NotFound)
    /// if no record has that alias.
    ///
    /// Returns [`StoreError::BackendUnavailable`](crate::domain::errors::StoreError::BackendUnavailable)
    /// on connectivity or transport failures.
    async fn lookup(&self, alias: &str) -> StoreResult<String>;

    /// Verifies that the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
