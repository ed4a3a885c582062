//! Error taxonomy of the alias mapping store.

use thiserror::Error;

/// Result type for mapping store and orchestration operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures observable by callers of the mapping store.
///
/// Backend-specific errors never cross the store boundary: implementations
/// translate driver signals into one of these variants. `reason` strings are
/// meant for logs only and must not be rendered to end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The alias is already mapped to a URL.
    #[error("alias already exists: {alias}")]
    AliasConflict { alias: String },

    /// No mapping exists for the alias.
    #[error("alias not found: {alias}")]
    NotFound { alias: String },

    /// Connectivity failure, deadline expiry or exhausted alias space.
    #[error("storage backend unavailable: {reason}")]
    BackendUnavailable { reason: String },
}

impl StoreError {
    pub fn conflict(alias: impl Into<String>) -> Self {
        Self::AliasConflict {
            alias: alias.into(),
        }
    }

    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            reason: reason.into(),
        }
    }

    /// Returns true for [`StoreError::AliasConflict`].
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AliasConflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
