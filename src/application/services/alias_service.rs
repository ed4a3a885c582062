//! Alias allocation and resolution service.

use std::future::Future;
use std::sync::Arc;
use tokio::time::{Instant, timeout_at};
use tracing::{debug, info, warn};

use crate::domain::entities::NewMapping;
use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::repositories::MappingRepository;
use crate::utils::alias_generator::{AliasGenerator, DEFAULT_ALIAS_LENGTH};

/// Default number of insert attempts for generated aliases.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Shape of generated aliases and the retry bound for collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasPolicy {
    pub length: usize,
    pub max_attempts: usize,
}

impl Default for AliasPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service composing the alias generator and the mapping store.
///
/// Stateless per call: the only shared state is the store's persisted
/// records. Every backend round-trip is bounded by the caller's deadline and
/// dropping the returned future abandons the in-flight statement.
///
/// A save that fails with a deadline error has an unknown outcome: the insert
/// may already have reached the server and committed. Retrying the same
/// explicit alias then reports [`StoreError::AliasConflict`]. The store's
/// `statement_timeout` bounds how long such an abandoned statement can run.
pub struct AliasService<R: MappingRepository, G: AliasGenerator> {
    repository: Arc<R>,
    generator: G,
    policy: AliasPolicy,
}

impl<R: MappingRepository, G: AliasGenerator> AliasService<R, G> {
    /// Creates a new alias service.
    pub fn new(repository: Arc<R>, generator: G, policy: AliasPolicy) -> Self {
        Self {
            repository,
            generator,
            policy,
        }
    }

    /// Returns the generation policy in effect.
    pub fn policy(&self) -> AliasPolicy {
        self.policy
    }

    /// Stores `url` under an alias and returns the alias actually stored.
    ///
    /// An explicit alias is tried once: a conflict is returned to the caller
    /// unchanged, never replaced by another alias. Without one (or with an
    /// empty one), candidates are generated and retried on conflict up to
    /// [`AliasPolicy::max_attempts`] times.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AliasConflict`] if the explicit alias is taken
    /// - [`StoreError::BackendUnavailable`] on backend failure, deadline
    ///   expiry, or when every generated candidate collided; after a deadline
    ///   expiry the mapping may or may not have been stored
    pub async fn save_url(
        &self,
        url: &str,
        explicit_alias: Option<String>,
        deadline: Instant,
    ) -> StoreResult<String> {
        match explicit_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => {
                let mapping = NewMapping::new(alias, url);
                let id = self
                    .bounded(
                        deadline,
                        "save",
                        self.repository.save(&mapping.url, &mapping.alias),
                    )
                    .await
                    .inspect_err(|e| log_save_failure(e, &mapping.alias))?;

                let mapping = mapping.persisted(id);
                info!(alias = %mapping.alias, id = mapping.id, "url saved with explicit alias");
                Ok(mapping.alias)
            }
            None => self.save_with_generated_alias(url, deadline).await,
        }
    }

    /// Resolves `alias` to its URL.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if the alias was never stored
    /// - [`StoreError::BackendUnavailable`] on backend failure or deadline expiry
    pub async fn resolve(&self, alias: &str, deadline: Instant) -> StoreResult<String> {
        self.bounded(deadline, "lookup", self.repository.lookup(alias))
            .await
            .inspect_err(|e| match e {
                StoreError::NotFound { .. } => debug!(alias = %alias, "alias not found"),
                other => warn!(op = "lookup", alias = %alias, error = %other, "lookup failed"),
            })
    }

    /// Checks that the backend answers before `deadline`.
    pub async fn ping(&self, deadline: Instant) -> StoreResult<()> {
        self.bounded(deadline, "ping", self.repository.ping()).await
    }

    async fn save_with_generated_alias(&self, url: &str, deadline: Instant) -> StoreResult<String> {
        for attempt in 1..=self.policy.max_attempts {
            let candidate = NewMapping::new(self.generator.generate(self.policy.length), url);

            match self
                .bounded(
                    deadline,
                    "save",
                    self.repository.save(&candidate.url, &candidate.alias),
                )
                .await
            {
                Ok(id) => {
                    let mapping = candidate.persisted(id);
                    info!(alias = %mapping.alias, id = mapping.id, attempt, "url saved with generated alias");
                    return Ok(mapping.alias);
                }
                Err(StoreError::AliasConflict { .. }) => {
                    debug!(alias = %candidate.alias, attempt, "generated alias collided, retrying");
                }
                Err(e) => {
                    log_save_failure(&e, &candidate.alias);
                    return Err(e);
                }
            }
        }

        warn!(
            op = "save",
            length = self.policy.length,
            attempts = self.policy.max_attempts,
            "alias space exhausted"
        );

        Err(StoreError::unavailable(format!(
            "alias space exhausted: {} attempts at length {} all collided",
            self.policy.max_attempts, self.policy.length
        )))
    }

    /// Runs one backend call, failing with `BackendUnavailable` once `deadline` passes.
    async fn bounded<T>(
        &self,
        deadline: Instant,
        op: &str,
        call: impl Future<Output = StoreResult<T>>,
    ) -> StoreResult<T> {
        if Instant::now() >= deadline {
            return Err(StoreError::unavailable(format!("{op}: deadline exceeded")));
        }

        timeout_at(deadline, call)
            .await
            .unwrap_or_else(|_| Err(StoreError::unavailable(format!("{op}: deadline exceeded"))))
    }
}

fn log_save_failure(err: &StoreError, alias: &str) {
    match err {
        StoreError::AliasConflict { .. } => info!(alias = %alias, "alias already exists"),
        other => warn!(op = "save", alias = %alias, error = %other, "failed to save url"),
    }
}
