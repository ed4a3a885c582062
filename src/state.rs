//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::api::middleware::auth::BasicCredentials;
use crate::application::services::AliasService;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::utils::alias_generator::RandomAliasGenerator;

/// Alias service as wired in production.
pub type AppAliasService = AliasService<PgMappingRepository, RandomAliasGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AppAliasService>,
    pub credentials: Arc<BasicCredentials>,
    /// Upper bound for the core operations of a single request.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        alias_service: Arc<AppAliasService>,
        credentials: BasicCredentials,
        request_timeout: Duration,
    ) -> Self {
        Self {
            alias_service,
            credentials: Arc::new(credentials),
            request_timeout,
        }
    }

    /// Deadline for the request being handled, starting now.
    pub fn deadline(&self) -> Instant {
        Instant::now() + self.request_timeout
    }
}
