//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::repositories::MappingRepository;

/// Connection pool settings for [`PgMappingRepository::connect`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Server-side cap on a single statement, so an abandoned insert does not
    /// keep running after the caller's deadline.
    pub statement_timeout: Duration,
}

/// PostgreSQL store for alias mappings.
///
/// Uniqueness of `alias` is enforced by the `url_alias_key` constraint; a
/// conflicting insert is detected from the database error, never from a
/// preceding read.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a repository over an existing pool whose schema is already in place.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Opens a connection pool, ensures the schema exists and verifies reachability.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BackendUnavailable`] if the connection string is
    /// malformed, the database cannot be reached or the schema cannot be created.
    pub async fn connect(options: &StoreOptions) -> StoreResult<Self> {
        let connect_options: PgConnectOptions = options
            .database_url
            .parse()
            .map_err(|e| translate_error(e, "connect", None))?;

        let pool_options = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .idle_timeout(options.idle_timeout)
            .max_lifetime(options.max_lifetime);

        Self::connect_with(
            pool_options,
            with_statement_timeout(connect_options, options.statement_timeout),
        )
        .await
    }

    /// Like [`connect`](Self::connect), with pool and connection options built by the caller.
    pub async fn connect_with(
        pool_options: PgPoolOptions,
        connect_options: PgConnectOptions,
    ) -> StoreResult<Self> {
        let pool = pool_options
            .connect_with(connect_options)
            .await
            .map_err(|e| translate_error(e, "connect", None))?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::unavailable(format!("schema migration failed: {e}")))?;

        let repository = Self::new(Arc::new(pool));
        repository.ping().await?;

        Ok(repository)
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

/// Sets the `statement_timeout` session parameter on every pooled connection.
pub fn with_statement_timeout(options: PgConnectOptions, timeout: Duration) -> PgConnectOptions {
    options.options([("statement_timeout", format!("{}ms", timeout.as_millis()))])
}

/// Maps a driver error onto the store taxonomy.
///
/// Unique violations become [`StoreError::AliasConflict`] when an alias is
/// known for the operation. Everything else is reported as
/// [`StoreError::BackendUnavailable`] with the driver message kept for logs.
fn translate_error(err: sqlx::Error, op: &str, alias: Option<&str>) -> StoreError {
    if let (Some(alias), Some(db_err)) = (alias, err.as_database_error())
        && db_err.is_unique_violation()
    {
        return StoreError::conflict(alias);
    }

    let reason = match &err {
        sqlx::Error::PoolTimedOut => format!("{op}: timed out waiting for a connection"),
        sqlx::Error::PoolClosed => format!("{op}: connection pool is closed"),
        sqlx::Error::Io(e) => format!("{op}: i/o error: {e}"),
        sqlx::Error::Tls(e) => format!("{op}: tls error: {e}"),
        other => format!("{op}: {other}"),
    };

    StoreError::unavailable(reason)
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn save(&self, url: &str, alias: &str) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("INSERT INTO url (url, alias) VALUES ($1, $2) RETURNING id")
            .bind(url)
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| translate_error(e, "storage.postgres.save", Some(alias)))
    }

    async fn lookup(&self, alias: &str) -> StoreResult<String> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = $1")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| translate_error(e, "storage.postgres.lookup", None))?
            .ok_or_else(|| StoreError::not_found(alias))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| translate_error(e, "storage.postgres.ping", None))?;

        Ok(())
    }
}
