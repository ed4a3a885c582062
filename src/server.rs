//! HTTP server initialization and runtime setup.
//!
//! Opens the mapping store, wires the alias service and runs the Axum server
//! until a shutdown signal arrives.

use crate::api::middleware::auth::BasicCredentials;
use crate::application::services::AliasService;
use crate::config::Config;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::shutdown;
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Notify;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL mapping store (schema ensured, reachability verified)
/// - Alias service
/// - Axum HTTP server with graceful shutdown
///
/// After a shutdown signal, open connections get `HTTP_IDLE_TIMEOUT` to
/// finish; the store is closed explicitly in every case.
///
/// # Errors
///
/// Returns an error if:
/// - The database is unreachable or the schema cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(
        PgMappingRepository::connect(&config.store_options())
            .await
            .context("failed to init storage")?,
    );
    tracing::info!("Database connected successfully");

    let alias_service = Arc::new(AliasService::new(
        repository.clone(),
        RandomAliasGenerator,
        config.alias_policy(),
    ));

    let state = AppState::new(
        alias_service,
        BasicCredentials::new(&config.http_user, &config.http_password),
        config.request_timeout(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let signalled = Arc::new(Notify::new());
    let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown({
            let signalled = signalled.clone();
            async move {
                shutdown::signal().await;
                signalled.notify_one();
            }
        })
        .into_future();

    let grace = config.shutdown_grace();
    let result = tokio::select! {
        res = server => res.context("server error"),
        _ = async {
            signalled.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!("Connections still open after {:?}, forcing shutdown", grace);
            Ok(())
        }
    };

    repository.close().await;
    tracing::info!("Server stopped");

    result
}
