//! Logging setup keyed by the deployment environment.
//!
//! | `APP_ENV` | format | default level |
//! |-----------|--------|---------------|
//! | `local`   | text   | `debug`       |
//! | `dev`     | JSON   | `debug`       |
//! | `prod`    | JSON   | `info`        |
//!
//! `RUST_LOG`, when set, replaces the default filter.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Default filter directive for an environment.
pub fn default_directive(env: Environment) -> &'static str {
    match env {
        Environment::Local | Environment::Dev => "debug,sqlx=info,hyper=info",
        Environment::Prod => "info",
    }
}

/// Installs the global tracing subscriber.
///
/// Must be called once, before any log is emitted.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    match env {
        Environment::Local => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        Environment::Dev | Environment::Prod => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init(),
    }
}
