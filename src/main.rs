use alias_shortener::{config, server, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init(config.env);

    tracing::info!(
        env = %config.env,
        version = env!("CARGO_PKG_VERSION"),
        "starting alias-shortener"
    );
    tracing::debug!("debug messages are enabled");
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("server terminated with error: {e:#}");
        return Err(e);
    }

    Ok(())
}
