//! CLI administration tool for alias-shortener.
//!
//! Works directly against the mapping store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Map a URL to a generated alias
//! cargo run --bin admin -- save https://example.com
//!
//! # Map a URL to an explicit alias
//! cargo run --bin admin -- save https://example.com --alias docs
//!
//! # Resolve an alias
//! cargo run --bin admin -- lookup docs
//!
//! # Show mapping count
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `ALIAS_LENGTH`, `ALIAS_MAX_ATTEMPTS`: generation policy (defaults: 4, 5),
//!   checked against the same bounds as the server

use alias_shortener::api::dto::save::SaveRequest;
use alias_shortener::application::services::AliasService;
use alias_shortener::config;
use alias_shortener::domain::errors::StoreError;
use alias_shortener::domain::repositories::MappingRepository;
use alias_shortener::infrastructure::persistence::{PgMappingRepository, StoreOptions};
use alias_shortener::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use validator::Validate;

/// Deadline applied to each command's store operations.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Map a URL to an alias
    Save {
        /// Target URL
        url: String,

        /// Explicit alias (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Resolve an alias to its URL
    Lookup {
        /// Alias to resolve
        alias: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let repository = PgMappingRepository::connect(&StoreOptions {
        database_url,
        max_connections: 2,
        acquire_timeout: Duration::from_secs(5),
        idle_timeout: Duration::from_secs(60),
        max_lifetime: Duration::from_secs(300),
        statement_timeout: COMMAND_TIMEOUT,
    })
    .await
    .context("Failed to connect to database")?;
    let repository = Arc::new(repository);

    let result = match cli.command {
        Commands::Save { url, alias } => handle_save(repository.clone(), url, alias).await,
        Commands::Lookup { alias } => handle_lookup(repository.clone(), alias).await,
        Commands::Stats => handle_stats(&repository).await,
        Commands::Db { action } => handle_db_action(action, &repository).await,
    };

    repository.close().await;

    result
}

fn alias_service(
    repository: Arc<PgMappingRepository>,
) -> Result<AliasService<PgMappingRepository, RandomAliasGenerator>> {
    let policy = config::alias_policy_from_env()?;

    Ok(AliasService::new(repository, RandomAliasGenerator, policy))
}

/// Applies the rules `POST /url` enforces: canonical URL, empty alias as
/// absent, alias charset and reserved names.
fn checked_request(url: String, alias: Option<String>) -> Result<SaveRequest> {
    let request = SaveRequest::new(url, alias).normalized();

    request
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid input: {}", e))?;

    Ok(request)
}

/// Stores a mapping and prints the alias actually used.
async fn handle_save(
    repository: Arc<PgMappingRepository>,
    url: String,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Save URL".bright_blue().bold());
    println!();

    let request = checked_request(url, alias)?;
    let service = alias_service(repository)?;
    let deadline = Instant::now() + COMMAND_TIMEOUT;

    match service
        .save_url(&request.url, request.alias, deadline)
        .await
    {
        Ok(alias) => {
            println!("  URL:   {}", request.url.cyan());
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!();
            println!("{}", "✅ Saved".green().bold());
            Ok(())
        }
        Err(StoreError::AliasConflict { alias }) => {
            println!("{} {}", "❌ Alias already exists:".red(), alias.yellow());
            anyhow::bail!("alias already exists")
        }
        Err(e) => Err(anyhow::anyhow!("Failed to save URL: {}", e)),
    }
}

/// Resolves an alias and prints its URL.
async fn handle_lookup(repository: Arc<PgMappingRepository>, alias: String) -> Result<()> {
    let service = alias_service(repository)?;
    let deadline = Instant::now() + COMMAND_TIMEOUT;

    match service.resolve(&alias, deadline).await {
        Ok(url) => {
            println!("  {} → {}", alias.bright_yellow(), url.cyan());
            Ok(())
        }
        Err(StoreError::NotFound { .. }) => {
            println!("{} {}", "⚠️  Alias not found:".yellow(), alias);
            anyhow::bail!("alias not found")
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve alias: {}", e)),
    }
}

/// Displays the number of stored mappings.
async fn handle_stats(repository: &PgMappingRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mappings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(repository.pool())
        .await?;

    println!(
        "  Mappings: {}",
        mappings_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, repository: &PgMappingRepository) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(repository.pool())
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
