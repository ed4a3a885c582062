#![allow(dead_code)]

use alias_shortener::api::middleware::auth::BasicCredentials;
use alias_shortener::application::services::{AliasPolicy, AliasService};
use alias_shortener::infrastructure::persistence::PgMappingRepository;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::RandomAliasGenerator;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";
/// `Basic base64("admin:secret")`
pub const TEST_AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0";

pub fn create_test_repository(pool: PgPool) -> Arc<PgMappingRepository> {
    Arc::new(PgMappingRepository::new(Arc::new(pool)))
}

pub fn create_test_service(pool: PgPool) -> AliasService<PgMappingRepository, RandomAliasGenerator> {
    AliasService::new(
        create_test_repository(pool),
        RandomAliasGenerator,
        AliasPolicy::default(),
    )
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(create_test_service(pool)),
        BasicCredentials::new(TEST_USER, TEST_PASSWORD),
        Duration::from_secs(5),
    )
}

pub async fn insert_mapping(pool: &PgPool, alias: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO url (url, alias) VALUES ($1, $2) RETURNING id")
        .bind(url)
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_mappings(pool: &PgPool, alias: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url WHERE alias = $1")
        .bind(alias)
        .fetch_one(pool)
        .await
        .unwrap()
}
