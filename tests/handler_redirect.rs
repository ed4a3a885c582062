mod common;

use alias_shortener::api::handlers::redirect_handler;
use alias_shortener::routes::app_router;
use axum::{Router, routing::get};
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;

fn redirect_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/{alias}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_redirect_success(pool: PgPool) {
    common::insert_mapping(&pool, "go1", "https://example.com/target").await;
    let server = redirect_server(pool);

    let response = server.get("/go1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[sqlx::test]
async fn test_redirect_not_found(pool: PgPool) {
    let server = redirect_server(pool);

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "url not found");
}

#[sqlx::test]
async fn test_redirect_unusable_location(pool: PgPool) {
    common::insert_mapping(&pool, "bad", "https://exa\nmple.com").await;
    let server = redirect_server(pool);

    let response = server.get("/bad").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "failed to redirect");
}

#[sqlx::test]
async fn test_redirect_backend_down(pool: PgPool) {
    let server = redirect_server(pool.clone());
    pool.close().await;

    let response = server.get("/go1").await;

    assert_eq!(response.status_code(), 503);
    assert_eq!(response.json::<Value>()["error"], "failed to process url");
}

#[sqlx::test]
async fn test_redirect_through_app_router(pool: PgPool) {
    common::insert_mapping(&pool, "docs", "https://example.com/docs").await;
    let app = app_router(common::create_test_state(pool));

    let response = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/docs/")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), 307);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/docs"
    );
}
