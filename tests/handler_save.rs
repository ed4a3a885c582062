mod common;

use alias_shortener::api::handlers::{redirect_handler, save_handler};
use alias_shortener::routes::app_router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

fn save_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/url", post(save_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_save_generates_alias(pool: PgPool) {
    let server = save_server(pool.clone());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "OK");
    let alias = json["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 4);
    assert_eq!(common::count_mappings(&pool, alias).await, 1);
}

#[sqlx::test]
async fn test_save_empty_alias_generates(pool: PgPool) {
    let server = save_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["alias"].as_str().unwrap().len(), 4);
}

#[sqlx::test]
async fn test_save_explicit_alias(pool: PgPool) {
    let server = save_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com/docs", "alias": "docs" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["alias"], "docs");
}

#[sqlx::test]
async fn test_save_conflict(pool: PgPool) {
    common::insert_mapping(&pool, "dup", "https://a.com").await;
    let server = save_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://b.com", "alias": "dup" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["error"], "url already exists");
}

#[sqlx::test]
async fn test_save_invalid_url(pool: PgPool) {
    let server = save_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "Error");
    assert!(json["details"].get("url").is_some());
}

#[sqlx::test]
async fn test_save_missing_url(pool: PgPool) {
    let server = save_server(pool);

    let response = server.post("/url").json(&json!({ "alias": "x" })).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"],
        "failed to decode request"
    );
}

#[sqlx::test]
async fn test_save_reserved_alias(pool: PgPool) {
    let server = save_server(pool);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "health" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["details"].get("alias").is_some());
}

#[sqlx::test]
async fn test_saved_url_with_control_characters_redirects(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/url", post(save_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://exa\nmple.com/\tpath", "alias": "ctl" }))
        .await;
    response.assert_status_ok();

    let response = server.get("/ctl").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/path");
}

#[sqlx::test]
async fn test_save_malformed_json(pool: PgPool) {
    let server = save_server(pool);

    let response = server.post("/url").text("{\"url\": ").await;

    response.assert_status_bad_request();
}

fn save_request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/url")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    builder
        .body(Body::from(r#"{"url":"https://example.com","alias":"auth"}"#))
        .unwrap()
}

#[sqlx::test]
async fn test_router_rejects_missing_credentials(pool: PgPool) {
    let app = app_router(common::create_test_state(pool.clone()));

    let response = app.oneshot(save_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    assert_eq!(common::count_mappings(&pool, "auth").await, 0);
}

#[sqlx::test]
async fn test_router_rejects_wrong_credentials(pool: PgPool) {
    let app = app_router(common::create_test_state(pool));

    // admin:wrong
    let response = app
        .oneshot(save_request(Some("Basic YWRtaW46d3Jvbmc=")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_router_accepts_valid_credentials(pool: PgPool) {
    let app = app_router(common::create_test_state(pool.clone()));

    let response = app
        .oneshot(save_request(Some(common::TEST_AUTHORIZATION)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "status": "OK", "alias": "auth" }));
    assert_eq!(common::count_mappings(&pool, "auth").await, 1);
}
