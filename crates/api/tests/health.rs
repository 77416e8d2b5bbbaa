//! Health endpoint and the middleware stack wrapped around the roll API.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_reachable_database(pool: PgPool) {
    let response = get(build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_is_not_under_api_prefix(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/health").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn roll_responses_carry_generated_request_id(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/v1/rolls").await;
    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(request_id.len(), 36, "expected a UUID, got {request_id}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_request_id_is_echoed(pool: PgPool) {
    let request = Request::builder()
        .uri("/api/v1/rolls")
        .header("x-request-id", "roll-audit-42")
        .body(Body::empty())
        .unwrap();

    let response = build_test_app(pool).oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "roll-audit-42");
}

fn preflight(origin: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/rolls/1")
        .header("Origin", origin)
        .header("Access-Control-Request-Method", method)
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_preflight_allows_roll_removal(pool: PgPool) {
    let response = build_test_app(pool)
        .oneshot(preflight("http://localhost:5173", "DELETE"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "http://localhost:5173");
    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    assert!(methods.contains("DELETE"), "got: {methods}");
    assert!(!methods.contains("PUT"), "got: {methods}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cors_ignores_unconfigured_origin(pool: PgPool) {
    let response = build_test_app(pool)
        .oneshot(preflight("http://evil.example", "DELETE"))
        .await
        .unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}
