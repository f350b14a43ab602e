//! End-to-end API tests over the assembled router.
//!
//! Requests go through the full middleware stack (auth whitelist, CORS,
//! request ids) via `tower::ServiceExt::oneshot` without binding a
//! port.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use veranda_server::auth::{JwtConfig, JwtService, hash_password};
use veranda_server::core::{Config, ServerState};
use veranda_server::db::DbService;
use veranda_server::db::repository::admin_user;
use veranda_server::routes::build_app;

struct TestServer {
    app: Router,
    token: String,
    _work_dir: tempfile::TempDir,
}

async fn test_server() -> TestServer {
    let work_dir = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(work_dir.path().to_string_lossy(), 0);

    let db = DbService::in_memory().await.unwrap();
    let hash = hash_password("letmein").unwrap();
    let admin = admin_user::create(&db.pool, "admin", &hash, "Administrator")
        .await
        .unwrap();

    let jwt_service = Arc::new(JwtService::with_config(JwtConfig {
        secret: "integration-test-secret-integration-test".into(),
        expiration_minutes: 30,
        issuer: "veranda-server".into(),
        audience: "veranda-admin".into(),
    }));
    let token = jwt_service.generate_token(admin.id, "admin").unwrap();

    let state = ServerState::new(config, db.pool, jwt_service);
    TestServer {
        app: build_app(state),
        token,
        _work_dir: work_dir,
    }
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn get_authed(path: &str, token: &str) -> Request<Body> {
    Request::get(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_json_authed(path: &str, token: &str, body: Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let server = test_server().await;
    let response = server.app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_routes_reject_anonymous_callers() {
    let server = test_server().await;
    let response = server
        .app
        .oneshot(get("/api/dashboard/stats"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn login_issues_a_usable_token() {
    let server = test_server().await;
    let response = server
        .app
        .clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "letmein"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let token = body["token"].as_str().unwrap().to_string();

    let me = server
        .app
        .oneshot(get_authed("/api/auth/me", &token))
        .await
        .unwrap();
    assert_eq!(me.status(), StatusCode::OK);
    let me_body = json_body(me).await;
    assert_eq!(me_body["username"], "admin");
}

#[tokio::test]
async fn wrong_password_is_a_generic_rejection() {
    let server = test_server().await;
    let response = server
        .app
        .oneshot(post_json(
            "/api/auth/login",
            json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Invalid username or password");
}

#[tokio::test]
async fn public_booking_flow_and_code_lookup() {
    let server = test_server().await;
    let response = server
        .app
        .clone()
        .oneshot(post_json(
            "/api/reservations",
            json!({
                "customerName": "Alice",
                "customerEmail": "alice@example.com",
                "customerPhone": "+34 600 111 222",
                "reservationDate": "2026-10-01",
                "reservationTime": "20:30",
                "numberOfGuests": 4,
                "status": "confirmed"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    // anonymous callers cannot pre-confirm
    assert_eq!(body["status"], "pending");
    let code = body["confirmationCode"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 8);

    let lookup = server
        .app
        .oneshot(get(&format!("/api/reservations/code/{code}")))
        .await
        .unwrap();
    assert_eq!(lookup.status(), StatusCode::OK);
    let found = json_body(lookup).await;
    assert_eq!(found["customerName"], "Alice");
}

#[tokio::test]
async fn dashboard_snapshot_reflects_created_data() {
    let server = test_server().await;
    let token = server.token.clone();

    let created = server
        .app
        .clone()
        .oneshot(post_json_authed(
            "/api/events",
            &token,
            json!({
                "title": "Wine tasting",
                "description": "Six glasses, one cellar",
                "date": "2199-01-01",
                "time": "19:00",
                "category": "tasting"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    server
        .app
        .clone()
        .oneshot(post_json(
            "/api/reviews/submit",
            json!({
                "customerName": "Bob",
                "reviewText": "Superb evening.",
                "rating": 5
            }),
        ))
        .await
        .unwrap();

    let response = server
        .app
        .clone()
        .oneshot(get_authed("/api/dashboard/stats", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stats = json_body(response).await;
    assert_eq!(stats["events"]["total"], 1);
    assert_eq!(stats["events"]["upcoming"], 1);
    assert_eq!(stats["reviews"]["total"], 1);
    assert_eq!(stats["reviews"]["pending"], 1);

    let actions = server
        .app
        .oneshot(get_authed("/api/dashboard/quick-actions", &token))
        .await
        .unwrap();
    let actions = json_body(actions).await;
    assert_eq!(actions["pendingReviews"], 1);
    assert_eq!(actions["upcomingEvents"], 1);
}

#[tokio::test]
async fn review_moderation_controls_the_public_wall() {
    let server = test_server().await;
    let token = server.token.clone();

    let submitted = server
        .app
        .clone()
        .oneshot(post_json(
            "/api/reviews/submit",
            json!({
                "customerName": "Carol",
                "reviewText": "Best croissants in town.",
                "rating": 5
            }),
        ))
        .await
        .unwrap();
    let review = json_body(submitted).await;
    let id = review["id"].as_i64().unwrap();

    let wall = server.app.clone().oneshot(get("/api/reviews/approved")).await.unwrap();
    assert_eq!(json_body(wall).await.as_array().unwrap().len(), 0);

    let approved = server
        .app
        .clone()
        .oneshot(
            Request::put(format!("/api/reviews/{id}/approve"))
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(approved.status(), StatusCode::OK);

    let wall = server.app.oneshot(get("/api/reviews/approved")).await.unwrap();
    assert_eq!(json_body(wall).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_id_maps_to_the_not_found_envelope() {
    let server = test_server().await;
    let response = server
        .app
        .oneshot(get_authed("/api/events/12345", &server.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E0003");
}
