//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt`,
//! no TCP listener involved. Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use placement_api::auth::jwt::JwtConfig;
use placement_api::auth::password::hash_password;
use placement_api::config::ServerConfig;
use placement_api::routes;
use placement_api::seed;
use placement_api::state::AppState;
use placement_core::types::DbId;
use placement_db::models::company::{Company, NewCompanyAccount};
use placement_db::models::drive::{CreateDrive, Drive};
use placement_db::models::student::{NewStudentAccount, Student};
use placement_db::repositories::{CompanyRepo, DriveRepo, StudentRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev
/// default), a 30-second request timeout, and a fixed JWT secret so
/// tokens verify across app instances within a test.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body and a bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Password shared by every fixture account.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a student account + profile through the repository layer and
/// return the profile row.
pub async fn seed_student(pool: &PgPool, email: &str, roll: &str, cgpa: f64) -> Student {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = NewStudentAccount {
        email: email.to_string(),
        password_hash: hashed,
        name: "Test Student".to_string(),
        roll_number: roll.to_string(),
        phone: None,
        branch: Some("CSE".to_string()),
        cgpa,
    };
    StudentRepo::create_with_account(pool, &input)
        .await
        .expect("student creation should succeed")
}

/// Create a company account + profile, approval pending, and return the
/// profile row.
pub async fn seed_company(pool: &PgPool, email: &str, name: &str) -> Company {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = NewCompanyAccount {
        email: email.to_string(),
        password_hash: hashed,
        name: name.to_string(),
        hr_name: None,
        hr_email: None,
        hr_phone: None,
        website: None,
        description: None,
    };
    CompanyRepo::create_with_account(pool, &input)
        .await
        .expect("company creation should succeed")
}

/// Create a company that has already passed admin approval.
pub async fn seed_approved_company(pool: &PgPool, email: &str, name: &str) -> Company {
    let company = seed_company(pool, email, name).await;
    CompanyRepo::set_approval_status(pool, company.id, "approved")
        .await
        .expect("approval update should succeed")
        .expect("company should exist")
}

/// Create a drive for a company and move it to the given status.
pub async fn seed_drive(
    pool: &PgPool,
    company_id: DbId,
    title: &str,
    min_cgpa: f64,
    status: &str,
) -> Drive {
    let input = CreateDrive {
        job_title: title.to_string(),
        job_description: None,
        eligibility_criteria: None,
        min_cgpa: Some(min_cgpa),
        branches_allowed: None,
        package_lpa: None,
        application_deadline: None,
    };
    let drive = DriveRepo::create(pool, company_id, &input)
        .await
        .expect("drive creation should succeed");
    if status == drive.status {
        return drive;
    }
    DriveRepo::set_status(pool, drive.id, status)
        .await
        .expect("status update should succeed")
        .expect("drive should exist")
}

/// Log in through the API and return the access token.
pub async fn login_token(pool: &PgPool, email: &str) -> String {
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(
        response.status(),
        StatusCode::OK,
        "login as {email} should succeed"
    );
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Seed the default admin account and return a logged-in access token.
pub async fn admin_token(pool: &PgPool) -> String {
    seed::ensure_admin_account(pool)
        .await
        .expect("admin seed should succeed");
    let app = build_test_app(pool.clone());
    let body = serde_json::json!({ "email": seed::DEFAULT_ADMIN_EMAIL, "password": "admin123" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "admin login should succeed");
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}
