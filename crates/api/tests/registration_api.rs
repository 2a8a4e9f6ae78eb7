//! HTTP-level integration tests for the public registration endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn student_body(email: &str, roll: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "first_day_pass1",
        "confirm_password": "first_day_pass1",
        "name": "Asha Verma",
        "roll_number": roll,
        "phone": "9876543210",
        "branch": "ECE",
        "cgpa": 7.9
    })
}

fn company_body(email: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "recruiting_pass1",
        "confirm_password": "recruiting_pass1",
        "name": name,
        "hr_name": "Priya Nair",
        "hr_email": "hr@acme.example",
        "hr_phone": "9123456780",
        "website": "https://acme.example",
        "description": "Widgets at scale"
    })
}

// ---------------------------------------------------------------------------
// Student registration
// ---------------------------------------------------------------------------

/// A valid student registration returns 201 with the profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_student_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("asha@test.com", "R001"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Asha Verma");
    assert_eq!(json["roll_number"], "R001");
    assert_eq!(json["cgpa"], 7.9);
    assert_eq!(json["is_blacklisted"], false);
    assert!(json["id"].is_number());
    // The profile never carries credentials.
    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
}

/// A fresh registration can log in straight away.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_registered_student_can_login(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("ready@test.com", "R002"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "email": "ready@test.com", "password": "first_day_pass1" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Mismatched password confirmation returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_student_password_mismatch(pool: PgPool) {
    let mut body = student_body("mismatch@test.com", "R003");
    body["confirm_password"] = serde_json::json!("something_else_1");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/register/student", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Passwords do not match");
}

/// A password below the minimum length returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_student_short_password(pool: PgPool) {
    let mut body = student_body("shortpw@test.com", "R004");
    body["password"] = serde_json::json!("short");
    body["confirm_password"] = serde_json::json!("short");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/register/student", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Re-using an email returns 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_student_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("dupe@test.com", "R005"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("dupe@test.com", "R006"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Email already registered");
}

/// Re-using a roll number returns 409 even under a fresh email.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_student_duplicate_roll_number(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("first@test.com", "R007"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("second@test.com", "R007"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Roll number already registered");
}

/// Omitted optional fields default sensibly (cgpa 0).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_student_minimal_body(pool: PgPool) {
    let body = serde_json::json!({
        "email": "minimal@test.com",
        "password": "first_day_pass1",
        "confirm_password": "first_day_pass1",
        "name": "Minimal",
        "roll_number": "R008"
    });

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/register/student", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["cgpa"], 0.0);
    assert!(json["phone"].is_null());
    assert!(json["branch"].is_null());
}

// ---------------------------------------------------------------------------
// Company registration
// ---------------------------------------------------------------------------

/// A valid company registration returns 201 with a pending profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_company_returns_201_pending(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/register/company",
        company_body("jobs@acme.example", "Acme Corp"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Acme Corp");
    assert_eq!(json["hr_name"], "Priya Nair");
    assert_eq!(json["approval_status"], "pending");
    assert_eq!(json["is_blacklisted"], false);
}

/// A newly registered company cannot log in until approved.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_registered_company_blocked_until_approved(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/register/company",
        company_body("waiting@acme.example", "Waiting Corp"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body =
        serde_json::json!({ "email": "waiting@acme.example", "password": "recruiting_pass1" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Company email collisions are rejected with 409.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_company_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/register/company",
        company_body("same@acme.example", "First Corp"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/register/company",
        company_body("same@acme.example", "Second Corp"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Mismatched company password confirmation returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_company_password_mismatch(pool: PgPool) {
    let mut body = company_body("typo@acme.example", "Typo Corp");
    body["confirm_password"] = serde_json::json!("not_the_same_1");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/register/company", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// An email used by a student cannot be reused by a company; accounts
/// share one namespace.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_email_shared_across_roles(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/register/student",
        student_body("shared@test.com", "R009"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/register/company",
        company_body("shared@test.com", "Shared Corp"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
