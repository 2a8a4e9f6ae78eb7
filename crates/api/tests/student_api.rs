//! HTTP-level integration tests for the student endpoints.
//!
//! Covers drive visibility, the ordered application gates (approval,
//! duplicate, CGPA), history ordering, and the full
//! register-to-shortlist scenario.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, get_auth, login_token, post_json, post_json_auth, put_json_auth,
    seed_approved_company, seed_drive, seed_student,
};
use placement_db::repositories::ApplicationRepo;
use sqlx::PgPool;

/// Count the application rows, for "no row created" assertions.
async fn application_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Role gating and visibility
// ---------------------------------------------------------------------------

/// Student endpoints return 403 for a company token.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_student_endpoints_reject_companies(pool: PgPool) {
    seed_approved_company(&pool, "peeker@corp.com", "Peeker Corp").await;
    let token = login_token(&pool, "peeker@corp.com").await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/student/drives", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Only approved drives are listed; pending, closed and rejected ones
/// stay hidden.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_drives_lists_only_approved(pool: PgPool) {
    let student = seed_student(&pool, "browser@test.com", "R400", 8.0).await;
    let company = seed_approved_company(&pool, "lister@corp.com", "Lister Corp").await;
    let open = seed_drive(&pool, company.id, "Open Role", 7.0, "approved").await;
    seed_drive(&pool, company.id, "Pending Role", 7.0, "pending").await;
    seed_drive(&pool, company.id, "Closed Role", 7.0, "closed").await;
    seed_drive(&pool, company.id, "Rejected Role", 7.0, "rejected").await;
    ApplicationRepo::create(&pool, student.id, open.id)
        .await
        .unwrap();

    let token = login_token(&pool, "browser@test.com").await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/student/drives", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let drives = json["drives"].as_array().unwrap();
    assert_eq!(drives.len(), 1);
    assert_eq!(drives[0]["job_title"], "Open Role");
    assert_eq!(json["applied_drive_ids"], serde_json::json!([open.id]));
}

/// The dashboard carries the profile, open drives and applications.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_contents(pool: PgPool) {
    let student = seed_student(&pool, "home@test.com", "R401", 8.0).await;
    let company = seed_approved_company(&pool, "board@corp.com", "Board Corp").await;
    let drive = seed_drive(&pool, company.id, "Posted Role", 7.0, "approved").await;
    ApplicationRepo::create(&pool, student.id, drive.id)
        .await
        .unwrap();

    let token = login_token(&pool, "home@test.com").await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/student/dashboard", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["student"]["roll_number"], "R401");
    assert_eq!(json["approved_drives"].as_array().unwrap().len(), 1);
    assert_eq!(json["applications"].as_array().unwrap().len(), 1);
    assert_eq!(json["applied_drive_ids"], serde_json::json!([drive.id]));
}

/// Profile edits persist; the roll number has no update path.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile(pool: PgPool) {
    seed_student(&pool, "groomer@test.com", "R402", 7.0).await;
    let token = login_token(&pool, "groomer@test.com").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "phone": "9000000001",
        "resume_url": "https://cdn.example/resume.pdf"
    });
    let response = put_json_auth(app, "/api/v1/student/profile", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/student/profile", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["phone"], "9000000001");
    assert_eq!(json["resume_url"], "https://cdn.example/resume.pdf");
    assert_eq!(json["roll_number"], "R402");
}

// ---------------------------------------------------------------------------
// Applying
// ---------------------------------------------------------------------------

/// A qualifying application is created with status "applied".
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_success(pool: PgPool) {
    let student = seed_student(&pool, "keen@test.com", "R403", 8.0).await;
    let company = seed_approved_company(&pool, "hirer@corp.com", "Hirer Corp").await;
    let drive = seed_drive(&pool, company.id, "Good Role", 7.5, "approved").await;

    let token = login_token(&pool, "keen@test.com").await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/student/drives/{}/apply", drive.id);
    let response = post_json_auth(app, &uri, serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "applied");
    assert_eq!(json["student_id"], student.id);
    assert_eq!(json["drive_id"], drive.id);
}

/// Applying to an unknown drive returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_unknown_drive(pool: PgPool) {
    seed_student(&pool, "lost@test.com", "R404", 8.0).await;
    let token = login_token(&pool, "lost@test.com").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/student/drives/9999/apply",
        serde_json::json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Applying to a drive that is not approved returns 400 and creates no
/// row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_to_unapproved_drive(pool: PgPool) {
    seed_student(&pool, "early@test.com", "R405", 9.0).await;
    let company = seed_approved_company(&pool, "slow@corp.com", "Slow Corp").await;
    let pending = seed_drive(&pool, company.id, "Unreviewed Role", 7.0, "pending").await;
    let closed = seed_drive(&pool, company.id, "Finished Role", 7.0, "closed").await;

    let token = login_token(&pool, "early@test.com").await;

    for drive_id in [pending.id, closed.id] {
        let app = common::build_test_app(pool.clone());
        let uri = format!("/api/v1/student/drives/{drive_id}/apply");
        let response = post_json_auth(app, &uri, serde_json::json!({}), &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(application_count(&pool).await, 0);
}

/// A second application to the same drive returns 409 and leaves a
/// single row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_twice_rejected(pool: PgPool) {
    seed_student(&pool, "eager@test.com", "R406", 9.0).await;
    let company = seed_approved_company(&pool, "popular@corp.com", "Popular Corp").await;
    let drive = seed_drive(&pool, company.id, "Hot Role", 7.0, "approved").await;

    let token = login_token(&pool, "eager@test.com").await;
    let uri = format!("/api/v1/student/drives/{}/apply", drive.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    assert_eq!(application_count(&pool).await, 1);
}

/// A student below the minimum CGPA is turned away with 400 and no row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_below_min_cgpa(pool: PgPool) {
    seed_student(&pool, "short@test.com", "R407", 6.0).await;
    let company = seed_approved_company(&pool, "picky@corp.com", "Picky Corp").await;
    let drive = seed_drive(&pool, company.id, "Selective Role", 7.5, "approved").await;

    let token = login_token(&pool, "short@test.com").await;
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/student/drives/{}/apply", drive.id);
    let response = post_json_auth(app, &uri, serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let error_msg = json["error"].as_str().unwrap_or("");
    assert!(
        error_msg.contains("CGPA"),
        "error should mention the CGPA requirement, got: {error_msg}"
    );
    assert_eq!(application_count(&pool).await, 0);
}

/// A CGPA exactly at the minimum qualifies.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_apply_at_exact_min_cgpa(pool: PgPool) {
    seed_student(&pool, "edge@test.com", "R408", 7.5).await;
    let company = seed_approved_company(&pool, "fair@corp.com", "Fair Corp").await;
    let drive = seed_drive(&pool, company.id, "Borderline Role", 7.5, "approved").await;

    let token = login_token(&pool, "edge@test.com").await;
    let app = common::build_test_app(pool);
    let uri = format!("/api/v1/student/drives/{}/apply", drive.id);
    let response = post_json_auth(app, &uri, serde_json::json!({}), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// History lists the caller's applications newest-first.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_history_newest_first(pool: PgPool) {
    let student = seed_student(&pool, "veteran@test.com", "R409", 9.0).await;
    let company = seed_approved_company(&pool, "serial@corp.com", "Serial Corp").await;
    let older = seed_drive(&pool, company.id, "Older Role", 7.0, "approved").await;
    let newer = seed_drive(&pool, company.id, "Newer Role", 7.0, "approved").await;

    let first = ApplicationRepo::create(&pool, student.id, older.id)
        .await
        .unwrap();
    ApplicationRepo::create(&pool, student.id, newer.id)
        .await
        .unwrap();
    // Force an unambiguous ordering regardless of timestamp precision.
    sqlx::query("UPDATE applications SET applied_at = applied_at - INTERVAL '1 hour' WHERE id = $1")
        .bind(first.id)
        .execute(&pool)
        .await
        .unwrap();

    let token = login_token(&pool, "veteran@test.com").await;
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/student/history", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let history = json.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["job_title"], "Newer Role");
    assert_eq!(history[1]["job_title"], "Older Role");
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

/// The full placement flow: registration, company approval, drive
/// approval, application, shortlisting, history.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_full_placement_flow(pool: PgPool) {
    // Student registers through the API.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "r001@test.com",
        "password": common::TEST_PASSWORD,
        "confirm_password": common::TEST_PASSWORD,
        "name": "Rohan",
        "roll_number": "R001",
        "cgpa": 8.0
    });
    let response = post_json(app, "/api/v1/register/student", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Company registers and is approved by the admin.
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "hr@initech.com",
        "password": common::TEST_PASSWORD,
        "confirm_password": common::TEST_PASSWORD,
        "name": "Initech"
    });
    let response = post_json(app, "/api/v1/register/company", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let company_id = body_json(response).await["id"].as_i64().unwrap();

    let admin = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/admin/companies/{company_id}/approve");
    let response = post_json_auth(app, &uri, serde_json::json!({}), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Company posts a drive; it starts pending.
    let company = login_token(&pool, "hr@initech.com").await;
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "job_title": "Software Engineer", "min_cgpa": 7.5 });
    let response = post_json_auth(app, "/api/v1/company/drives", body, &company).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let drive = body_json(response).await;
    assert_eq!(drive["status"], "pending");
    let drive_id = drive["id"].as_i64().unwrap();

    // The student cannot apply before admin approval.
    let student = login_token(&pool, "r001@test.com").await;
    let apply_uri = format!("/api/v1/student/drives/{drive_id}/apply");
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &apply_uri, serde_json::json!({}), &student).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Admin approves; the application goes through.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/admin/drives/{drive_id}/approve");
    let response = post_json_auth(app, &uri, serde_json::json!({}), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &apply_uri, serde_json::json!({}), &student).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let application = body_json(response).await;
    assert_eq!(application["status"], "applied");
    let application_id = application["id"].as_i64().unwrap();

    // The company shortlists the applicant.
    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/company/applications/{application_id}/status");
    let body = serde_json::json!({ "status": "shortlisted" });
    let response = post_json_auth(app, &uri, body, &company).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The student's history shows the single shortlisted entry.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/student/history", &student).await;
    let json = body_json(response).await;
    let history = json.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["status"], "shortlisted");
    assert_eq!(history[0]["company_name"], "Initech");
}
