//! Handlers for the `/admin` resource (oversight of companies,
//! students, drives and applications).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_core::status::{
    APPROVAL_APPROVED, APPROVAL_PENDING, APPROVAL_REJECTED, DRIVE_APPROVED, DRIVE_PENDING,
    DRIVE_REJECTED,
};
use placement_core::types::DbId;
use placement_db::models::application::ApplicationDetail;
use placement_db::models::company::Company;
use placement_db::models::drive::Drive;
use placement_db::models::student::{Student, UpdateStudent};
use placement_db::repositories::{ApplicationRepo, CompanyRepo, DriveRepo, StudentRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query string for the company and student listings.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring filter. Absent or empty lists all.
    pub search: Option<String>,
}

/// Request body for `PUT /admin/students/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub cgpa: Option<f64>,
}

/// Response body for `GET /admin/dashboard`.
#[derive(Debug, Serialize)]
pub struct DashboardCounts {
    pub total_students: i64,
    pub total_companies: i64,
    pub total_drives: i64,
    pub total_applications: i64,
    pub pending_companies: i64,
    pub pending_drives: i64,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/dashboard
///
/// Portal-wide entity counts plus the two approval backlogs.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DashboardCounts>> {
    let total_students = StudentRepo::count(&state.pool).await?;
    let total_companies = CompanyRepo::count(&state.pool).await?;
    let total_drives = DriveRepo::count(&state.pool).await?;
    let total_applications = ApplicationRepo::count(&state.pool).await?;
    let pending_companies =
        CompanyRepo::count_by_approval_status(&state.pool, APPROVAL_PENDING).await?;
    let pending_drives = DriveRepo::count_by_status(&state.pool, DRIVE_PENDING).await?;

    Ok(Json(DashboardCounts {
        total_students,
        total_companies,
        total_drives,
        total_applications,
        pending_companies,
        pending_drives,
    }))
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/companies
///
/// List all companies, optionally filtered by `?search=` on name.
pub async fn list_companies(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => CompanyRepo::search(&state.pool, term).await?,
        None => CompanyRepo::list(&state.pool).await?,
    };
    Ok(Json(companies))
}

/// GET /api/v1/admin/companies/pending
///
/// The approval queue: companies awaiting an admin decision.
pub async fn list_pending_companies(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Company>>> {
    let companies = CompanyRepo::list_by_approval_status(&state.pool, APPROVAL_PENDING).await?;
    Ok(Json(companies))
}

/// POST /api/v1/admin/companies/{id}/approve
///
/// Approve a company registration, unlocking login and drive creation.
pub async fn approve_company(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::set_approval_status(&state.pool, id, APPROVAL_APPROVED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "company",
            id,
        }))?;
    tracing::info!(company_id = id, "Company approved");
    Ok(Json(company))
}

/// POST /api/v1/admin/companies/{id}/reject
///
/// Reject a company registration.
pub async fn reject_company(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::set_approval_status(&state.pool, id, APPROVAL_REJECTED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "company",
            id,
        }))?;
    tracing::info!(company_id = id, "Company rejected");
    Ok(Json(company))
}

/// POST /api/v1/admin/companies/{id}/blacklist
///
/// Toggle the blacklist flag. The returned row carries the new value.
pub async fn blacklist_company(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::toggle_blacklist(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "company",
            id,
        }))?;
    tracing::info!(
        company_id = id,
        blacklisted = company.is_blacklisted,
        "Company blacklist toggled"
    );
    Ok(Json(company))
}

/// DELETE /api/v1/admin/companies/{id}
///
/// Delete a company, its account, drives and applications. Returns
/// 204 No Content.
pub async fn delete_company(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CompanyRepo::delete_with_account(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "company",
            id,
        }));
    }
    tracing::info!(company_id = id, "Company deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/students
///
/// List all students, optionally filtered by `?search=` on name, roll
/// number or phone.
pub async fn list_students(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Student>>> {
    let students = match query.search.as_deref().filter(|s| !s.is_empty()) {
        Some(term) => StudentRepo::search(&state.pool, term).await?,
        None => StudentRepo::list(&state.pool).await?,
    };
    Ok(Json(students))
}

/// GET /api/v1/admin/students/{id}
///
/// Fetch a single student for the admin edit view.
pub async fn get_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "student",
            id,
        }))?;
    Ok(Json(student))
}

/// PUT /api/v1/admin/students/{id}
///
/// Edit a student's profile fields.
pub async fn update_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudentRequest>,
) -> AppResult<Json<Student>> {
    let update_dto = UpdateStudent {
        name: input.name,
        phone: input.phone,
        branch: input.branch,
        cgpa: input.cgpa,
        resume_url: None,
    };
    let student = StudentRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "student",
            id,
        }))?;
    Ok(Json(student))
}

/// POST /api/v1/admin/students/{id}/blacklist
///
/// Toggle the blacklist flag. The returned row carries the new value.
pub async fn blacklist_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::toggle_blacklist(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "student",
            id,
        }))?;
    tracing::info!(
        student_id = id,
        blacklisted = student.is_blacklisted,
        "Student blacklist toggled"
    );
    Ok(Json(student))
}

/// DELETE /api/v1/admin/students/{id}
///
/// Delete a student, their account and applications. Returns 204 No
/// Content.
pub async fn delete_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete_with_account(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "student",
            id,
        }));
    }
    tracing::info!(student_id = id, "Student deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Drives
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/drives
///
/// List every drive across all companies, newest first.
pub async fn list_drives(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Drive>>> {
    let drives = DriveRepo::list(&state.pool).await?;
    Ok(Json(drives))
}

/// GET /api/v1/admin/drives/pending
///
/// The approval queue: drives awaiting an admin decision.
pub async fn list_pending_drives(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Drive>>> {
    let drives = DriveRepo::list_by_status(&state.pool, DRIVE_PENDING).await?;
    Ok(Json(drives))
}

/// POST /api/v1/admin/drives/{id}/approve
///
/// Approve a drive, making it visible and open to students.
pub async fn approve_drive(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Drive>> {
    let drive = DriveRepo::set_status(&state.pool, id, DRIVE_APPROVED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "drive", id }))?;
    tracing::info!(drive_id = id, "Drive approved");
    Ok(Json(drive))
}

/// POST /api/v1/admin/drives/{id}/reject
///
/// Reject a drive.
pub async fn reject_drive(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Drive>> {
    let drive = DriveRepo::set_status(&state.pool, id, DRIVE_REJECTED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "drive", id }))?;
    tracing::info!(drive_id = id, "Drive rejected");
    Ok(Json(drive))
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/applications
///
/// List every application portal-wide with joined detail, newest
/// first.
pub async fn list_applications(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<ApplicationDetail>>> {
    let applications = ApplicationRepo::list_details(&state.pool).await?;
    Ok(Json(applications))
}
