//! Handlers for the `/student` resource (profile, browsing drives,
//! applying).
//!
//! All handlers require the `student` role via [`RequireStudent`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_core::status::DRIVE_APPROVED;
use placement_core::types::DbId;
use placement_db::models::application::{Application, ApplicationDetail};
use placement_db::models::drive::Drive;
use placement_db::models::student::{Student, UpdateStudent};
use placement_db::repositories::{ApplicationRepo, DriveRepo, StudentRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStudent;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Response body for `GET /student/dashboard`.
#[derive(Debug, Serialize)]
pub struct StudentDashboard {
    pub student: Student,
    /// Drives currently open to applications.
    pub approved_drives: Vec<Drive>,
    pub applications: Vec<ApplicationDetail>,
    /// Drive ids the student has already applied to, so clients can
    /// flag them in the open-drives list.
    pub applied_drive_ids: Vec<DbId>,
}

/// Response body for `GET /student/drives`.
#[derive(Debug, Serialize)]
pub struct StudentDrives {
    pub drives: Vec<Drive>,
    pub applied_drive_ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/student/dashboard
///
/// The student's profile, open drives, their applications and the set
/// of drives already applied to.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
) -> AppResult<Json<StudentDashboard>> {
    let student = acting_student(&state, &auth).await?;
    let approved_drives = DriveRepo::list_by_status(&state.pool, DRIVE_APPROVED).await?;
    let applications = ApplicationRepo::list_details_by_student(&state.pool, student.id).await?;
    let applied_drive_ids = ApplicationRepo::drive_ids_for_student(&state.pool, student.id).await?;

    Ok(Json(StudentDashboard {
        student,
        approved_drives,
        applications,
        applied_drive_ids,
    }))
}

/// GET /api/v1/student/profile
pub async fn get_profile(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
) -> AppResult<Json<Student>> {
    let student = acting_student(&state, &auth).await?;
    Ok(Json(student))
}

/// PUT /api/v1/student/profile
///
/// Update the caller's own profile fields.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    let student = acting_student(&state, &auth).await?;
    let updated = StudentRepo::update(&state.pool, student.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "student",
            id: student.id,
        }))?;
    Ok(Json(updated))
}

/// GET /api/v1/student/drives
///
/// Drives open to applications, with the ids the caller has already
/// applied to.
pub async fn list_drives(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
) -> AppResult<Json<StudentDrives>> {
    let student = acting_student(&state, &auth).await?;
    let drives = DriveRepo::list_by_status(&state.pool, DRIVE_APPROVED).await?;
    let applied_drive_ids = ApplicationRepo::drive_ids_for_student(&state.pool, student.id).await?;

    Ok(Json(StudentDrives {
        drives,
        applied_drive_ids,
    }))
}

/// POST /api/v1/student/drives/{id}/apply
///
/// Apply to a drive. Checked in order: the drive must exist, be open
/// to applications, not already applied to, and the caller's CGPA must
/// meet the drive's minimum. Returns 201 Created.
pub async fn apply_to_drive(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Application>)> {
    let student = acting_student(&state, &auth).await?;

    let drive = DriveRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "drive", id }))?;

    if drive.status != DRIVE_APPROVED {
        return Err(AppError::Core(CoreError::Validation(
            "This drive is not available for applications".into(),
        )));
    }

    if ApplicationRepo::find_by_student_and_drive(&state.pool, student.id, drive.id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You have already applied to this drive".into(),
        )));
    }

    if student.cgpa < drive.min_cgpa {
        return Err(AppError::Core(CoreError::Validation(format!(
            "You do not meet the minimum CGPA requirement of {}",
            drive.min_cgpa
        ))));
    }

    // The unique constraint still guards the race between the duplicate
    // check above and this insert.
    let application = ApplicationRepo::create(&state.pool, student.id, drive.id).await?;
    tracing::info!(
        application_id = application.id,
        student_id = student.id,
        drive_id = drive.id,
        "Application submitted"
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/student/history
///
/// The caller's applications with joined detail, newest first.
pub async fn history(
    State(state): State<AppState>,
    RequireStudent(auth): RequireStudent,
) -> AppResult<Json<Vec<ApplicationDetail>>> {
    let student = acting_student(&state, &auth).await?;
    let applications = ApplicationRepo::list_details_by_student(&state.pool, student.id).await?;
    Ok(Json(applications))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the student profile behind the authenticated account.
///
/// A student token without a profile row means the account was created
/// outside the registration flow; that is an integrity error, not a
/// client error.
async fn acting_student(state: &AppState, auth: &AuthUser) -> AppResult<Student> {
    StudentRepo::find_by_account_id(&state.pool, auth.account_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Student account {} has no profile row",
                auth.account_id
            ))
        })
}
