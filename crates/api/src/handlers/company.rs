//! Handlers for the `/company` resource (profile, drives, applicant
//! review).
//!
//! All handlers require the `company` role via [`RequireCompany`].
//! Every drive operation re-checks ownership: holding a company token
//! grants nothing on another company's drives.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_core::status::{is_application_status, APPROVAL_APPROVED, DRIVE_CLOSED};
use placement_core::types::DbId;
use placement_db::models::application::{Application, ApplicationDetail};
use placement_db::models::company::{Company, UpdateCompany};
use placement_db::models::drive::{CreateDrive, Drive, UpdateDrive};
use placement_db::repositories::{ApplicationRepo, CompanyRepo, DriveRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireCompany;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /company/applications/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
}

/// Response body for `GET /company/dashboard`.
#[derive(Debug, Serialize)]
pub struct CompanyDashboard {
    pub company: Company,
    pub drives: Vec<Drive>,
    /// Applications received across all of this company's drives.
    pub total_applications: i64,
}

// ---------------------------------------------------------------------------
// Dashboard and profile
// ---------------------------------------------------------------------------

/// GET /api/v1/company/dashboard
///
/// The company's profile, its drives and the total applications
/// received.
pub async fn dashboard(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
) -> AppResult<Json<CompanyDashboard>> {
    let company = acting_company(&state, &auth).await?;
    let drives = DriveRepo::list_by_company(&state.pool, company.id).await?;
    let total_applications = ApplicationRepo::count_by_company(&state.pool, company.id).await?;

    Ok(Json(CompanyDashboard {
        company,
        drives,
        total_applications,
    }))
}

/// GET /api/v1/company/profile
pub async fn get_profile(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
) -> AppResult<Json<Company>> {
    let company = acting_company(&state, &auth).await?;
    Ok(Json(company))
}

/// PUT /api/v1/company/profile
///
/// Update the caller's own profile fields.
pub async fn update_profile(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = acting_company(&state, &auth).await?;
    let updated = CompanyRepo::update(&state.pool, company.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "company",
            id: company.id,
        }))?;
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Drives
// ---------------------------------------------------------------------------

/// GET /api/v1/company/drives
///
/// List the caller's own drives, newest first.
pub async fn list_drives(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
) -> AppResult<Json<Vec<Drive>>> {
    let company = acting_company(&state, &auth).await?;
    let drives = DriveRepo::list_by_company(&state.pool, company.id).await?;
    Ok(Json(drives))
}

/// POST /api/v1/company/drives
///
/// Create a drive. Only approved companies may post; the new drive
/// starts pending admin approval. Returns 201 Created.
pub async fn create_drive(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Json(input): Json<CreateDrive>,
) -> AppResult<(StatusCode, Json<Drive>)> {
    let company = acting_company(&state, &auth).await?;

    if company.approval_status != APPROVAL_APPROVED {
        return Err(AppError::Core(CoreError::Forbidden(
            "Company must be approved before creating drives".into(),
        )));
    }

    let drive = DriveRepo::create(&state.pool, company.id, &input).await?;
    tracing::info!(drive_id = drive.id, company_id = company.id, "Drive created");
    Ok((StatusCode::CREATED, Json(drive)))
}

/// GET /api/v1/company/drives/{id}
///
/// Fetch one of the caller's drives.
pub async fn get_drive(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Path(id): Path<DbId>,
) -> AppResult<Json<Drive>> {
    let company = acting_company(&state, &auth).await?;
    let drive = owned_drive(&state, company.id, id).await?;
    Ok(Json(drive))
}

/// PUT /api/v1/company/drives/{id}
///
/// Update one of the caller's drives.
pub async fn update_drive(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDrive>,
) -> AppResult<Json<Drive>> {
    let company = acting_company(&state, &auth).await?;
    owned_drive(&state, company.id, id).await?;

    let drive = DriveRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "drive", id }))?;
    Ok(Json(drive))
}

/// POST /api/v1/company/drives/{id}/close
///
/// Close one of the caller's drives to further applications.
pub async fn close_drive(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Path(id): Path<DbId>,
) -> AppResult<Json<Drive>> {
    let company = acting_company(&state, &auth).await?;
    owned_drive(&state, company.id, id).await?;

    let drive = DriveRepo::set_status(&state.pool, id, DRIVE_CLOSED)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "drive", id }))?;
    tracing::info!(drive_id = id, "Drive closed");
    Ok(Json(drive))
}

/// DELETE /api/v1/company/drives/{id}
///
/// Delete one of the caller's drives and its applications. Returns
/// 204 No Content.
pub async fn delete_drive(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let company = acting_company(&state, &auth).await?;
    owned_drive(&state, company.id, id).await?;

    DriveRepo::delete(&state.pool, id).await?;
    tracing::info!(drive_id = id, "Drive deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

/// GET /api/v1/company/drives/{id}/applications
///
/// List applicants to one of the caller's drives, newest first.
pub async fn list_drive_applications(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<ApplicationDetail>>> {
    let company = acting_company(&state, &auth).await?;
    owned_drive(&state, company.id, id).await?;

    let applications = ApplicationRepo::list_details_by_drive(&state.pool, id).await?;
    Ok(Json(applications))
}

/// POST /api/v1/company/applications/{id}/status
///
/// Move an application through the hiring funnel. Unknown statuses
/// are ignored: the row is returned unchanged rather than rejected.
/// Transitions are not sequenced; any known status may follow any
/// other.
pub async fn update_application_status(
    State(state): State<AppState>,
    RequireCompany(auth): RequireCompany,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateApplicationStatusRequest>,
) -> AppResult<Json<Application>> {
    let application = ApplicationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "application",
            id,
        }))?;

    // Ownership runs through the drive the application targets.
    let company = acting_company(&state, &auth).await?;
    owned_drive(&state, company.id, application.drive_id).await?;

    if !is_application_status(&input.status) {
        return Ok(Json(application));
    }

    let updated = ApplicationRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "application",
            id,
        }))?;
    tracing::info!(application_id = id, status = %updated.status, "Application status updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the company profile behind the authenticated account.
///
/// A company token without a profile row means the account was created
/// outside the registration flow; that is an integrity error, not a
/// client error.
async fn acting_company(state: &AppState, auth: &AuthUser) -> AppResult<Company> {
    CompanyRepo::find_by_account_id(&state.pool, auth.account_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Company account {} has no profile row",
                auth.account_id
            ))
        })
}

/// Fetch a drive and verify it belongs to `company_id`.
///
/// Missing drives are 404; someone else's drives are 403.
async fn owned_drive(state: &AppState, company_id: DbId, drive_id: DbId) -> AppResult<Drive> {
    let drive = DriveRepo::find_by_id(&state.pool, drive_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "drive",
            id: drive_id,
        }))?;

    if drive.company_id != company_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this drive".into(),
        )));
    }
    Ok(drive)
}
