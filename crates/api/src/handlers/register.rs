//! Handlers for the public `/register` resource.
//!
//! Registration is the only unauthenticated write surface: it creates
//! a login account and the role-specific profile in one transaction,
//! so a failure partway leaves no orphaned account.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use placement_core::error::CoreError;
use placement_db::models::company::{Company, NewCompanyAccount};
use placement_db::models::student::{NewStudentAccount, Student};
use placement_db::repositories::{AccountRepo, CompanyRepo, StudentRepo};
use serde::Deserialize;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Minimum password length enforced on registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /register/student`.
#[derive(Debug, Deserialize)]
pub struct RegisterStudentRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub roll_number: String,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub cgpa: Option<f64>,
}

/// Request body for `POST /register/company`.
#[derive(Debug, Deserialize)]
pub struct RegisterCompanyRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub hr_name: Option<String>,
    pub hr_email: Option<String>,
    pub hr_phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/register/student
///
/// Create a student account plus profile. Returns the profile with
/// 201 Created.
pub async fn register_student(
    State(state): State<AppState>,
    Json(input): Json<RegisterStudentRequest>,
) -> AppResult<(StatusCode, Json<Student>)> {
    // 1. Passwords must match before anything touches the database.
    if input.password != input.confirm_password {
        return Err(AppError::Core(CoreError::Validation(
            "Passwords do not match".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // 2. Friendly duplicate checks. The unique constraints still back
    //    these up under concurrent registration.
    if AccountRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }
    if StudentRepo::find_by_roll_number(&state.pool, &input.roll_number)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Roll number already registered".into(),
        )));
    }

    // 3. Hash and create account + profile atomically.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = NewStudentAccount {
        email: input.email,
        password_hash,
        name: input.name,
        roll_number: input.roll_number,
        phone: input.phone,
        branch: input.branch,
        cgpa: input.cgpa.unwrap_or(0.0),
    };
    let student = StudentRepo::create_with_account(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// POST /api/v1/register/company
///
/// Create a company account plus profile. The profile starts pending
/// admin approval, so the company cannot log in yet. Returns the
/// profile with 201 Created.
pub async fn register_company(
    State(state): State<AppState>,
    Json(input): Json<RegisterCompanyRequest>,
) -> AppResult<(StatusCode, Json<Company>)> {
    if input.password != input.confirm_password {
        return Err(AppError::Core(CoreError::Validation(
            "Passwords do not match".into(),
        )));
    }
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if AccountRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = NewCompanyAccount {
        email: input.email,
        password_hash,
        name: input.name,
        hr_name: input.hr_name,
        hr_email: input.hr_email,
        hr_phone: input.hr_phone,
        website: input.website,
        description: input.description,
    };
    let company = CompanyRepo::create_with_account(&state.pool, &create_dto).await?;

    Ok((StatusCode::CREATED, Json(company)))
}
